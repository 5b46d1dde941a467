use std::sync::Arc;

use crate::application::dtos::{
    HabitDto, MonthlyAggregateDto, MonthlyTrendDto, ProjectionDto, ScenarioDto, UserSettingsDto,
    WeeklyPlanDto, WeeklyPlanDtoMapper,
};
use crate::application::services::EmissionsService;
use ecotrack_domain::emissions::EmissionsEngine;
use ecotrack_domain::insights::{insights, FootprintInsights};
use ecotrack_domain::scenario::{ScenarioParameters, ScenarioProjector};
use ecotrack_domain::shared::{Clock, DomainError, MonthKey};
use ecotrack_domain::snapshot::SnapshotRepository;

/// Read side. Nothing here writes to the repository; current-month figures are derived
/// from habit inputs rather than the cached annotations.
pub struct FootprintQueryService {
    snapshot_repo: Arc<dyn SnapshotRepository>,
    emissions: EmissionsService,
    clock: Arc<dyn Clock>,
}

impl FootprintQueryService {
    pub fn new(snapshot_repo: Arc<dyn SnapshotRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            snapshot_repo,
            emissions: EmissionsService::new(clock.clone()),
            clock,
        }
    }

    pub async fn list_habits(&self) -> Result<Vec<HabitDto>, DomainError> {
        let mut habits = self.snapshot_repo.load().await?.habits;
        EmissionsEngine::recompute(&mut habits, self.clock.now());
        Ok(habits.iter().map(HabitDto::from).collect())
    }

    pub async fn current_month(&self) -> Result<MonthlyAggregateDto, DomainError> {
        let snapshot = self.snapshot_repo.load().await?;
        Ok(MonthlyAggregateDto::from(&self.emissions.current(&snapshot)))
    }

    /// Stored aggregate for one month; `None` when nothing was recorded for it
    pub async fn month(&self, month: MonthKey) -> Result<Option<MonthlyAggregateDto>, DomainError> {
        let ledger = self.snapshot_repo.load().await?.ledger();
        Ok(ledger.for_month(month).map(MonthlyAggregateDto::from))
    }

    pub async fn history(&self) -> Result<Vec<MonthlyAggregateDto>, DomainError> {
        let ledger = self.snapshot_repo.load().await?.ledger();
        Ok(ledger.history().iter().map(MonthlyAggregateDto::from).collect())
    }

    pub async fn trend(&self) -> Result<Vec<MonthlyTrendDto>, DomainError> {
        let ledger = self.snapshot_repo.load().await?.ledger();
        Ok(ledger.trend().iter().map(MonthlyTrendDto::from).collect())
    }

    /// Project the current month without saving anything
    pub async fn preview_scenario(
        &self,
        params: &ScenarioParameters,
    ) -> Result<ProjectionDto, DomainError> {
        let snapshot = self.snapshot_repo.load().await?;
        let baseline = self.emissions.current(&snapshot);
        Ok(ProjectionDto::from(&ScenarioProjector::project(
            &baseline, params,
        )))
    }

    /// Saved scenarios, most recent first
    pub async fn list_scenarios(&self) -> Result<Vec<ScenarioDto>, DomainError> {
        let book = self.snapshot_repo.load().await?.scenario_book();
        Ok(book.newest_first().into_iter().map(ScenarioDto::from).collect())
    }

    pub async fn current_plan(&self) -> Result<Option<WeeklyPlanDto>, DomainError> {
        let tracker = self.snapshot_repo.load().await?.plan_tracker();
        let now = self.clock.now();
        Ok(tracker
            .current()
            .map(|plan| WeeklyPlanDtoMapper::new(plan, now).to_dto()))
    }

    pub async fn previous_plans(&self) -> Result<Vec<WeeklyPlanDto>, DomainError> {
        let tracker = self.snapshot_repo.load().await?.plan_tracker();
        let now = self.clock.now();
        Ok(tracker
            .previous_plans()
            .into_iter()
            .map(|plan| WeeklyPlanDtoMapper::new(plan, now).to_dto())
            .collect())
    }

    pub async fn insights(&self) -> Result<FootprintInsights, DomainError> {
        let snapshot = self.snapshot_repo.load().await?;
        let current = self.emissions.current(&snapshot);
        Ok(insights(&current, &snapshot.user_settings))
    }

    pub async fn settings(&self) -> Result<UserSettingsDto, DomainError> {
        let snapshot = self.snapshot_repo.load().await?;
        Ok(UserSettingsDto::from(&snapshot.user_settings))
    }
}
