use std::path::PathBuf;
use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::event_handlers::PlanProgressEventHandler;
use crate::application::queries::FootprintQueryService;
use crate::application::services::{ConfigService, EmissionsService};
use ecotrack_domain::shared::Clock;
use ecotrack_domain::snapshot::SnapshotRepository;
use ecotrack_infrastructure::events::InMemoryEventBus;
use ecotrack_infrastructure::persistence::Database;

/// Command handlers container
pub struct CommandHandlers {
    pub add_habit: Arc<AddHabitCommandHandler>,
    pub remove_habit: Arc<RemoveHabitCommandHandler>,
    pub recompute_emissions: Arc<RecomputeEmissionsCommandHandler>,
    pub save_scenario: Arc<SaveScenarioCommandHandler>,
    pub delete_scenario: Arc<DeleteScenarioCommandHandler>,
    pub create_weekly_plan: Arc<CreateWeeklyPlanCommandHandler>,
    pub toggle_goal: Arc<ToggleGoalCommandHandler>,
    pub update_settings: Arc<UpdateSettingsCommandHandler>,
}

pub struct Runtime {
    /// `None` when running against in-memory storage
    pub db: Option<Arc<Database>>,
    pub data_dir: Option<PathBuf>,
    pub clock: Arc<dyn Clock>,
    pub event_bus: Arc<InMemoryEventBus>,
}

pub struct Repositories {
    pub snapshot: Arc<dyn SnapshotRepository>,
}

pub struct Services {
    pub emissions: Arc<EmissionsService>,
    pub config: Option<Arc<ConfigService>>,
    pub plan_progress: PlanProgressEventHandler,
}

pub struct Queries {
    pub footprint: Arc<FootprintQueryService>,
}

pub struct AppState {
    pub runtime: Runtime,
    pub repositories: Repositories,
    pub services: Services,
    pub queries: Queries,
    pub command_handlers: CommandHandlers,
}

