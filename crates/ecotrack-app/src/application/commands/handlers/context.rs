use std::sync::Arc;

use crate::application::services::EmissionsService;
use ecotrack_domain::emissions::MonthlyAggregate;
use ecotrack_domain::events::footprint_events::EmissionsRecomputed;
use ecotrack_domain::events::EventBus;
use ecotrack_domain::shared::{Clock, DomainError};
use ecotrack_domain::snapshot::{AppSnapshot, SnapshotRepository};

/// Collaborators shared by every command handler
#[derive(Clone)]
pub struct HandlerContext {
    pub snapshot_repo: Arc<dyn SnapshotRepository>,
    pub emissions: Arc<EmissionsService>,
    pub clock: Arc<dyn Clock>,
    pub event_bus: Arc<dyn EventBus>,
}

impl HandlerContext {
    pub fn new(
        snapshot_repo: Arc<dyn SnapshotRepository>,
        clock: Arc<dyn Clock>,
        event_bus: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            snapshot_repo,
            emissions: Arc::new(EmissionsService::new(clock.clone())),
            clock,
            event_bus,
        }
    }

    pub async fn load(&self) -> Result<AppSnapshot, DomainError> {
        self.snapshot_repo.load().await
    }

    /// Refresh the emissions cache and write the whole snapshot back.
    ///
    /// Only habit changes and explicit recomputes go through here; they are the only
    /// commands that upsert the current month into the ledger.
    pub async fn commit(&self, snapshot: &mut AppSnapshot) -> Result<MonthlyAggregate, DomainError> {
        let aggregate = self.emissions.refresh(snapshot);
        self.snapshot_repo.save(snapshot).await?;
        Ok(aggregate)
    }

    /// Write the snapshot back as is, leaving the emissions ledger untouched
    pub async fn save(&self, snapshot: &AppSnapshot) -> Result<(), DomainError> {
        self.snapshot_repo.save(snapshot).await
    }

    pub async fn publish_recomputed(
        &self,
        aggregate: &MonthlyAggregate,
        habit_count: usize,
    ) -> Result<(), DomainError> {
        let event = EmissionsRecomputed {
            month: aggregate.month(),
            total: aggregate.total(),
            habit_count,
            occurred_at: self.clock.now(),
        };
        self.event_bus.publish(Box::new(event)).await
    }
}
