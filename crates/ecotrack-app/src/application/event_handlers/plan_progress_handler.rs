use async_trait::async_trait;
use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ecotrack_domain::events::footprint_events::{WeeklyGoalToggled, WeeklyPlanCreated};
use ecotrack_domain::events::EventHandler;
use ecotrack_domain::shared::DomainError;

/// Logs weekly plan milestones and counts completions seen this session
#[derive(Clone, Default)]
pub struct PlanProgressEventHandler {
    completions: Arc<AtomicUsize>,
}

impl PlanProgressEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn completions(&self) -> usize {
        self.completions.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl EventHandler<WeeklyPlanCreated> for PlanProgressEventHandler {
    async fn handle(&self, event: &WeeklyPlanCreated) -> Result<(), DomainError> {
        info!(
            "Weekly plan {} started for week of {} with {} goal(s)",
            event.plan_id,
            event.week_start.format("%Y-%m-%d"),
            event.goal_count
        );
        Ok(())
    }
}

#[async_trait]
impl EventHandler<WeeklyGoalToggled> for PlanProgressEventHandler {
    async fn handle(&self, event: &WeeklyGoalToggled) -> Result<(), DomainError> {
        if event.plan_completed {
            self.completions.fetch_add(1, Ordering::Relaxed);
            info!("Weekly plan {} completed, all goals done", event.plan_id);
        } else {
            info!(
                "Weekly plan {} progress {}% (goal {} -> {})",
                event.plan_id, event.progress, event.goal_index, event.completed
            );
        }
        Ok(())
    }
}
