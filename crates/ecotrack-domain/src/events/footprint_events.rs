use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::events::DomainEvent;
use crate::factors::Category;
use crate::shared::{HabitId, MonthKey, PlanId, ScenarioId};

macro_rules! impl_domain_event {
    ($type:ty) => {
        impl DomainEvent for $type {
            fn as_any(&self) -> &(dyn Any + Send + Sync) {
                self
            }

            fn event_type_name(&self) -> &'static str {
                std::any::type_name::<Self>()
            }
        }
    };
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitAdded {
    pub habit_id: HabitId,
    pub category: Category,
    pub habit_type: String,
    pub emissions: f64,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(HabitAdded);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitRemoved {
    pub habit_id: HabitId,
    pub category: Category,
    pub habit_type: String,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(HabitRemoved);

/// Fired after the current month's aggregate was recomputed and stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionsRecomputed {
    pub month: MonthKey,
    pub total: f64,
    pub habit_count: usize,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(EmissionsRecomputed);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSaved {
    pub scenario_id: ScenarioId,
    pub name: String,
    pub reduction_kg: f64,
    pub reduction_percent: f64,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(ScenarioSaved);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDeleted {
    pub scenario_id: ScenarioId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(ScenarioDeleted);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPlanCreated {
    pub plan_id: PlanId,
    pub goal_count: usize,
    pub week_start: DateTime<Utc>,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(WeeklyPlanCreated);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyGoalToggled {
    pub plan_id: PlanId,
    pub goal_index: usize,
    pub completed: bool,
    pub progress: u8,
    pub plan_completed: bool,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(WeeklyGoalToggled);
