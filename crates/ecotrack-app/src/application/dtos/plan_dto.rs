use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecotrack_domain::plan::WeeklyPlan;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDto {
    pub index: usize,
    pub value: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlanDto {
    pub id: u64,
    pub created_at: String,
    pub week_start: String,
    pub week_end: String,
    pub goals: Vec<GoalDto>,
    pub progress: u8,
    pub completed: bool,
    /// Whether the plan's week contains the time the DTO was built
    pub active: bool,
}

pub struct WeeklyPlanDtoMapper<'a> {
    plan: &'a WeeklyPlan,
    now: DateTime<Utc>,
}

impl<'a> WeeklyPlanDtoMapper<'a> {
    pub fn new(plan: &'a WeeklyPlan, now: DateTime<Utc>) -> Self {
        Self { plan, now }
    }

    pub fn to_dto(&self) -> WeeklyPlanDto {
        let plan = self.plan;
        WeeklyPlanDto {
            id: plan.id().value(),
            created_at: plan.created_at().to_rfc3339(),
            week_start: plan.week_start().to_rfc3339(),
            week_end: plan.week_end().to_rfc3339(),
            goals: plan
                .goals()
                .iter()
                .enumerate()
                .map(|(index, goal)| GoalDto {
                    index,
                    value: goal.value.clone(),
                    completed: goal.completed,
                })
                .collect(),
            progress: plan.progress(),
            completed: plan.is_completed(),
            active: plan.is_active(self.now),
        }
    }
}
