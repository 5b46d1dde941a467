use serde::Serialize;

use crate::application::commands::command_handler::Command;
use crate::application::dtos::{
    HabitDto, MonthlyAggregateDto, ScenarioDto, UserSettingsDto, WeeklyPlanDto,
};
use ecotrack_domain::habit::NewHabit;
use ecotrack_domain::scenario::ScenarioParameters;
use ecotrack_domain::shared::{HabitId, PlanId, ScenarioId};

/// Add a habit and refresh the current month
#[derive(Debug, Clone)]
pub struct AddHabitCommand {
    pub habit: NewHabit,
}

impl Command for AddHabitCommand {}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddHabitResult {
    pub habit: HabitDto,
    pub month: MonthlyAggregateDto,
}

#[derive(Debug, Clone)]
pub struct RemoveHabitCommand {
    pub habit_id: HabitId,
}

impl Command for RemoveHabitCommand {}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveHabitResult {
    pub removed: bool,
    pub month: Option<MonthlyAggregateDto>,
}

/// Recompute the current month without changing any habit
#[derive(Debug, Clone, Default)]
pub struct RecomputeEmissionsCommand;

impl Command for RecomputeEmissionsCommand {}

#[derive(Debug, Clone)]
pub struct SaveScenarioCommand {
    pub name: String,
    pub description: String,
    pub parameters: ScenarioParameters,
}

impl Command for SaveScenarioCommand {}

#[derive(Debug, Clone)]
pub struct DeleteScenarioCommand {
    pub scenario_id: ScenarioId,
}

impl Command for DeleteScenarioCommand {}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteScenarioResult {
    pub removed: bool,
}

#[derive(Debug, Clone)]
pub struct CreateWeeklyPlanCommand {
    pub goals: Vec<String>,
}

impl Command for CreateWeeklyPlanCommand {}

/// Toggle one goal; `plan_id` defaults to the current plan
#[derive(Debug, Clone)]
pub struct ToggleGoalCommand {
    pub plan_id: Option<PlanId>,
    pub goal_index: usize,
    pub completed: bool,
}

impl Command for ToggleGoalCommand {}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleGoalResult {
    /// `None` when the plan or goal index does not exist
    pub plan: Option<WeeklyPlanDto>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSettingsCommand {
    pub display_name: Option<String>,
    pub monthly_target_kg: Option<f64>,
    pub clear_target: bool,
}

impl Command for UpdateSettingsCommand {}

pub type SaveScenarioResult = ScenarioDto;
pub type CreateWeeklyPlanResult = WeeklyPlanDto;
pub type UpdateSettingsResult = UserSettingsDto;
