use serde::{Deserialize, Serialize};

use ecotrack_domain::habit::Habit;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitDto {
    pub id: u64,
    pub category: String,
    #[serde(rename = "type")]
    pub habit_type: String,
    pub quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumption: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    pub emissions: f64,
    pub created_at: String,
}

impl From<&Habit> for HabitDto {
    fn from(habit: &Habit) -> Self {
        Self {
            id: habit.id().value(),
            category: habit.category().as_str().to_string(),
            habit_type: habit.habit_type().to_string(),
            quantity: habit.quantity(),
            distance: habit.distance(),
            consumption: habit.consumption(),
            frequency: habit.frequency().map(|f| f.as_str().to_string()),
            emissions: habit.emissions(),
            created_at: habit.created_at().to_rfc3339(),
        }
    }
}
