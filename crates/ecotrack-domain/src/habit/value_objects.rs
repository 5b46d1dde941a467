use serde::{Deserialize, Serialize};

use crate::factors::{emission_factor, known_types, Category, Frequency};
use crate::shared::DomainError;

/// User input for a habit before it receives an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHabit {
    pub category: Category,
    #[serde(rename = "type")]
    pub habit_type: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub consumption: Option<f64>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
}

/// Validated, normalized habit fields
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HabitInputs {
    pub category: Category,
    pub habit_type: String,
    pub quantity: f64,
    pub distance: Option<f64>,
    pub consumption: Option<f64>,
    pub frequency: Option<Frequency>,
}

impl NewHabit {
    pub fn transport(habit_type: &str, distance: f64, frequency: Frequency) -> Self {
        Self {
            category: Category::Transport,
            habit_type: habit_type.to_string(),
            quantity: None,
            distance: Some(distance),
            consumption: None,
            frequency: Some(frequency),
        }
    }

    pub fn energy(habit_type: &str, consumption: f64) -> Self {
        Self {
            category: Category::Energy,
            habit_type: habit_type.to_string(),
            quantity: None,
            distance: None,
            consumption: Some(consumption),
            frequency: None,
        }
    }

    /// Food, shopping and waste habits only carry a quantity
    pub fn with_quantity(category: Category, habit_type: &str, quantity: f64) -> Self {
        Self {
            category,
            habit_type: habit_type.to_string(),
            quantity: Some(quantity),
            distance: None,
            consumption: None,
            frequency: None,
        }
    }

    pub(crate) fn validate(self) -> Result<HabitInputs, DomainError> {
        let habit_type = self.habit_type.trim().to_lowercase();
        if habit_type.is_empty() {
            return Err(DomainError::Validation(
                "Habit type cannot be empty".to_string(),
            ));
        }

        if emission_factor(self.category, &habit_type).is_none() {
            return Err(DomainError::Validation(format!(
                "Unknown {} type '{}'. Known types: {}",
                self.category,
                habit_type,
                known_types(self.category).join(", ")
            )));
        }

        let quantity = check_amount("quantity", self.quantity)?;
        let distance = check_amount("distance", self.distance)?;
        let consumption = check_amount("consumption", self.consumption)?;

        let (quantity, distance, consumption, frequency) = match self.category {
            Category::Transport => {
                let distance = distance.ok_or_else(|| {
                    DomainError::Validation("Transport habits require a distance".to_string())
                })?;
                let frequency = self.frequency.ok_or_else(|| {
                    DomainError::Validation("Transport habits require a frequency".to_string())
                })?;
                (quantity.unwrap_or(1.0), Some(distance), None, Some(frequency))
            }
            Category::Energy => {
                let consumption = consumption.ok_or_else(|| {
                    DomainError::Validation("Energy habits require a consumption".to_string())
                })?;
                (quantity.unwrap_or(consumption), None, Some(consumption), None)
            }
            Category::Food | Category::Shopping | Category::Waste => {
                let quantity = quantity.ok_or_else(|| {
                    DomainError::Validation(format!(
                        "{} habits require a quantity",
                        self.category
                    ))
                })?;
                (quantity, None, None, None)
            }
        };

        Ok(HabitInputs {
            category: self.category,
            habit_type,
            quantity,
            distance,
            consumption,
            frequency,
        })
    }
}

fn check_amount(field: &str, value: Option<f64>) -> Result<Option<f64>, DomainError> {
    match value {
        Some(v) if !v.is_finite() => Err(DomainError::Validation(format!(
            "{} must be a finite number",
            field
        ))),
        Some(v) if v < 0.0 => Err(DomainError::Validation(format!(
            "{} cannot be negative",
            field
        ))),
        other => Ok(other),
    }
}
