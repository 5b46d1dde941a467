use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::NewHabit;
use crate::factors::{Category, Frequency};
use crate::shared::{DomainError, HabitId};

/// A recurring lifestyle activity.
///
/// `emissions` is a cached annotation written by the emissions engine; it is
/// re-derived on every recompute and never trusted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    id: HabitId,
    category: Category,
    #[serde(rename = "type")]
    habit_type: String,
    quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    consumption: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    frequency: Option<Frequency>,
    #[serde(default)]
    emissions: f64,
    created_at: DateTime<Utc>,
}

impl Habit {
    pub fn new(
        id: HabitId,
        input: NewHabit,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let inputs = input.validate()?;

        Ok(Self {
            id,
            category: inputs.category,
            habit_type: inputs.habit_type,
            quantity: inputs.quantity,
            distance: inputs.distance,
            consumption: inputs.consumption,
            frequency: inputs.frequency,
            emissions: 0.0,
            created_at,
        })
    }

    /// Rebuild a habit from stored fields without validation
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: HabitId,
        category: Category,
        habit_type: String,
        quantity: f64,
        distance: Option<f64>,
        consumption: Option<f64>,
        frequency: Option<Frequency>,
        emissions: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            category,
            habit_type,
            quantity,
            distance,
            consumption,
            frequency,
            emissions,
            created_at,
        }
    }

    pub fn id(&self) -> HabitId {
        self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn habit_type(&self) -> &str {
        &self.habit_type
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn distance(&self) -> Option<f64> {
        self.distance
    }

    pub fn consumption(&self) -> Option<f64> {
        self.consumption
    }

    pub fn frequency(&self) -> Option<Frequency> {
        self.frequency
    }

    pub fn emissions(&self) -> f64 {
        self.emissions
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn annotate_emissions(&mut self, emissions: f64) {
        self.emissions = emissions;
    }
}
