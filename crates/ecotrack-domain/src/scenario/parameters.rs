use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

pub const MAX_MEAT_FREE_DAYS: u8 = 7;

/// Behaviour changes to simulate.
///
/// Fractions are in `[0, 1]`; `meat_days` counts meat-free days per week.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioParameters {
    car_reduction: f64,
    meat_days: u8,
    energy_reduction: f64,
    recycling_increase: f64,
}

impl ScenarioParameters {
    pub fn new(
        car_reduction: f64,
        meat_days: u8,
        energy_reduction: f64,
        recycling_increase: f64,
    ) -> Result<Self, DomainError> {
        check_fraction("carReduction", car_reduction)?;
        check_fraction("energyReduction", energy_reduction)?;
        check_fraction("recyclingIncrease", recycling_increase)?;
        if meat_days > MAX_MEAT_FREE_DAYS {
            return Err(DomainError::Validation(format!(
                "meatDays must be between 0 and {}, got {}",
                MAX_MEAT_FREE_DAYS, meat_days
            )));
        }

        Ok(Self {
            car_reduction,
            meat_days,
            energy_reduction,
            recycling_increase,
        })
    }

    /// Build from whole percentages (0-100), as entered on sliders
    pub fn from_percentages(
        car_reduction_pct: f64,
        meat_days: u8,
        energy_reduction_pct: f64,
        recycling_increase_pct: f64,
    ) -> Result<Self, DomainError> {
        Self::new(
            car_reduction_pct / 100.0,
            meat_days,
            energy_reduction_pct / 100.0,
            recycling_increase_pct / 100.0,
        )
    }

    pub fn car_reduction(&self) -> f64 {
        self.car_reduction
    }

    pub fn meat_days(&self) -> u8 {
        self.meat_days
    }

    pub fn energy_reduction(&self) -> f64 {
        self.energy_reduction
    }

    pub fn recycling_increase(&self) -> f64 {
        self.recycling_increase
    }
}

fn check_fraction(name: &str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(DomainError::Validation(format!(
            "{} must be a fraction between 0 and 1, got {}",
            name, value
        )));
    }
    Ok(())
}
