use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::parameters::ScenarioParameters;
use super::projector::Projection;
use crate::shared::{DomainError, ScenarioId};

/// Saved what-if projection. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    id: ScenarioId,
    created_at: DateTime<Utc>,
    name: String,
    #[serde(default)]
    description: String,
    baseline_emissions: f64,
    projected_emissions: f64,
    reduction_percent: f64,
    reduction_kg: f64,
    car_reduction: f64,
    meat_days: u8,
    energy_reduction: f64,
    recycling_increase: f64,
}

impl Scenario {
    pub fn new(
        id: ScenarioId,
        name: String,
        description: String,
        params: &ScenarioParameters,
        projection: &Projection,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Scenario name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id,
            created_at,
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            baseline_emissions: projection.baseline_total,
            projected_emissions: projection.projected,
            reduction_percent: projection.reduction_percent,
            reduction_kg: projection.reduction_kg,
            car_reduction: params.car_reduction(),
            meat_days: params.meat_days(),
            energy_reduction: params.energy_reduction(),
            recycling_increase: params.recycling_increase(),
        })
    }

    pub fn id(&self) -> ScenarioId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn baseline_emissions(&self) -> f64 {
        self.baseline_emissions
    }

    pub fn projected_emissions(&self) -> f64 {
        self.projected_emissions
    }

    pub fn reduction_percent(&self) -> f64 {
        self.reduction_percent
    }

    pub fn reduction_kg(&self) -> f64 {
        self.reduction_kg
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

    /// Input parameters the scenario was projected with
    pub fn parameters(&self) -> Result<ScenarioParameters, DomainError> {
        ScenarioParameters::new(
            self.car_reduction,
            self.meat_days,
            self.energy_reduction,
            self.recycling_increase,
        )
    }
}
