use serde::{Deserialize, Serialize};

use ecotrack_domain::scenario::{Projection, Scenario};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDto {
    pub id: u64,
    pub created_at: String,
    pub name: String,
    pub description: String,
    pub baseline_emissions: f64,
    pub projected_emissions: f64,
    pub reduction_percent: f64,
    pub reduction_kg: f64,
    pub car_reduction: f64,
    pub meat_days: u8,
    pub energy_reduction: f64,
    pub recycling_increase: f64,
}

impl From<&Scenario> for ScenarioDto {
    fn from(scenario: &Scenario) -> Self {
        Self {
            id: scenario.id().value(),
            created_at: scenario.created_at().to_rfc3339(),
            name: scenario.name().to_string(),
            description: scenario.description().to_string(),
            baseline_emissions: scenario.baseline_emissions(),
            projected_emissions: scenario.projected_emissions(),
            reduction_percent: scenario.reduction_percent(),
            reduction_kg: scenario.reduction_kg(),
            car_reduction: scenario.car_reduction(),
            meat_days: scenario.meat_days(),
            energy_reduction: scenario.energy_reduction(),
            recycling_increase: scenario.recycling_increase(),
        }
    }
}

/// Live what-if preview, not persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionDto {
    pub baseline: f64,
    pub projected: f64,
    pub reduction_kg: f64,
    pub reduction_percent: f64,
    pub transport_cut: f64,
    pub food_cut: f64,
    pub energy_cut: f64,
    pub waste_cut: f64,
}

impl From<&Projection> for ProjectionDto {
    fn from(p: &Projection) -> Self {
        Self {
            baseline: p.baseline_total,
            projected: p.projected,
            reduction_kg: p.reduction_kg,
            reduction_percent: p.reduction_percent,
            transport_cut: p.transport_cut,
            food_cut: p.food_cut,
            energy_cut: p.energy_cut,
            waste_cut: p.waste_cut,
        }
    }
}
