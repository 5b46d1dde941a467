use serde::{Deserialize, Serialize};

use super::parameters::ScenarioParameters;
use crate::emissions::MonthlyAggregate;
use crate::factors::Category;

/// Share of transport emissions avoided per unit of car-use reduction
pub const CAR_REDUCTION_EFFECTIVENESS: f64 = 0.5;
/// kg CO2e saved by one meat-free day
pub const MEAT_FREE_DAY_SAVING_KG: f64 = 0.5;
pub const WEEKS_PER_MONTH: f64 = 4.0;
/// Share of waste emissions avoided per unit of recycling increase
pub const RECYCLING_EFFECTIVENESS: f64 = 0.8;

/// Outcome of projecting a baseline month under a set of parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub baseline_total: f64,
    pub transport_cut: f64,
    pub food_cut: f64,
    pub energy_cut: f64,
    pub waste_cut: f64,
    /// Never below zero
    pub projected: f64,
    pub reduction_kg: f64,
    /// 0 when the baseline is empty
    pub reduction_percent: f64,
}

/// Linear what-if model over one monthly aggregate.
pub struct ScenarioProjector;

impl ScenarioProjector {
    pub fn project(baseline: &MonthlyAggregate, params: &ScenarioParameters) -> Projection {
        let baseline_total = baseline.total();

        let transport_cut = baseline.category(Category::Transport)
            * CAR_REDUCTION_EFFECTIVENESS
            * params.car_reduction();
        let food_cut = f64::from(params.meat_days()) * MEAT_FREE_DAY_SAVING_KG * WEEKS_PER_MONTH;
        let energy_cut = baseline.category(Category::Energy) * params.energy_reduction();
        let waste_cut = baseline.category(Category::Waste)
            * RECYCLING_EFFECTIVENESS
            * params.recycling_increase();

        let raw = baseline_total - transport_cut - food_cut - energy_cut - waste_cut;
        let projected = raw.max(0.0);
        let reduction_kg = baseline_total - projected;
        let reduction_percent = if baseline_total > 0.0 {
            reduction_kg / baseline_total * 100.0
        } else {
            0.0
        };

        Projection {
            baseline_total,
            transport_cut,
            food_cut,
            energy_cut,
            waste_cut,
            projected,
            reduction_kg,
            reduction_percent,
        }
    }
}
