use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use ecotrack_domain::emissions::MonthlyAggregate;
use ecotrack_domain::history::MonthlyTrendPoint;

/// Month rollup. Computed months list every category; the empty default lists none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAggregateDto {
    pub month: String,
    pub total: f64,
    pub by_category: BTreeMap<String, f64>,
}

impl From<&MonthlyAggregate> for MonthlyAggregateDto {
    fn from(aggregate: &MonthlyAggregate) -> Self {
        Self {
            month: aggregate.month().to_string(),
            total: aggregate.total(),
            by_category: aggregate
                .by_category()
                .iter()
                .map(|(c, v)| (c.as_str().to_string(), *v))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendDto {
    pub month: String,
    pub total: f64,
    pub change_kg: Option<f64>,
    pub change_percent: Option<f64>,
}

impl From<&MonthlyTrendPoint> for MonthlyTrendDto {
    fn from(point: &MonthlyTrendPoint) -> Self {
        Self {
            month: point.month.to_string(),
            total: point.total,
            change_kg: point.change_kg,
            change_percent: point.change_percent,
        }
    }
}
