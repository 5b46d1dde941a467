use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::factors::Category;
use crate::shared::MonthKey;

/// Monthly emissions rollup in kg CO2e
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAggregate {
    month: MonthKey,
    total: f64,
    #[serde(default)]
    by_category: BTreeMap<Category, f64>,
}

impl MonthlyAggregate {
    pub fn new(month: MonthKey, total: f64, by_category: BTreeMap<Category, f64>) -> Self {
        Self {
            month,
            total,
            by_category,
        }
    }

    /// Placeholder for a month with no recorded emissions
    pub fn empty(month: MonthKey) -> Self {
        Self {
            month,
            total: 0.0,
            by_category: BTreeMap::new(),
        }
    }

    pub fn month(&self) -> MonthKey {
        self.month
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn by_category(&self) -> &BTreeMap<Category, f64> {
        &self.by_category
    }

    /// Emissions for one category, 0 when the category is absent
    pub fn category(&self, category: Category) -> f64 {
        self.by_category.get(&category).copied().unwrap_or(0.0)
    }

    /// Percentage of the total attributable to `category`; 0 for an empty total
    pub fn share(&self, category: Category) -> f64 {
        if self.total <= 0.0 {
            return 0.0;
        }
        self.category(category) / self.total * 100.0
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }
}
