//! Ranking of a month's emissions by category, with a reduction tip per category and
//! progress against the user's monthly target.

use serde::{Deserialize, Serialize};

use crate::emissions::MonthlyAggregate;
use crate::factors::Category;
use crate::shared::MonthKey;
use crate::snapshot::UserSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInsight {
    pub rank: usize,
    pub category: Category,
    pub emissions: f64,
    pub share_percent: f64,
    pub tip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetProgress {
    pub target_kg: f64,
    pub actual_kg: f64,
    /// Negative when the target is exceeded
    pub remaining_kg: f64,
    pub used_percent: f64,
    pub met: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintInsights {
    pub month: MonthKey,
    pub total: f64,
    pub categories: Vec<CategoryInsight>,
    pub target: Option<TargetProgress>,
}

pub fn tip_for(category: Category) -> &'static str {
    match category {
        Category::Transport => {
            "Swap short car trips for walking, cycling or public transport, and car-pool where you can."
        }
        Category::Energy => {
            "Lower the thermostat by a degree, switch off standby devices and consider a renewable tariff."
        }
        Category::Food => {
            "Add meat-free days and favour poultry, legumes and seasonal vegetables over beef and lamb."
        }
        Category::Shopping => {
            "Buy fewer, longer-lasting items and choose second-hand electronics and furniture."
        }
        Category::Waste => {
            "Recycle and compost more; plan meals to cut food waste going to landfill."
        }
    }
}

/// Build insights for one month's aggregate.
///
/// Categories with no emissions are left out. Ties keep the fixed category order.
pub fn insights(aggregate: &MonthlyAggregate, settings: &UserSettings) -> FootprintInsights {
    let mut ranked: Vec<(Category, f64)> = Category::ALL
        .iter()
        .map(|c| (*c, aggregate.category(*c)))
        .filter(|(_, kg)| *kg > 0.0)
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let categories = ranked
        .into_iter()
        .enumerate()
        .map(|(i, (category, emissions))| CategoryInsight {
            rank: i + 1,
            category,
            emissions,
            share_percent: aggregate.share(category),
            tip: tip_for(category).to_string(),
        })
        .collect();

    let target = settings
        .monthly_target_kg()
        .map(|target_kg| target_progress(target_kg, aggregate.total()));

    FootprintInsights {
        month: aggregate.month(),
        total: aggregate.total(),
        categories,
        target,
    }
}

fn target_progress(target_kg: f64, actual_kg: f64) -> TargetProgress {
    let used_percent = if target_kg > 0.0 {
        actual_kg / target_kg * 100.0
    } else {
        0.0
    };

    TargetProgress {
        target_kg,
        actual_kg,
        remaining_kg: target_kg - actual_kg,
        used_percent,
        met: actual_kg <= target_kg,
    }
}
