use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::warn;

use super::aggregate::MonthlyAggregate;
use crate::factors::{emission_factor, frequency_multiplier, Category};
use crate::habit::Habit;
use crate::shared::MonthKey;

/// Food quantities are weekly amounts
pub const FOOD_WEEKS_PER_MONTH: f64 = 4.0;
/// Waste quantities are weekly amounts
pub const WASTE_WEEKS_PER_MONTH: f64 = 4.0;

/// Converts habits into monthly CO2e figures.
///
/// Stateless: output depends only on the habits passed in and the as-of instant.
pub struct EmissionsEngine;

impl EmissionsEngine {
    /// Monthly emissions of a single habit.
    ///
    /// Habits whose type has no factor (e.g. restored from an older factor table)
    /// contribute zero and are logged.
    pub fn habit_emissions(habit: &Habit) -> f64 {
        let Some(factor) = emission_factor(habit.category(), habit.habit_type()) else {
            warn!(
                habit_id = habit.id().value(),
                category = habit.category().as_str(),
                habit_type = habit.habit_type(),
                "No emission factor for habit, counting it as zero"
            );
            return 0.0;
        };

        match habit.category() {
            Category::Transport => {
                let (Some(distance), Some(frequency)) = (habit.distance(), habit.frequency())
                else {
                    warn!(
                        habit_id = habit.id().value(),
                        "Transport habit missing distance or frequency, counting it as zero"
                    );
                    return 0.0;
                };
                distance * frequency_multiplier(frequency) * factor
            }
            Category::Energy => habit.consumption().unwrap_or(0.0) * factor,
            Category::Food => habit.quantity() * FOOD_WEEKS_PER_MONTH * factor,
            Category::Shopping => habit.quantity() * factor,
            Category::Waste => habit.quantity() * WASTE_WEEKS_PER_MONTH * factor,
        }
    }

    /// Annotate every habit with its emissions and return the month rollup for `as_of`.
    pub fn recompute(habits: &mut [Habit], as_of: DateTime<Utc>) -> MonthlyAggregate {
        for habit in habits.iter_mut() {
            let emissions = Self::habit_emissions(habit);
            habit.annotate_emissions(emissions);
        }
        Self::rollup(habits.iter().map(|h| (h.category(), h.emissions())), as_of)
    }

    /// Rollup derived from habit inputs, leaving the habits untouched
    pub fn summarize(habits: &[Habit], as_of: DateTime<Utc>) -> MonthlyAggregate {
        Self::rollup(
            habits.iter().map(|h| (h.category(), Self::habit_emissions(h))),
            as_of,
        )
    }

    fn rollup<I>(contributions: I, as_of: DateTime<Utc>) -> MonthlyAggregate
    where
        I: IntoIterator<Item = (Category, f64)>,
    {
        let mut by_category: BTreeMap<Category, f64> =
            Category::ALL.iter().map(|c| (*c, 0.0)).collect();

        let mut running_total = 0.0;
        for (category, emissions) in contributions {
            let slot = by_category.entry(category).or_insert(0.0);
            if !(*slot + emissions).is_finite() || !(running_total + emissions).is_finite() {
                warn!(
                    category = category.as_str(),
                    emissions, "Contribution would overflow the monthly rollup, skipping it"
                );
                continue;
            }
            *slot += emissions;
            running_total += emissions;
        }

        // BTreeMap iterates in Category order, so the sum is reproducible
        let total: f64 = by_category.values().sum();

        MonthlyAggregate::new(MonthKey::from_datetime(as_of), total, by_category)
    }
}
