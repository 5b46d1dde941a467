mod aggregate;
mod engine;

#[cfg(test)]
mod engine_test;

pub use aggregate::MonthlyAggregate;
pub use engine::{EmissionsEngine, FOOD_WEEKS_PER_MONTH, WASTE_WEEKS_PER_MONTH};
