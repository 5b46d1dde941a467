mod aggregate;
mod tracker;

#[cfg(test)]
mod aggregate_test;

pub use aggregate::{week_bounds, Goal, WeeklyPlan};
pub use tracker::PlanTracker;
