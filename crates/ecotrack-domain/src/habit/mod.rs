mod aggregate;
mod store;
mod value_objects;

#[cfg(test)]
mod aggregate_test;

pub use aggregate::Habit;
pub use store::HabitStore;
pub use value_objects::NewHabit;
