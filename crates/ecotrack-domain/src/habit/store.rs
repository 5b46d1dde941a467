use chrono::{DateTime, Utc};

use super::aggregate::Habit;
use super::value_objects::NewHabit;
use crate::emissions::EmissionsEngine;
use crate::shared::{DomainError, HabitId, IdSequence};

/// Ordered habit collection; the only place habits are created or deleted.
#[derive(Debug, Clone, Default)]
pub struct HabitStore {
    habits: Vec<Habit>,
    sequence: IdSequence,
}

impl HabitStore {
    pub fn new(habits: Vec<Habit>) -> Self {
        let sequence = IdSequence::from_existing(habits.iter().map(|h| h.id().value()));
        Self { habits, sequence }
    }

    /// Validate and append a habit, assigning it a fresh id.
    ///
    /// Amounts whose monthly emissions, alone or added to the existing habits, are not a
    /// finite number are rejected: non-finite values cannot be stored.
    pub fn add(&mut self, input: NewHabit, now: DateTime<Utc>) -> Result<Habit, DomainError> {
        // A rejected habit must not consume an id
        let mut next = self.sequence;
        let id = HabitId::from_raw(next.next(now)?);
        let habit = Habit::new(id, input, now)?;

        let emissions = EmissionsEngine::habit_emissions(&habit);
        let monthly_total = self
            .habits
            .iter()
            .map(EmissionsEngine::habit_emissions)
            .sum::<f64>()
            + emissions;
        if !emissions.is_finite() || !monthly_total.is_finite() {
            return Err(DomainError::Validation(format!(
                "{} habit '{}' is too large to record",
                habit.category(),
                habit.habit_type()
            )));
        }

        self.sequence = next;
        self.habits.push(habit.clone());
        Ok(habit)
    }

    /// Remove a habit by id. Unknown ids are ignored.
    pub fn remove(&mut self, id: HabitId) -> Option<Habit> {
        let index = self.habits.iter().position(|h| h.id() == id)?;
        Some(self.habits.remove(index))
    }

    pub fn get(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id() == id)
    }

    pub fn list(&self) -> &[Habit] {
        &self.habits
    }

    pub fn habits_mut(&mut self) -> &mut [Habit] {
        &mut self.habits
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn into_habits(self) -> Vec<Habit> {
        self.habits
    }
}
