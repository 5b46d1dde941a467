#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::factors::{Category, Frequency};
    use crate::shared::{DomainError, HabitId};
    use chrono::{TimeZone, Utc};

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_create_transport_habit() {
        let habit = Habit::new(
            HabitId::from_raw(1),
            NewHabit::transport("car_gasoline", 20.0, Frequency::Daily),
            now(),
        )
        .unwrap();

        assert_eq!(habit.category(), Category::Transport);
        assert_eq!(habit.habit_type(), "car_gasoline");
        assert_eq!(habit.distance(), Some(20.0));
        assert_eq!(habit.frequency(), Some(Frequency::Daily));
        assert_eq!(habit.quantity(), 1.0);
        assert_eq!(habit.emissions(), 0.0);
    }

    #[test]
    fn test_habit_type_is_normalized() {
        let habit = Habit::new(
            HabitId::from_raw(1),
            NewHabit::with_quantity(Category::Food, "  Beef ", 1.0),
            now(),
        )
        .unwrap();

        assert_eq!(habit.habit_type(), "beef");
    }

    #[test]
    fn test_unknown_type_is_rejected_at_creation() {
        let result = Habit::new(
            HabitId::from_raw(1),
            NewHabit::transport("hoverboard", 5.0, Frequency::Weekly),
            now(),
        );

        match result {
            Err(DomainError::Validation(msg)) => {
                assert!(msg.contains("hoverboard"));
                assert!(msg.contains("car_gasoline"));
            }
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_transport_requires_distance_and_frequency() {
        let mut input = NewHabit::transport("bus", 10.0, Frequency::Weekly);
        input.frequency = None;
        assert!(Habit::new(HabitId::from_raw(1), input, now()).is_err());

        let mut input = NewHabit::transport("bus", 10.0, Frequency::Weekly);
        input.distance = None;
        assert!(Habit::new(HabitId::from_raw(1), input, now()).is_err());
    }

    #[test]
    fn test_energy_requires_consumption() {
        let mut input = NewHabit::energy("electricity", 300.0);
        input.consumption = None;

        let result = Habit::new(HabitId::from_raw(1), input, now());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_negative_and_non_finite_amounts_rejected() {
        let negative = NewHabit::with_quantity(Category::Waste, "landfill", -2.0);
        assert!(Habit::new(HabitId::from_raw(1), negative, now()).is_err());

        let nan = NewHabit::with_quantity(Category::Shopping, "books", f64::NAN);
        assert!(Habit::new(HabitId::from_raw(1), nan, now()).is_err());
    }

    #[test]
    fn test_habit_serializes_with_type_key() {
        let habit = Habit::new(
            HabitId::from_raw(7),
            NewHabit::with_quantity(Category::Food, "beef", 1.0),
            now(),
        )
        .unwrap();

        let json = serde_json::to_value(&habit).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["category"], "food");
        assert_eq!(json["type"], "beef");
        assert!(json.get("distance").is_none());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_store_assigns_distinct_ids_for_rapid_adds() {
        let mut store = HabitStore::default();

        let first = store
            .add(NewHabit::with_quantity(Category::Food, "beef", 1.0), now())
            .unwrap();
        let second = store
            .add(NewHabit::with_quantity(Category::Food, "rice", 2.0), now())
            .unwrap();

        assert_ne!(first.id(), second.id());
        assert!(second.id() > first.id());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_store_preserves_insertion_order() {
        let mut store = HabitStore::default();
        for habit_type in ["rice", "beef", "fish"] {
            store
                .add(NewHabit::with_quantity(Category::Food, habit_type, 1.0), now())
                .unwrap();
        }

        let types: Vec<&str> = store.list().iter().map(|h| h.habit_type()).collect();
        assert_eq!(types, vec!["rice", "beef", "fish"]);
    }

    #[test]
    fn test_store_rejected_add_leaves_store_unchanged() {
        let mut store = HabitStore::default();
        let result = store.add(NewHabit::with_quantity(Category::Food, "unicorn", 1.0), now());

        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_remove_missing_is_noop() {
        let mut store = HabitStore::default();
        let habit = store
            .add(NewHabit::energy("electricity", 250.0), now())
            .unwrap();

        assert!(store.remove(HabitId::from_raw(999)).is_none());
        assert_eq!(store.len(), 1);

        let removed = store.remove(habit.id()).unwrap();
        assert_eq!(removed.id(), habit.id());
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_seeded_from_existing_ids() {
        let mut store = HabitStore::default();
        let existing = store
            .add(NewHabit::with_quantity(Category::Food, "beef", 1.0), now())
            .unwrap();

        // Reopening the store with an earlier clock must not reuse the id
        let mut reopened = HabitStore::new(store.into_habits());
        let earlier = now() - chrono::Duration::days(1);
        let added = reopened
            .add(NewHabit::with_quantity(Category::Food, "rice", 1.0), earlier)
            .unwrap();

        assert!(added.id() > existing.id());
    }

    #[test]
    fn test_store_rejects_habit_with_overflowing_emissions() {
        let mut store = HabitStore::default();
        store
            .add(NewHabit::with_quantity(Category::Food, "beef", 1.0), now())
            .unwrap();

        let result = store.add(NewHabit::transport("plane", 1e308, Frequency::Daily), now());

        match result {
            Err(DomainError::Validation(msg)) => assert!(msg.contains("too large")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_rejects_habit_that_overflows_monthly_total() {
        let mut store = HabitStore::default();
        // Each alone is finite, together they are not
        store
            .add(NewHabit::with_quantity(Category::Food, "beef", 1e306), now())
            .unwrap();

        let result = store.add(NewHabit::with_quantity(Category::Food, "beef", 1e306), now());

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_with_exhausted_ids_reports_integrity_error() {
        let stored = Habit::restore(
            HabitId::from_raw(u64::MAX),
            Category::Food,
            "beef".to_string(),
            1.0,
            None,
            None,
            None,
            108.0,
            now(),
        );
        let mut store = HabitStore::new(vec![stored]);

        let result = store.add(NewHabit::with_quantity(Category::Food, "rice", 1.0), now());

        assert!(matches!(result, Err(DomainError::DataIntegrity(_))));
        assert_eq!(store.len(), 1);
    }
}
