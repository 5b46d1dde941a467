#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::factors::{Category, Frequency};
    use crate::habit::{Habit, HabitStore, NewHabit};
    use crate::shared::{HabitId, MonthKey};
    use chrono::{DateTime, TimeZone, Utc};

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn store_with(inputs: Vec<NewHabit>) -> HabitStore {
        let mut store = HabitStore::default();
        for input in inputs {
            store.add(input, as_of()).unwrap();
        }
        store
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_reference_example() {
        let mut store = store_with(vec![
            NewHabit::transport("car_gasoline", 20.0, Frequency::Daily),
            NewHabit::with_quantity(Category::Food, "beef", 1.0),
        ]);

        let aggregate = EmissionsEngine::recompute(store.habits_mut(), as_of());

        assert_close(store.list()[0].emissions(), 72.0);
        assert_close(store.list()[1].emissions(), 108.0);
        assert_close(aggregate.category(Category::Transport), 72.0);
        assert_close(aggregate.category(Category::Food), 108.0);
        assert_close(aggregate.total(), 180.0);
        assert_eq!(aggregate.month(), MonthKey::new(2024, 6).unwrap());
    }

    #[test]
    fn test_category_rules() {
        let cases = vec![
            (NewHabit::energy("electricity", 300.0), 300.0 * 0.233),
            (NewHabit::with_quantity(Category::Shopping, "clothing", 2.0), 2.0 * 15.0),
            (NewHabit::with_quantity(Category::Waste, "landfill", 5.0), 5.0 * 4.0 * 0.57),
            (NewHabit::with_quantity(Category::Food, "rice", 1.5), 1.5 * 4.0 * 2.7),
            (NewHabit::transport("bus", 10.0, Frequency::Weekdays), 10.0 * 22.0 * 0.089),
        ];

        for (input, expected) in cases {
            let habit = Habit::new(HabitId::from_raw(1), input, as_of()).unwrap();
            assert_close(EmissionsEngine::habit_emissions(&habit), expected);
        }
    }

    #[test]
    fn test_total_equals_sum_of_categories() {
        let store = store_with(vec![
            NewHabit::transport("plane", 800.0, Frequency::Monthly),
            NewHabit::transport("train", 35.5, Frequency::TwiceWeekly),
            NewHabit::energy("natural_gas", 120.0),
            NewHabit::with_quantity(Category::Food, "cheese", 0.3),
            NewHabit::with_quantity(Category::Food, "chicken", 1.2),
            NewHabit::with_quantity(Category::Shopping, "electronics", 1.0),
            NewHabit::with_quantity(Category::Waste, "recycling", 3.0),
        ]);

        let aggregate = EmissionsEngine::summarize(store.list(), as_of());
        let sum: f64 = aggregate.by_category().values().sum();

        assert_eq!(aggregate.total(), sum);
        assert_eq!(aggregate.by_category().len(), Category::ALL.len());
    }

    #[test]
    fn test_recompute_is_deterministic() {
        let mut store = store_with(vec![
            NewHabit::transport("car_diesel", 12.3, Frequency::Daily),
            NewHabit::with_quantity(Category::Food, "lamb", 0.7),
            NewHabit::with_quantity(Category::Waste, "food_waste", 1.1),
        ]);

        let first = EmissionsEngine::recompute(store.habits_mut(), as_of());
        let annotations: Vec<f64> = store.list().iter().map(|h| h.emissions()).collect();
        let second = EmissionsEngine::recompute(store.habits_mut(), as_of());

        assert_eq!(first, second);
        assert_eq!(
            first.total().to_bits(),
            second.total().to_bits(),
            "totals must be bit-identical"
        );
        let again: Vec<f64> = store.list().iter().map(|h| h.emissions()).collect();
        assert_eq!(annotations, again);
    }

    #[test]
    fn test_empty_habit_set() {
        let aggregate = EmissionsEngine::summarize(&[], as_of());
        assert_eq!(aggregate.total(), 0.0);
        assert!(aggregate.by_category().values().all(|v| *v == 0.0));
        assert_eq!(aggregate.share(Category::Food), 0.0);
    }

    #[test]
    fn test_unknown_type_contributes_zero() {
        let legacy = Habit::restore(
            HabitId::from_raw(3),
            Category::Transport,
            "jetpack".to_string(),
            1.0,
            Some(10.0),
            None,
            Some(Frequency::Daily),
            999.0,
            as_of(),
        );
        let beef = Habit::new(
            HabitId::from_raw(4),
            NewHabit::with_quantity(Category::Food, "beef", 1.0),
            as_of(),
        )
        .unwrap();
        let mut habits = vec![legacy, beef];

        let aggregate = EmissionsEngine::recompute(&mut habits, as_of());

        assert_eq!(habits[0].emissions(), 0.0, "stale annotation must be overwritten");
        assert_close(aggregate.total(), 108.0);
        assert!(aggregate.total().is_finite());
    }

    #[test]
    fn test_summarize_does_not_touch_annotations() {
        let store = store_with(vec![NewHabit::with_quantity(Category::Food, "beef", 1.0)]);

        let aggregate = EmissionsEngine::summarize(store.list(), as_of());

        assert_close(aggregate.total(), 108.0);
        assert_eq!(store.list()[0].emissions(), 0.0);
    }

    #[test]
    fn test_category_share() {
        let store = store_with(vec![
            NewHabit::transport("car_gasoline", 20.0, Frequency::Daily),
            NewHabit::with_quantity(Category::Food, "beef", 1.0),
        ]);

        let aggregate = EmissionsEngine::summarize(store.list(), as_of());
        assert_close(aggregate.share(Category::Transport), 40.0);
        assert_close(aggregate.share(Category::Food), 60.0);
    }

    #[test]
    fn test_rollup_skips_contributions_that_would_overflow() {
        let stored = |id: u64, quantity: f64| {
            Habit::restore(
                HabitId::from_raw(id),
                Category::Food,
                "beef".to_string(),
                quantity,
                None,
                None,
                None,
                0.0,
                as_of(),
            )
        };
        // Rows written by hand, bypassing store validation
        let habits = vec![stored(1, 1.0), stored(2, 1e306), stored(3, 1e306)];

        let aggregate = EmissionsEngine::summarize(&habits, as_of());

        assert!(aggregate.total().is_finite());
        assert!(aggregate.total() > 1e308);
        assert_eq!(aggregate.total(), aggregate.category(Category::Food));
    }
}
