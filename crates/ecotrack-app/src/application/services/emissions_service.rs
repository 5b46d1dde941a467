use std::sync::Arc;
use tracing::debug;

use ecotrack_domain::emissions::{EmissionsEngine, MonthlyAggregate};
use ecotrack_domain::shared::{Clock, MonthKey};
use ecotrack_domain::snapshot::AppSnapshot;

/// Keeps the persisted emissions cache in line with the habits.
pub struct EmissionsService {
    clock: Arc<dyn Clock>,
}

impl EmissionsService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Re-annotate every habit and upsert the current month into the ledger.
    ///
    /// Called by every mutating command before the snapshot is written back.
    pub fn refresh(&self, snapshot: &mut AppSnapshot) -> MonthlyAggregate {
        let now = self.clock.now();
        let aggregate = EmissionsEngine::recompute(&mut snapshot.habits, now);

        let mut ledger = snapshot.ledger();
        ledger.upsert(aggregate.clone());
        snapshot.store_ledger(ledger);

        debug!(
            month = %aggregate.month(),
            total = aggregate.total(),
            habits = snapshot.habits.len(),
            "Emissions refreshed"
        );
        aggregate
    }

    /// Current month derived from habit inputs, without touching the snapshot.
    ///
    /// With no habits this is the empty aggregate (`byCategory` has no entries).
    pub fn current(&self, snapshot: &AppSnapshot) -> MonthlyAggregate {
        let now = self.clock.now();
        if snapshot.habits.is_empty() {
            return MonthlyAggregate::empty(MonthKey::from_datetime(now));
        }
        EmissionsEngine::summarize(&snapshot.habits, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use ecotrack_domain::factors::{Category, Frequency};
    use ecotrack_domain::habit::NewHabit;
    use ecotrack_domain::shared::FixedClock;

    fn snapshot_with_habits(now: chrono::DateTime<Utc>) -> AppSnapshot {
        let mut snapshot = AppSnapshot::default();
        let mut store = snapshot.habit_store();
        store
            .add(NewHabit::transport("car_gasoline", 20.0, Frequency::Daily), now)
            .unwrap();
        store
            .add(NewHabit::with_quantity(Category::Food, "beef", 1.0), now)
            .unwrap();
        snapshot.store_habits(store);
        snapshot
    }

    #[test]
    fn test_refresh_annotates_and_upserts() {
        let now = Utc.with_ymd_and_hms(2024, 7, 3, 12, 0, 0).unwrap();
        let clock = Arc::new(FixedClock::new(now));
        let service = EmissionsService::new(clock.clone());
        let mut snapshot = snapshot_with_habits(now);

        let aggregate = service.refresh(&mut snapshot);
        assert_eq!(aggregate.total(), 180.0);
        assert_eq!(snapshot.habits[0].emissions(), 72.0);
        assert_eq!(snapshot.habits[1].emissions(), 108.0);

        service.refresh(&mut snapshot);
        assert_eq!(snapshot.emissions.len(), 1);

        clock.advance(Duration::days(31));
        service.refresh(&mut snapshot);
        assert_eq!(snapshot.emissions.len(), 2);
        assert_eq!(snapshot.emissions[1].month().to_string(), "2024-08");
    }

    #[test]
    fn test_current_ignores_stale_annotations() {
        let now = Utc.with_ymd_and_hms(2024, 7, 3, 12, 0, 0).unwrap();
        let service = EmissionsService::new(Arc::new(FixedClock::new(now)));
        let snapshot = snapshot_with_habits(now);

        // Habits were never annotated, so the cached values are still zero.
        assert_eq!(snapshot.habits[0].emissions(), 0.0);
        assert_eq!(service.current(&snapshot).total(), 180.0);
        assert!(snapshot.emissions.is_empty());
    }

    #[test]
    fn test_current_without_habits_is_empty_default() {
        let now = Utc.with_ymd_and_hms(2024, 7, 3, 12, 0, 0).unwrap();
        let service = EmissionsService::new(Arc::new(FixedClock::new(now)));

        let current = service.current(&AppSnapshot::default());

        assert_eq!(current.month().to_string(), "2024-07");
        assert_eq!(current.total(), 0.0);
        assert!(current.by_category().is_empty());
    }
}
