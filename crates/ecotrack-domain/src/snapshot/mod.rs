mod repository;
mod settings;

pub use repository::SnapshotRepository;
pub use settings::UserSettings;

use serde::{Deserialize, Serialize};

use crate::emissions::MonthlyAggregate;
use crate::habit::{Habit, HabitStore};
use crate::history::MonthlyHistoryLedger;
use crate::plan::{PlanTracker, WeeklyPlan};
use crate::scenario::{Scenario, ScenarioBook};
use crate::shared::PlanId;

/// The whole persisted application state, stored as one JSON document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSnapshot {
    pub habits: Vec<Habit>,
    pub emissions: Vec<MonthlyAggregate>,
    pub scenarios: Vec<Scenario>,
    pub weekly_plans: Vec<WeeklyPlan>,
    pub current_plan: Option<PlanId>,
    pub user_settings: UserSettings,
}

impl AppSnapshot {
    pub fn habit_store(&self) -> HabitStore {
        HabitStore::new(self.habits.clone())
    }

    pub fn ledger(&self) -> MonthlyHistoryLedger {
        MonthlyHistoryLedger::new(self.emissions.clone())
    }

    pub fn scenario_book(&self) -> ScenarioBook {
        ScenarioBook::new(self.scenarios.clone())
    }

    pub fn plan_tracker(&self) -> PlanTracker {
        PlanTracker::new(self.weekly_plans.clone(), self.current_plan)
    }

    pub fn store_habits(&mut self, store: HabitStore) {
        self.habits = store.into_habits();
    }

    pub fn store_ledger(&mut self, ledger: MonthlyHistoryLedger) {
        self.emissions = ledger.into_records();
    }

    pub fn store_scenarios(&mut self, book: ScenarioBook) {
        self.scenarios = book.into_scenarios();
    }

    pub fn store_plans(&mut self, tracker: PlanTracker) {
        let (plans, current) = tracker.into_parts();
        self.weekly_plans = plans;
        self.current_plan = current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::NewHabit;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_empty_document_parses_to_default() {
        let snapshot: AppSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, AppSnapshot::default());
    }

    #[test]
    fn test_partial_document_keeps_known_fields() {
        let json = r#"{"currentPlan": 12, "userSettings": {"displayName": "Sam"}}"#;
        let snapshot: AppSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.current_plan, Some(PlanId::from_raw(12)));
        assert_eq!(snapshot.user_settings.display_name(), Some("Sam"));
        assert!(snapshot.habits.is_empty());
    }

    #[test]
    fn test_snapshot_uses_camel_case_keys() {
        let mut snapshot = AppSnapshot::default();
        let mut store = snapshot.habit_store();
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        store
            .add(NewHabit::with_quantity(crate::factors::Category::Food, "rice", 2.0), now)
            .unwrap();
        snapshot.store_habits(store);

        let json = serde_json::to_value(&snapshot).unwrap();
        for key in ["habits", "emissions", "scenarios", "weeklyPlans", "currentPlan", "userSettings"] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(json["habits"][0]["type"], "rice");

        let back: AppSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snapshot);
    }
}
