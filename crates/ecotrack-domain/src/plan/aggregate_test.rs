#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::shared::{DomainError, PlanId};
    use chrono::{DateTime, Datelike, Duration, TimeZone, Utc, Weekday};

    fn wednesday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 12, 15, 45, 0).unwrap()
    }

    fn goals(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Goal {}", i)).collect()
    }

    #[test]
    fn test_create_plan_week_bounds() {
        let plan = WeeklyPlan::new(PlanId::from_raw(1), goals(3), wednesday()).unwrap();

        assert_eq!(plan.week_start(), Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap());
        assert_eq!(plan.week_start().weekday(), Weekday::Mon);
        assert_eq!(plan.week_end().weekday(), Weekday::Sun);
        assert_eq!(
            plan.week_end(),
            Utc.with_ymd_and_hms(2024, 6, 17, 0, 0, 0).unwrap() - Duration::milliseconds(1)
        );
        assert_eq!(plan.progress(), 0);
        assert!(!plan.is_completed());
        assert!(plan.goals().iter().all(|g| !g.completed));
    }

    #[test]
    fn test_sunday_belongs_to_previous_monday() {
        let sunday = Utc.with_ymd_and_hms(2024, 6, 16, 23, 0, 0).unwrap();
        let (start, _) = week_bounds(sunday);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap());

        let monday = Utc.with_ymd_and_hms(2024, 6, 17, 0, 0, 0).unwrap();
        let (start, _) = week_bounds(monday);
        assert_eq!(start, monday);
    }

    #[test]
    fn test_plan_requires_a_goal() {
        let result = WeeklyPlan::new(PlanId::from_raw(1), vec!["  ".to_string()], wednesday());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_half_of_four_goals() {
        let mut plan = WeeklyPlan::new(PlanId::from_raw(1), goals(4), wednesday()).unwrap();

        plan.toggle_goal(0, true);
        plan.toggle_goal(2, true);

        assert_eq!(plan.progress(), 50);
        assert!(!plan.is_completed());

        plan.toggle_goal(1, true);
        plan.toggle_goal(3, true);

        assert_eq!(plan.progress(), 100);
        assert!(plan.is_completed());
    }

    #[test]
    fn test_progress_rounds() {
        let mut plan = WeeklyPlan::new(PlanId::from_raw(1), goals(3), wednesday()).unwrap();

        plan.toggle_goal(0, true);
        assert_eq!(plan.progress(), 33);

        plan.toggle_goal(1, true);
        assert_eq!(plan.progress(), 67);

        plan.toggle_goal(1, false);
        assert_eq!(plan.progress(), 33);
    }

    #[test]
    fn test_out_of_range_toggle_is_noop() {
        let mut plan = WeeklyPlan::new(PlanId::from_raw(1), goals(2), wednesday()).unwrap();
        let before = plan.clone();

        assert!(!plan.toggle_goal(5, true));
        assert_eq!(plan, before);
    }

    #[test]
    fn test_is_active_within_week() {
        let plan = WeeklyPlan::new(PlanId::from_raw(1), goals(1), wednesday()).unwrap();

        assert!(plan.is_active(wednesday() + Duration::days(2)));
        assert!(!plan.is_active(wednesday() + Duration::days(7)));
    }

    #[test]
    fn test_tracker_new_plan_supersedes_current() {
        let mut tracker = PlanTracker::default();
        let first = tracker.create(goals(2), wednesday()).unwrap();
        let second = tracker
            .create(goals(3), wednesday() + Duration::days(7))
            .unwrap();
        let third = tracker
            .create(goals(1), wednesday() + Duration::days(14))
            .unwrap();

        assert_eq!(tracker.current().unwrap().id(), third.id());
        let previous: Vec<PlanId> = tracker.previous_plans().iter().map(|p| p.id()).collect();
        assert_eq!(previous, vec![second.id(), first.id()]);
    }

    #[test]
    fn test_tracker_toggle_unknown_plan_is_noop() {
        let mut tracker = PlanTracker::default();
        let plan = tracker.create(goals(2), wednesday()).unwrap();

        assert!(tracker.toggle_goal(PlanId::from_raw(42), 0, true).is_none());
        assert!(tracker.toggle_goal(plan.id(), 9, true).is_none());
        assert_eq!(tracker.current().unwrap().progress(), 0);

        let updated = tracker.toggle_goal(plan.id(), 1, true).unwrap();
        assert_eq!(updated.progress(), 50);
    }

    #[test]
    fn test_tracker_can_toggle_previous_plan() {
        let mut tracker = PlanTracker::default();
        let old = tracker.create(goals(1), wednesday()).unwrap();
        tracker
            .create(goals(1), wednesday() + Duration::days(7))
            .unwrap();

        let updated = tracker.toggle_goal(old.id(), 0, true).unwrap();
        assert!(updated.is_completed());
        assert_ne!(tracker.current_id(), Some(old.id()));
    }

    #[test]
    fn test_plan_serializes_camel_case() {
        let plan = WeeklyPlan::new(PlanId::from_raw(5), goals(1), wednesday()).unwrap();
        let json = serde_json::to_value(&plan).unwrap();

        assert!(json.get("weekStart").is_some());
        assert!(json.get("weekEnd").is_some());
        assert_eq!(json["goals"][0]["value"], "Goal 1");
        assert_eq!(json["goals"][0]["completed"], false);
    }
}
