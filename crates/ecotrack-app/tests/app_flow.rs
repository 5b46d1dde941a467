use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;

use ecotrack_domain::factors::{Category, Frequency};
use ecotrack_domain::habit::NewHabit;
use ecotrack_domain::scenario::ScenarioParameters;
use ecotrack_domain::shared::{FixedClock, HabitId};
use ecotrack_infrastructure::persistence::repositories::InMemorySnapshotRepository;
use ecotrack_lib::application::commands::footprint_commands::*;
use ecotrack_lib::application::commands::CommandHandler;
use ecotrack_lib::presentation::bootstrap::build_with_repository;
use ecotrack_lib::AppState;

async fn setup() -> (AppState, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap(),
    ));
    let repo = Arc::new(InMemorySnapshotRepository::new());
    let state = build_with_repository(repo, clock.clone()).await;
    (state, clock)
}

async fn add(state: &AppState, habit: NewHabit) -> AddHabitResult {
    state
        .command_handlers
        .add_habit
        .handle(AddHabitCommand { habit })
        .await
        .unwrap()
}

#[tokio::test]
async fn test_habits_flow_into_emissions_and_insights() {
    let (state, _clock) = setup().await;

    add(&state, NewHabit::transport("car_gasoline", 20.0, Frequency::Daily)).await;
    let beef = add(&state, NewHabit::with_quantity(Category::Food, "beef", 1.0)).await;
    assert_eq!(beef.month.total, 180.0);

    let queries = &state.queries.footprint;
    assert_eq!(queries.list_habits().await.unwrap().len(), 2);
    assert_eq!(queries.current_month().await.unwrap().total, 180.0);
    assert_eq!(queries.history().await.unwrap().len(), 1);

    let insights = queries.insights().await.unwrap();
    assert_eq!(insights.total, 180.0);
    assert_eq!(insights.categories.len(), 2);
    assert_eq!(insights.categories[0].category, Category::Food);
    assert_eq!(insights.categories[0].rank, 1);
    assert!((insights.categories[0].share_percent - 60.0).abs() < 1e-9);
    assert!(insights.target.is_none());

    let removed = state
        .command_handlers
        .remove_habit
        .handle(RemoveHabitCommand {
            habit_id: HabitId::from_raw(beef.habit.id),
        })
        .await
        .unwrap();
    assert!(removed.removed);
    assert_eq!(queries.current_month().await.unwrap().total, 72.0);
}

#[tokio::test]
async fn test_preview_matches_saved_scenario() {
    let (state, _clock) = setup().await;
    add(&state, NewHabit::transport("car_gasoline", 20.0, Frequency::Daily)).await;
    add(&state, NewHabit::with_quantity(Category::Food, "beef", 1.0)).await;

    let params = ScenarioParameters::from_percentages(50.0, 0, 0.0, 0.0).unwrap();
    let preview = state
        .queries
        .footprint
        .preview_scenario(&params)
        .await
        .unwrap();
    assert_eq!(preview.projected, 162.0);

    let saved = state
        .command_handlers
        .save_scenario
        .handle(SaveScenarioCommand {
            name: "Drive less".to_string(),
            description: String::new(),
            parameters: params,
        })
        .await
        .unwrap();
    assert_eq!(saved.projected_emissions, preview.projected);
    assert_eq!(saved.reduction_kg, preview.reduction_kg);

    let listed = state.queries.footprint.list_scenarios().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Drive less");
}

#[tokio::test]
async fn test_trend_spans_months() {
    let (state, clock) = setup().await;
    add(&state, NewHabit::transport("car_gasoline", 20.0, Frequency::Daily)).await;

    clock.advance(Duration::days(31));
    add(&state, NewHabit::with_quantity(Category::Food, "beef", 1.0)).await;

    let trend = state.queries.footprint.trend().await.unwrap();
    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0].month, "2024-05");
    assert_eq!(trend[0].change_kg, None);
    assert_eq!(trend[1].month, "2024-06");
    assert_eq!(trend[1].change_kg, Some(108.0));
    assert_eq!(trend[1].change_percent, Some(150.0));
}

#[tokio::test]
async fn test_plan_completion_reaches_event_handler() {
    let (state, clock) = setup().await;
    let handlers = &state.command_handlers;

    handlers
        .create_weekly_plan
        .handle(CreateWeeklyPlanCommand {
            goals: vec!["Bike to work".to_string(), "Cook vegetarian".to_string()],
        })
        .await
        .unwrap();

    for index in [0, 1] {
        handlers
            .toggle_goal
            .handle(ToggleGoalCommand {
                plan_id: None,
                goal_index: index,
                completed: true,
            })
            .await
            .unwrap();
    }
    assert_eq!(state.services.plan_progress.completions(), 1);

    let current = state.queries.footprint.current_plan().await.unwrap().unwrap();
    assert_eq!(current.progress, 100);
    assert!(current.active);

    clock.advance(Duration::days(7));
    handlers
        .create_weekly_plan
        .handle(CreateWeeklyPlanCommand {
            goals: vec!["Shorter showers".to_string()],
        })
        .await
        .unwrap();

    let previous = state.queries.footprint.previous_plans().await.unwrap();
    assert_eq!(previous.len(), 1);
    assert!(previous[0].completed);
    assert!(!previous[0].active);
}

#[tokio::test]
async fn test_settings_target_feeds_insights() {
    let (state, _clock) = setup().await;
    add(&state, NewHabit::transport("car_gasoline", 20.0, Frequency::Daily)).await;

    let settings = state
        .command_handlers
        .update_settings
        .handle(UpdateSettingsCommand {
            display_name: Some("Sam".to_string()),
            monthly_target_kg: Some(100.0),
            clear_target: false,
        })
        .await
        .unwrap();
    assert_eq!(settings.display_name.as_deref(), Some("Sam"));

    let target = state
        .queries
        .footprint
        .insights()
        .await
        .unwrap()
        .target
        .unwrap();
    assert_eq!(target.actual_kg, 72.0);
    assert_eq!(target.remaining_kg, 28.0);
    assert!(target.met);
}

#[tokio::test]
async fn test_current_month_without_habits_is_empty() {
    let (state, _clock) = setup().await;

    let current = state.queries.footprint.current_month().await.unwrap();

    assert_eq!(current.month, "2024-05");
    assert_eq!(current.total, 0.0);
    assert!(current.by_category.is_empty());
}
