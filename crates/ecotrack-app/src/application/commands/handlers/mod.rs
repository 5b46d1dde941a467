mod context;
mod habit_handlers;
mod plan_handlers;
mod scenario_handlers;
mod settings_handler;


pub use context::HandlerContext;
pub use habit_handlers::{
    AddHabitCommandHandler, RecomputeEmissionsCommandHandler, RemoveHabitCommandHandler,
};
pub use plan_handlers::{CreateWeeklyPlanCommandHandler, ToggleGoalCommandHandler};
pub use scenario_handlers::{DeleteScenarioCommandHandler, SaveScenarioCommandHandler};
pub use settings_handler::UpdateSettingsCommandHandler;
