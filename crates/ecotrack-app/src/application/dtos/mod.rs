mod emissions_dto;
mod habit_dto;
mod plan_dto;
mod scenario_dto;
mod settings_dto;

pub use emissions_dto::{MonthlyAggregateDto, MonthlyTrendDto};
pub use habit_dto::HabitDto;
pub use plan_dto::{GoalDto, WeeklyPlanDto, WeeklyPlanDtoMapper};
pub use scenario_dto::{ProjectionDto, ScenarioDto};
pub use settings_dto::UserSettingsDto;
