// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod emissions;
pub mod events;
pub mod factors;
pub mod habit;
pub mod history;
pub mod insights;
pub mod plan;
pub mod scenario;
pub mod shared;
pub mod snapshot;

// Re-exports for convenience
pub use events::DomainEvent;
pub use shared::{Clock, DomainError, HabitId, MonthKey, PlanId, ScenarioId};
