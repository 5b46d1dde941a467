mod aggregate;
mod book;
mod parameters;
mod projector;


pub use aggregate::Scenario;
pub use book::ScenarioBook;
pub use parameters::ScenarioParameters;
pub use projector::{Projection, ScenarioProjector};
