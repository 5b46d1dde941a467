mod config_service;
mod emissions_service;

pub use config_service::{AppConfig, ConfigService, LogLevel};
pub use emissions_service::EmissionsService;
