pub mod application;
pub mod presentation;

pub use presentation::bootstrap::{build_app_state, BootstrapOptions};
pub use presentation::state::AppState;
