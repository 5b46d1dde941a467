mod plan_progress_handler;

pub use plan_progress_handler::PlanProgressEventHandler;
