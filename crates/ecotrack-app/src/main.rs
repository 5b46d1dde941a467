use clap::Parser;
use std::process::ExitCode;

use ecotrack_infrastructure::logging::init_logger;
use ecotrack_lib::presentation::bootstrap::build_app_state;
use ecotrack_lib::presentation::cli::{execute, Cli};
use ecotrack_lib::presentation::error::CommandError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            match serde_json::to_string_pretty(&output) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("Failed to render output: {}", e);
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            match serde_json::to_string_pretty(&err) {
                Ok(text) => eprintln!("{}", text),
                Err(_) => eprintln!("{}", err),
            }
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

async fn run(cli: Cli) -> Result<serde_json::Value, CommandError> {
    let data_dir = cli.resolve_data_dir()?;
    let config = cli.load_config(&data_dir)?;
    let level = cli.log_level(config.as_deref());

    let log_options = cli.logging_options(&data_dir, level);
    let log_target = log_options.log_dir.clone();
    // Flushes the log file when dropped at the end of this function
    let _log_guard = match init_logger(log_options) {
        Ok(guard) => {
            tracing::info!("🚀 EcoTrack starting...");
            match &log_target {
                Some(dir) => tracing::info!("📝 File logging initialized at: {}", dir.display()),
                None => tracing::info!("📝 In-memory run, file logging disabled"),
            }
            guard
        }
        Err(e) => {
            eprintln!("⚠️  Failed to initialize file logging: {}", e);
            None
        }
    };

    let state = build_app_state(cli.bootstrap_options(&data_dir, config)).await?;
    let result = execute(cli.command, &state).await;
    if let Err(err) = &result {
        tracing::error!(code = err.code, "❌ {}", err.message);
    }
    result
}
