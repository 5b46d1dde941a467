//! Logging setup.
//!
//! - one-line JSON records in a daily rolling file under the log directory
//! - optional human-readable console output on stderr, so command output on stdout stays clean
//! - `log` macros are bridged into `tracing`
//!
//! Every JSON record carries timestamp, level, target, pid, tid, file, line, message and the
//! structured fields of the event.

mod format;

use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

use format::{HumanReadableFormatter, JsonFormatter};

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();
static LOGGER_READY: OnceLock<()> = OnceLock::new();

pub const LOG_FILE_PREFIX: &str = "ecotrack.log";

#[derive(Debug, Clone)]
pub struct LoggingOptions {
    /// `None` disables the JSON file layer entirely
    pub log_dir: Option<PathBuf>,
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info` or `debug`
    pub level: String,
    /// Mirror records to stderr in human-readable form
    pub console: bool,
}

impl LoggingOptions {
    pub fn new(log_dir: impl Into<PathBuf>, level: impl Into<String>) -> Self {
        Self {
            log_dir: Some(log_dir.into()),
            level: level.into(),
            console: cfg!(debug_assertions),
        }
    }

    /// Stderr only, nothing is written to disk
    pub fn console_only(level: impl Into<String>) -> Self {
        Self {
            log_dir: None,
            level: level.into(),
            console: true,
        }
    }

    pub fn writes_files(&self) -> bool {
        self.log_dir.is_some()
    }

    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }
}

/// Install the global subscriber. Calling it again is a no-op and returns `None`, as does a
/// console-only setup.
///
/// Keep the returned guard alive until exit; dropping it flushes the file writer.
pub fn init_logger(options: LoggingOptions) -> anyhow::Result<Option<WorkerGuard>> {
    if LOGGER_READY.get().is_some() {
        return Ok(None);
    }

    if let Some(log_dir) = &options.log_dir {
        std::fs::create_dir_all(log_dir)?;
        let _ = LOG_DIR.set(log_dir.clone());
    }

    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let (json_layer, guard) = match &options.log_dir {
        Some(log_dir) => {
            let file_appender = rolling::daily(log_dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .event_format(JsonFormatter::new(env!("CARGO_PKG_VERSION")))
                .with_filter(build_filter(&options.level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = options.console.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .event_format(HumanReadableFormatter::new())
            .with_filter(build_filter(&options.level))
    });

    let subscriber = Registry::default().with(json_layer).with(console_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOGGER_READY.set(());

    tracing::info!(
        target: "ecotrack::logging",
        log_dir = ?options.log_dir,
        level = %options.level,
        version = env!("CARGO_PKG_VERSION"),
        profile = if cfg!(debug_assertions) { "debug" } else { "release" },
        "Logger initialized"
    );

    Ok(guard)
}

/// `RUST_LOG` wins; otherwise `level` applies to everything and sqlx is kept at warn.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("{},sqlx=warn", level)))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn get_log_dir() -> Option<PathBuf> {
    LOG_DIR.get().cloned()
}
/// Default log directory below a data directory
pub fn log_dir_for(data_dir: &Path) -> PathBuf {
    data_dir.join("logs")
}
