use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::RwLock;
use tracing::info;

use ecotrack_infrastructure::persistence::repositories::DEFAULT_NAMESPACE;

pub const CONFIG_FILE_NAME: &str = "app_config.json";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            5 => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!(
                "unknown log level '{}', expected one of: error, warn, info, debug, trace",
                other
            )),
        }
    }
}

/// Contents of `app_config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: LogLevel,
    /// Key of the snapshot document in the app_state table
    pub namespace: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

/// Application configuration persisted next to the database
pub struct ConfigService {
    log_level: AtomicU8,
    namespace: RwLock<String>,
    config_path: PathBuf,
}

impl ConfigService {
    /// Load `app_config.json` from `config_dir`, falling back to defaults when it is missing
    /// or unreadable.
    pub fn load(config_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(config_dir)?;
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str::<AppConfig>(&content).unwrap_or_default()
        } else {
            AppConfig::default()
        };

        Ok(Self {
            log_level: AtomicU8::new(config.log_level as u8),
            namespace: RwLock::new(config.namespace),
            config_path,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn get_log_level(&self) -> LogLevel {
        LogLevel::from_u8(self.log_level.load(Ordering::Relaxed))
    }

    pub fn namespace(&self) -> String {
        self.namespace
            .read()
            .map(|n| n.clone())
            .unwrap_or_else(|e| e.into_inner().clone())
    }

    pub fn snapshot(&self) -> AppConfig {
        AppConfig {
            log_level: self.get_log_level(),
            namespace: self.namespace(),
        }
    }

    /// Set log level and persist; takes effect on the next run
    pub fn set_log_level(&self, level: LogLevel) -> Result<()> {
        self.log_level.store(level as u8, Ordering::Relaxed);
        self.persist()?;
        info!(level = level.as_str(), path = %self.config_path.display(), "Log level saved");
        Ok(())
    }

    pub fn set_namespace(&self, namespace: &str) -> Result<()> {
        let namespace = namespace.trim();
        if namespace.is_empty() {
            anyhow::bail!("namespace cannot be empty");
        }
        match self.namespace.write() {
            Ok(mut guard) => *guard = namespace.to_string(),
            Err(e) => *e.into_inner() = namespace.to_string(),
        }
        self.persist()?;
        info!(namespace, "Snapshot namespace saved");
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.snapshot())?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::from_u8(1), LogLevel::Error);
        assert_eq!(LogLevel::from_u8(3), LogLevel::Info);
        assert_eq!(LogLevel::from_u8(5), LogLevel::Trace);
        assert_eq!(LogLevel::from_u8(99), LogLevel::Info);
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::load(dir.path()).unwrap();

        assert_eq!(service.snapshot(), AppConfig::default());
        assert!(!service.config_path().exists());
    }

    #[test]
    fn test_settings_persist_across_loads() {
        let dir = tempfile::tempdir().unwrap();

        let service = ConfigService::load(dir.path()).unwrap();
        service.set_log_level(LogLevel::Debug).unwrap();
        service.set_namespace("work").unwrap();

        let reloaded = ConfigService::load(dir.path()).unwrap();
        assert_eq!(reloaded.get_log_level(), LogLevel::Debug);
        assert_eq!(reloaded.namespace(), "work");
    }

    #[test]
    fn test_corrupt_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{{{").unwrap();

        let service = ConfigService::load(dir.path()).unwrap();
        assert_eq!(service.get_log_level(), LogLevel::Info);
        assert!(service.set_namespace("  ").is_err());
    }
}
