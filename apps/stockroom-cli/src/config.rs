//! # Console Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --data-file ./backup.json                                          │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     STOCKROOM_DATA_FILE=./inventory.json                               │
//! │     STOCKROOM_LOG_LEVEL=debug                                          │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config PATH, or the platform config dir:                         │
//! │     ~/.config/stockroom/stockroom.toml (Linux)                         │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     data_file = "inventory.json", log_level = "warn"                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # stockroom.toml
//! data_file = "/var/lib/stockroom/inventory.json"
//! log_level = "info"
//! ```

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockroomConfig {
    /// Where the inventory ledger is saved and loaded.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Default tracing filter when `RUST_LOG` is not set.
    /// Kept at `warn` so log lines do not interleave with the menus.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("inventory.json")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for StockroomConfig {
    fn default() -> Self {
        StockroomConfig {
            data_file: default_data_file(),
            log_level: default_log_level(),
        }
    }
}

impl StockroomConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (stockroom.toml)
    /// 3. Environment variables
    ///
    /// `log_level` is normalized once all sources are applied.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.normalize();
        config.validate()?;

        Ok(config)
    }

    /// Applies `STOCKROOM_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("STOCKROOM_DATA_FILE") {
            debug!(path = %path, "Overriding data file from environment");
            self.data_file = PathBuf::from(path);
        }

        if let Some(level) = lookup("STOCKROOM_LOG_LEVEL") {
            self.log_level = level;
        }
    }

    /// Trims and lowercases `log_level`, whichever source set it.
    pub fn normalize(&mut self) {
        self.log_level = self.log_level.trim().to_lowercase();
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue(
                "data_file must not be empty".into(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidValue(format!(
                "log_level must be one of {:?}, got: {}",
                LOG_LEVELS, self.log_level
            )));
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "stockroom", "stockroom")
            .map(|dirs| dirs.config_dir().join("stockroom.toml"))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidValue(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StockroomConfig::default();
        assert_eq!(config.data_file, PathBuf::from("inventory.json"));
        assert_eq!(config.log_level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stockroom.toml");
        std::fs::write(&path, "data_file = \"/tmp/ledger.json\"\n").unwrap();

        let config = StockroomConfig::load(Some(path)).unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/ledger.json"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let mut config: StockroomConfig =
            toml::from_str("data_file = \"a.json\"\nlog_level = \"info\"").unwrap();

        config.apply_overrides(|key| match key {
            "STOCKROOM_DATA_FILE" => Some("b.json".to_string()),
            "STOCKROOM_LOG_LEVEL" => Some(" DEBUG ".to_string()),
            _ => None,
        });
        config.normalize();

        assert_eq!(config.data_file, PathBuf::from("b.json"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_file_log_level_is_normalized() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stockroom.toml");
        std::fs::write(&path, "log_level = \" INFO \"\n").unwrap();

        let mut from_file: StockroomConfig =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        from_file.normalize();
        assert_eq!(from_file.log_level, "info");
        assert!(from_file.validate().is_ok());

        if std::env::var_os("STOCKROOM_LOG_LEVEL").is_none() {
            let loaded = StockroomConfig::load(Some(path)).unwrap();
            assert_eq!(loaded.log_level, "info");
        }
    }

    #[test]
    fn test_validation() {
        let mut config = StockroomConfig::default();
        config.log_level = "loud".into();
        assert!(config.validate().is_err());

        config.log_level = "trace".into();
        config.data_file = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_toml_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stockroom.toml");
        std::fs::write(&path, "data_file = [").unwrap();

        assert!(matches!(
            StockroomConfig::load(Some(path)),
            Err(ConfigError::Parse(_))
        ));
    }
}
