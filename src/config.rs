//! Session configuration loaded from TOML.

use std::path::{Path, PathBuf};

use cargo_bay_store::{DEFAULT_HISTORY_LIMIT, GameItem};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Default config file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "cargo_bay.toml";

/// Configuration for a cargo bay session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for random fills; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Item the player has to find in mission 2.
    #[serde(default = "default_search_target")]
    search_target: GameItem,

    /// Snapshots kept for undo.
    #[serde(default = "default_history_limit")]
    history_limit: usize,

    /// File receiving tracing output while the TUI owns the terminal.
    #[serde(default)]
    log_file: Option<PathBuf>,
}

#[instrument]
fn default_search_target() -> GameItem {
    GameItem::ToolsAndEquipment
}

#[instrument]
fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            search_target: default_search_target(),
            history_limit: default_history_limit(),
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(search_target = %config.search_target, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns a copy with the seed replaced when `seed` is set.
    pub fn with_seed(self, seed: Option<u64>) -> Self {
        Self {
            seed: seed.or(self.seed),
            ..self
        }
    }

    /// Returns a copy with the log file replaced when `log_file` is set.
    pub fn with_log_file(self, log_file: Option<PathBuf>) -> Self {
        Self {
            log_file: log_file.or(self.log_file),
            ..self
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.search_target(), GameItem::ToolsAndEquipment);
        assert_eq!(*config.history_limit(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn test_item_labels_parse() {
        let config = GameConfig::from_toml_str(
            r#"
            seed = 12
            search_target = "Medical Supplies"
            "#,
        )
        .unwrap();
        assert_eq!(*config.seed(), Some(12));
        assert_eq!(*config.search_target(), GameItem::MedicalSupplies);
    }

    #[test]
    fn test_unknown_item_is_an_error() {
        let err = GameConfig::from_toml_str(r#"search_target = "Oxygen""#).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_cli_seed_overrides_file() {
        let config = GameConfig::from_toml_str("seed = 1").unwrap();
        assert_eq!(*config.clone().with_seed(Some(2)).seed(), Some(2));
        assert_eq!(*config.with_seed(None).seed(), Some(1));
    }
}
