//! Application configuration loaded from TOML.

use crate::games::tictactoe::{Labels, Locale};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default location of the config file.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Settings for the game front-ends.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Language of status messages.
    #[serde(default)]
    locale: Locale,

    /// Display label for player A.
    #[serde(default = "default_player_a_label")]
    player_a_label: String,

    /// Display label for player B (moves first).
    #[serde(default = "default_player_b_label")]
    player_b_label: String,

    /// Log file used by the terminal UI.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_player_a_label() -> String {
    "X".to_string()
}

fn default_player_b_label() -> String {
    "O".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            player_a_label: default_player_a_label(),
            player_b_label: default_player_b_label(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(locale = %config.locale, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from a TOML file, or returns defaults if it doesn't exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Player labels for status messages and the board.
    pub fn labels(&self) -> Labels {
        Labels::new(self.player_a_label.clone(), self.player_b_label.clone())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let a = self.player_a_label.trim();
        let b = self.player_b_label.trim();
        if a.is_empty() || b.is_empty() {
            return Err(ConfigError::new("Player labels must not be empty".to_string()));
        }
        if a == b {
            return Err(ConfigError::new(format!(
                "Player labels must differ (both are {:?})",
                a
            )));
        }
        Ok(())
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
