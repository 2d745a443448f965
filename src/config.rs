//! Application configuration, loadable from TOML

use std::path::Path;

use log::warn;

use crate::board::{Mark, DEFAULT_BOARD_SIZE};
use crate::engine::Difficulty;
use crate::error::ConfigError;

/// Smallest board that still fits a five
pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_BOARD_SIZE: usize = 25;

/// Top-level application configuration.
///
/// Every field is optional in the file; missing fields take their defaults.
///
/// ```toml
/// board_size = 15
/// difficulty = "hard"
/// human_mark = "O"
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board_size: usize,
    pub difficulty: Difficulty,
    /// Mark played by the human; the bot takes the other one
    pub human_mark: Mark,
    /// Fixed seed for the bot's random choices, OS entropy when absent
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board_size: DEFAULT_BOARD_SIZE,
            difficulty: Difficulty::default(),
            human_mark: Mark::X,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "board_size must be in [{}, {}], got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
            )));
        }
        Ok(())
    }

    pub fn bot_mark(&self) -> Mark {
        self.human_mark.opponent()
    }
}
