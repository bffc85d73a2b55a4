//! Player seating configuration.

use crate::games::tictactoe::{Mark, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// One seat at the table: who sits there and which mark they write.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Display name.
    name: String,
    /// Mark written by this seat.
    mark: Mark,
}

impl SeatConfig {
    /// Creates a seat.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }
}

/// Configuration for a single game.
///
/// Always holds two seats with distinct marks and non-blank names.
/// Deserializing goes through the same validation as [`GameConfig::new`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    /// Seat that moves first.
    first: SeatConfig,

    /// Seat that moves second.
    second: SeatConfig,
}

/// Unvalidated seats as read from TOML.
#[derive(Deserialize)]
struct RawGameConfig {
    #[serde(default = "default_first")]
    first: SeatConfig,

    #[serde(default = "default_second")]
    second: SeatConfig,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        Self::new(raw.first, raw.second)
    }
}

fn default_first() -> SeatConfig {
    SeatConfig::new("Player 1", Mark::X)
}

fn default_second() -> SeatConfig {
    SeatConfig::new("Player 2", Mark::O)
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first: default_first(),
            second: default_second(),
        }
    }
}

impl GameConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the seats share a mark or a name is blank.
    #[instrument]
    pub fn new(first: SeatConfig, second: SeatConfig) -> Result<Self, ConfigError> {
        let config = Self { first, second };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// Missing seats fall back to the defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(?config, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            first = %config.first.name,
            second = %config.second.name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Builds the two players in turn order.
    pub fn players(&self) -> [Player; 2] {
        [
            Player::new(&self.first.name, self.first.mark),
            Player::new(&self.second.name, self.second.mark),
        ]
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.first.mark == self.second.mark {
            return Err(ConfigError::new(format!(
                "Both players use mark {}",
                self.first.mark
            )));
        }
        for seat in [&self.first, &self.second] {
            if seat.name.trim().is_empty() {
                return Err(ConfigError::new(format!(
                    "Player using mark {} has a blank name",
                    seat.mark
                )));
            }
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
