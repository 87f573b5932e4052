//! Match configuration loaded from TOML and overridden from the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who sits in the O seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    /// A second person at the same console.
    #[default]
    Human,
    /// The random-move computer player.
    Computer,
}

/// Settings for a console match.
///
/// ```toml
/// player_x = "Ada"
/// opponent = "computer"
/// computer_name = "HAL"
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Name for the X seat; asked at the console when absent.
    #[serde(default)]
    player_x: Option<String>,

    /// Name for the O seat; asked at the console when absent and human.
    #[serde(default)]
    player_o: Option<String>,

    /// Who plays O.
    #[serde(default)]
    opponent: Opponent,

    /// Display name of the computer player.
    #[serde(default = "default_computer_name")]
    computer_name: String,

    /// Seed for the computer player's random choices.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_computer_name() -> String {
    "Computer".to_string()
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_x: None,
            player_o: None,
            opponent: Opponent::default(),
            computer_name: default_computer_name(),
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(opponent = ?config.opponent, "Config loaded successfully");
        Ok(config)
    }

    /// Sets the X seat's name when `name` is given.
    pub fn with_player_x(mut self, name: Option<String>) -> Self {
        if name.is_some() {
            self.player_x = name;
        }
        self
    }

    /// Sets the O seat's name when `name` is given.
    pub fn with_player_o(mut self, name: Option<String>) -> Self {
        if name.is_some() {
            self.player_o = name;
        }
        self
    }

    /// Sets who plays O.
    pub fn with_opponent(mut self, opponent: Opponent) -> Self {
        self.opponent = opponent;
        self
    }

    /// Sets the computer's name when `name` is given.
    pub fn with_computer_name(mut self, name: Option<String>) -> Self {
        if let Some(name) = name {
            self.computer_name = name;
        }
        self
    }

    /// Sets the random seed when `seed` is given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
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
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file).unwrap();

        let config = MatchConfig::from_file(file.path()).unwrap();
        assert_eq!(config, MatchConfig::default());
        assert_eq!(config.computer_name(), "Computer");
    }

    #[test]
    fn test_file_values_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "player_x = \"Ada\"\nopponent = \"computer\"\ncomputer_name = \"HAL\"\nseed = 7"
        )
        .unwrap();

        let config = MatchConfig::from_file(file.path()).unwrap();
        assert_eq!(config.player_x().as_deref(), Some("Ada"));
        assert_eq!(config.opponent(), &Opponent::Computer);
        assert_eq!(config.computer_name(), "HAL");
        assert_eq!(config.seed(), &Some(7));
    }

    #[test]
    fn test_invalid_file_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "opponent = \"robot\"").unwrap();

        let err = MatchConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_reports_read_error() {
        let err = MatchConfig::from_file("/nonexistent/tictac.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_overrides_only_replace_given_values() {
        let config = MatchConfig::default()
            .with_player_x(Some("Ada".to_string()))
            .with_player_x(None)
            .with_computer_name(None)
            .with_seed(Some(3));
        assert_eq!(config.player_x().as_deref(), Some("Ada"));
        assert_eq!(config.computer_name(), "Computer");
        assert_eq!(config.seed(), &Some(3));
    }
}
