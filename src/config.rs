//! Game configuration.
//!
//! [`GameConfig`] holds what the round state machine reads: round count and
//! the three phase timers. [`Settings`] wraps it with the board setup and an
//! optional seed, and is what gets loaded from a JSON file.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::BoardSetup;

/// Durations stored as whole seconds.
mod secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}

/// Round count and phase timers for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rounds before the game ends.
    pub num_rounds: u32,
    /// Bidding window before anyone has bid.
    #[serde(with = "secs")]
    pub pre_bid_timeout: Duration,
    /// Grace period for competing bids after the first one.
    #[serde(with = "secs")]
    pub post_bid_timeout: Duration,
    /// Time a demonstrator has to perform their moves.
    #[serde(with = "secs")]
    pub demo_timeout: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_rounds: 8,
            pre_bid_timeout: Duration::from_secs(300),
            post_bid_timeout: Duration::from_secs(60),
            demo_timeout: Duration::from_secs(30),
        }
    }
}

impl GameConfig {
    /// Check every count and duration is positive.
    ///
    /// # Errors
    ///
    /// Returns the first field that is zero.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.num_rounds == 0 {
            return Err(InvalidConfig { field: "num_rounds" });
        }
        if self.pre_bid_timeout.is_zero() {
            return Err(InvalidConfig {
                field: "pre_bid_timeout",
            });
        }
        if self.post_bid_timeout.is_zero() {
            return Err(InvalidConfig {
                field: "post_bid_timeout",
            });
        }
        if self.demo_timeout.is_zero() {
            return Err(InvalidConfig {
                field: "demo_timeout",
            });
        }
        Ok(())
    }
}

/// A configuration field that must be positive was zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidConfig {
    /// Name of the offending field.
    pub field: &'static str,
}

impl fmt::Display for InvalidConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config field '{}' must be positive", self.field)
    }
}

impl std::error::Error for InvalidConfig {}

/// Everything needed to create a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Round settings.
    #[serde(flatten)]
    pub game: GameConfig,
    /// Wall and goal layout.
    pub board_setup: BoardSetup,
    /// Seed for robot placement and goal order; random if absent.
    pub seed: Option<u64>,
}

impl Settings {
    /// Load settings from a JSON file and validate them.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&text)?;
        settings.game.validate()?;
        Ok(settings)
    }

    /// Write settings to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = self.to_json()?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Errors loading or saving [`Settings`].
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read or written.
    Io(io::Error),
    /// File is not valid settings JSON.
    Parse(serde_json::Error),
    /// Settings parsed but are not usable.
    Invalid(InvalidConfig),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<InvalidConfig> for ConfigError {
    fn from(e: InvalidConfig) -> Self {
        ConfigError::Invalid(e)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.num_rounds, 8);
        assert_eq!(config.demo_timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero() {
        let config = GameConfig {
            post_bid_timeout: Duration::ZERO,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(InvalidConfig {
                field: "post_bid_timeout"
            })
        );
    }

    #[test]
    fn test_game_config_json_in_seconds() {
        let json = serde_json::to_value(GameConfig::default()).unwrap();
        assert_eq!(json["pre_bid_timeout"], 300);
        assert_eq!(json["num_rounds"], 8);
    }

    #[test]
    fn test_settings_load_partial_file() {
        let mut file = NamedTempFile::new().expect("create temp file");
        write!(file, r#"{{"num_rounds": 3, "demo_timeout": 10, "seed": 42}}"#).unwrap();

        let settings = Settings::load(file.path()).expect("load settings");
        assert_eq!(settings.game.num_rounds, 3);
        assert_eq!(settings.game.demo_timeout, Duration::from_secs(10));
        assert_eq!(settings.game.pre_bid_timeout, Duration::from_secs(300));
        assert_eq!(settings.board_setup, BoardSetup::Setup1);
        assert_eq!(settings.seed, Some(42));
    }

    #[test]
    fn test_settings_save_load_roundtrip() {
        let file = NamedTempFile::new().expect("create temp file");
        let settings = Settings {
            game: GameConfig {
                num_rounds: 2,
                ..GameConfig::default()
            },
            seed: Some(9),
            ..Settings::default()
        };
        settings.save(file.path()).expect("save settings");
        assert_eq!(Settings::load(file.path()).unwrap(), settings);
    }

    #[test]
    fn test_settings_load_rejects_invalid() {
        let mut file = NamedTempFile::new().expect("create temp file");
        write!(file, r#"{{"num_rounds": 0}}"#).unwrap();
        assert!(matches!(
            Settings::load(file.path()),
            Err(ConfigError::Invalid(InvalidConfig { field: "num_rounds" }))
        ));

        let mut file = NamedTempFile::new().expect("create temp file");
        write!(file, "not json").unwrap();
        assert!(matches!(
            Settings::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
