//! Game configuration types.
//!
//! - `WheelConfig`: the slots on the wheel
//! - `GameConfig`: seat bounds, wheel, dictionary location and seed
//!
//! Defaults reproduce the classic three-seat game. `GameConfig::from_env`
//! layers environment variables on top of them.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;
use crate::wheel::WHEEL_VALUES;

/// Environment variable naming the dictionary file.
pub const DICTIONARY_ENV: &str = "FORTUNE_DICTIONARY";

/// Environment variable holding a fixed RNG seed.
pub const SEED_ENV: &str = "FORTUNE_SEED";

/// Slots on the wheel.
///
/// Every slot is equally likely, so a value listed twice is twice as likely.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelConfig {
    pub values: Vec<u32>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            values: WHEEL_VALUES.to_vec(),
        }
    }
}

impl WheelConfig {
    /// A wheel with the given slots.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fewest players allowed at the table.
    pub min_players: usize,

    /// Most players allowed at the table.
    pub max_players: usize,

    /// Wheel slots.
    pub wheel: WheelConfig,

    /// Line-delimited word list.
    pub dictionary_path: PathBuf,

    /// Fixed seed for reproducible games. `None` draws one at startup.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: 1,
            max_players: 3,
            wheel: WheelConfig::default(),
            dictionary_path: PathBuf::from("dictionary.txt"),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `FORTUNE_DICTIONARY` and `FORTUNE_SEED`.
    ///
    /// A seed that does not parse as `u64` is logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var(DICTIONARY_ENV) {
            config.dictionary_path = PathBuf::from(path);
        }
        if let Some(seed) = read_env::<u64>(SEED_ENV) {
            config.seed = Some(seed);
        }

        config
    }

    /// Set the seat bounds.
    #[must_use]
    pub fn with_player_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Replace the wheel.
    #[must_use]
    pub fn with_wheel(mut self, wheel: WheelConfig) -> Self {
        self.wheel = wheel;
        self
    }

    /// Set the dictionary file.
    #[must_use]
    pub fn with_dictionary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary_path = path.into();
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations no game could be played with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wheel.values.is_empty() {
            return Err(ConfigError::EmptyWheel);
        }
        if self.min_players == 0 || self.min_players > self.max_players || self.max_players > 255 {
            return Err(ConfigError::InvalidPlayerBounds {
                min: self.min_players,
                max: self.max_players,
            });
        }
        Ok(())
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    parse_env_value(key, &env::var(key).ok()?)
}

fn parse_env_value<T>(key: &str, raw: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = raw, "ignoring unparsable environment value");
            None
        }
    }
}
