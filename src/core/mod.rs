//! Core types: players, RNG, configuration, errors.
//!
//! Everything here is independent of the game rules in `rules`.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, WHEEL_STREAM, WORD_STREAM};
pub use config::{GameConfig, WheelConfig};
pub use error::{ConfigError, PromptError};
