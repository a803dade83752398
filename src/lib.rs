//! # fortune-wheel
//!
//! A turn-based spin-and-guess word game for one to three players.
//!
//! Each round hides a word from the dictionary. On their turn a player spins
//! the wheel, guesses a letter and scores the spin value for every hidden copy
//! of it. They keep spinning until they land on zero, miss, or try to solve.
//! Solving banks the round score; a wrong solve loses it.
//!
//! ## Design Principles
//!
//! 1. **Outcomes, not exceptions**: every branch of play ends in a
//!    `TurnOutcome`. Errors only come from setup and the input channel.
//!
//! 2. **Explicit context**: players and the current seat live in a `Table`
//!    passed to the engines, so turns and rounds run in isolation.
//!
//! 3. **Injectable edges**: the wheel, the word source, input and output are
//!    traits. Seeded `GameRng` streams make random games replayable; scripted
//!    implementations make them testable.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors
//! - `wheel`: spin values
//! - `puzzle`: hidden word state
//! - `words`: dictionary loading and word selection
//! - `io`: prompts, events, console and scripted front ends
//! - `rules`: turn, round and session engines

pub mod core;
pub mod wheel;
pub mod puzzle;
pub mod words;
pub mod io;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameRng, Player, PlayerId, PlayerMap, PromptError,
    WheelConfig,
};

pub use crate::wheel::{ScriptedWheel, ValueWheel, Wheel, WHEEL_VALUES};

pub use crate::puzzle::Puzzle;

pub use crate::words::{Dictionary, RandomWords, SequenceWords, WordSource};

pub use crate::io::{
    Announcer, ConsoleAnnouncer, ConsolePrompter, GameEvent, Prompt, Prompter, ScriptedPrompter,
};

pub use crate::rules::{
    seat_players, GameSession, RoundEngine, RoundSummary, SessionResult, Standing, Table,
    TurnChoice, TurnEngine, TurnOutcome,
};
