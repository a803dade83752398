//! Collaborators at the edge of the game: where input comes from and where
//! status text goes.
//!
//! The rules never read a terminal directly. They ask a [`Prompter`] for one
//! raw line per [`Prompt`] and parse it themselves, and they report what
//! happened to an [`Announcer`] as a [`GameEvent`]. Swapping the console
//! implementations for the scripted ones makes every game path testable.

pub mod console;
pub mod scripted;

pub use console::{ConsoleAnnouncer, ConsolePrompter};
pub use scripted::ScriptedPrompter;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::PlayerId;
use crate::rules::Standing;

/// A question put to the players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
    /// How many players, within `min..=max`.
    PlayerCount { min: usize, max: usize },
    /// Name for one seat.
    PlayerName { seat: PlayerId },
    /// Acknowledge before the wheel spins. The answer is ignored.
    Spin { player: String },
    /// A single letter.
    Letter { player: String },
    /// `2` to solve, anything else to spin again.
    TurnChoice { player: String },
    /// The whole word.
    SolveAttempt { player: String },
    /// `y` to play another round.
    PlayAgain,
}

/// Input collaborator. Returns one raw line per prompt.
pub trait Prompter {
    fn ask(&mut self, prompt: &Prompt) -> Result<String>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn ask(&mut self, prompt: &Prompt) -> Result<String> {
        (**self).ask(prompt)
    }
}

/// Something observable happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Welcome,
    InvalidPlayerCount { min: usize, max: usize },
    TurnStarted { player: String, round_score: u64, puzzle: String },
    Spun { player: String, value: u32 },
    LandedOnZero { player: String },
    LettersRevealed { player: String, count: usize, puzzle: String, round_score: u64 },
    NoMatch { player: String, penalty: u64, round_score: u64 },
    PuzzleSolved { player: String, word: String },
    WrongSolve { player: String },
    RoundEnded { round: u32, word: String, totals: Vec<Standing> },
    SessionEnded { winner: Standing },
}

/// Display sink. Purely observational.
pub trait Announcer {
    fn announce(&mut self, event: &GameEvent);
}

impl<A: Announcer + ?Sized> Announcer for &mut A {
    fn announce(&mut self, event: &GameEvent) {
        (**self).announce(event);
    }
}

/// Records every event, in order.
impl Announcer for Vec<GameEvent> {
    fn announce(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}
