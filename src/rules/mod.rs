//! Game rules, from the smallest unit up:
//!
//! - `turn`: one player's spins until the turn resolves
//! - `round`: turns in seat order until the word is solved
//! - `session`: rounds until the players stop, then a winner
//!
//! Every branch of play ends in a `TurnOutcome`. The only errors are from the
//! input collaborator.

pub mod turn;
pub mod round;
pub mod session;

pub use turn::{TurnChoice, TurnEngine, TurnOutcome};
pub use round::{RoundEngine, RoundSummary, Table};
pub use session::{seat_players, GameSession, SessionResult, Standing};
