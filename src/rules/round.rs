//! One round: a word, turns in seat order, then score cleanup.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::session::Standing;
use super::turn::TurnEngine;
use crate::core::error::Result;
use crate::core::{Player, PlayerId, PlayerMap};
use crate::io::{Announcer, GameEvent, Prompter};
use crate::puzzle::Puzzle;
use crate::wheel::Wheel;
use crate::words::WordSource;

/// Players in seat order and whose turn it is.
///
/// This is the context the engines work on; nothing about a game lives in
/// globals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    players: PlayerMap<Player>,
    current: PlayerId,
}

impl Table {
    /// Seat the given players. The first one starts.
    pub fn new(players: PlayerMap<Player>) -> Self {
        Self {
            players,
            current: PlayerId::new(0),
        }
    }

    /// Seat players by name, scores at zero.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players = names.into_iter().map(Player::new).collect();
        Self::new(PlayerMap::from_vec(players))
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, seat: PlayerId) -> &Player {
        &self.players[seat]
    }

    pub fn player_mut(&mut self, seat: PlayerId) -> &mut Player {
        &mut self.players[seat]
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Pass play to the next seat, wrapping around.
    pub fn advance(&mut self) {
        self.current = self.current.next(self.player_count());
    }

    /// Give the first seat the next turn.
    pub fn reset_to_first_seat(&mut self) {
        self.current = PlayerId::new(0);
    }

    /// Every player's total, in seat order.
    #[must_use]
    pub fn totals(&self) -> Vec<Standing> {
        self.players
            .iter()
            .map(|(seat, player)| Standing::new(seat, player))
            .collect()
    }

    /// Zero every round score, winner included.
    pub fn clear_round_scores(&mut self) {
        for (_, player) in self.players.iter_mut() {
            player.round_score = 0;
        }
    }
}

/// How a round went.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// 1-based round number within the session.
    pub round: u32,
    pub word: String,
    pub solved_by: PlayerId,
    /// Totals after the round, in seat order.
    pub totals: Vec<Standing>,
}

/// Plays rounds to completion.
pub struct RoundEngine<'a, W, S, P, A> {
    turns: TurnEngine<'a, W, P, A>,
    words: &'a mut S,
}

impl<'a, W, S, P, A> RoundEngine<'a, W, S, P, A>
where
    W: Wheel,
    S: WordSource,
    P: Prompter,
    A: Announcer,
{
    pub fn new(wheel: &'a mut W, words: &'a mut S, prompter: &'a mut P, announcer: &'a mut A) -> Self {
        Self {
            turns: TurnEngine::new(wheel, prompter, announcer),
            words,
        }
    }

    /// Draw a word and play turns until it is solved.
    ///
    /// Play starts at the first seat. Every round score is zeroed on the way
    /// out.
    pub fn play_round(&mut self, table: &mut Table, round: u32) -> Result<RoundSummary> {
        let mut puzzle = Puzzle::new(&self.words.draw());
        table.reset_to_first_seat();
        info!(round, letters = puzzle.len(), players = table.player_count(), "round started");

        let solved_by = loop {
            let seat = table.current();
            let outcome = self.turns.play_turn(table.player_mut(seat), &mut puzzle)?;
            debug!(round, %seat, ?outcome, "turn over");

            if outcome.ends_round() || puzzle.is_solved() {
                break seat;
            }
            table.advance();
        };

        let totals = table.totals();
        table.clear_round_scores();
        info!(round, %solved_by, "round finished");

        self.turns.announce(GameEvent::RoundEnded {
            round,
            word: puzzle.word(),
            totals: totals.clone(),
        });

        Ok(RoundSummary {
            round,
            word: puzzle.word(),
            solved_by,
            totals,
        })
    }
}
