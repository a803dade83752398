//! One player's turn.
//!
//! A turn is a chain of spins. Each spin either keeps the turn alive
//! (`ContinueTurn`) or resolves it with one of four terminal outcomes. Only
//! `RoundSolved` ends the round; the others pass play to the next seat.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::Result;
use crate::core::Player;
use crate::io::{Announcer, GameEvent, Prompt, Prompter};
use crate::puzzle::Puzzle;
use crate::wheel::Wheel;

/// How a spin resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Letters matched and the player chose to spin again.
    ContinueTurn,
    /// The wheel landed on zero.
    EndedZero,
    /// The guessed letter was not hidden anywhere in the word.
    EndedNoMatch,
    /// A full-word attempt was wrong; the round score is gone.
    EndedWrongSolve,
    /// The word is fully revealed and the round score is banked.
    RoundSolved,
}

impl TurnOutcome {
    /// Does this outcome finish the turn?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != TurnOutcome::ContinueTurn
    }

    /// Does this outcome finish the round?
    #[must_use]
    pub fn ends_round(self) -> bool {
        self == TurnOutcome::RoundSolved
    }
}

/// What a player does after a successful guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnChoice {
    SpinAgain,
    Solve,
}

impl TurnChoice {
    /// `2` solves. Every other answer spins again.
    #[must_use]
    pub fn from_answer(answer: &str) -> Self {
        if answer.trim() == "2" {
            TurnChoice::Solve
        } else {
            TurnChoice::SpinAgain
        }
    }
}

/// Runs turns against a wheel, asking and telling the players as it goes.
pub struct TurnEngine<'a, W, P, A> {
    wheel: &'a mut W,
    prompter: &'a mut P,
    announcer: &'a mut A,
}

impl<'a, W: Wheel, P: Prompter, A: Announcer> TurnEngine<'a, W, P, A> {
    pub fn new(wheel: &'a mut W, prompter: &'a mut P, announcer: &'a mut A) -> Self {
        Self {
            wheel,
            prompter,
            announcer,
        }
    }

    pub(crate) fn announce(&mut self, event: GameEvent) {
        self.announcer.announce(&event);
    }

    /// Spin until the turn resolves. Never returns `ContinueTurn`.
    pub fn play_turn(&mut self, player: &mut Player, puzzle: &mut Puzzle) -> Result<TurnOutcome> {
        loop {
            let outcome = self.spin(player, puzzle)?;
            if outcome.is_terminal() {
                return Ok(outcome);
            }
        }
    }

    /// One spin: spin, guess, score, then continue or solve.
    pub fn spin(&mut self, player: &mut Player, puzzle: &mut Puzzle) -> Result<TurnOutcome> {
        self.announce(GameEvent::TurnStarted {
            player: player.name.clone(),
            round_score: player.round_score,
            puzzle: puzzle.render(),
        });
        self.prompter.ask(&Prompt::Spin {
            player: player.name.clone(),
        })?;

        let value = self.wheel.spin();
        debug!(player = %player.name, value, "spin");
        self.announce(GameEvent::Spun {
            player: player.name.clone(),
            value,
        });

        if value == 0 {
            self.announce(GameEvent::LandedOnZero {
                player: player.name.clone(),
            });
            return Ok(TurnOutcome::EndedZero);
        }

        let guess = self.prompter.ask(&Prompt::Letter {
            player: player.name.clone(),
        })?;
        let matches = puzzle.match_positions(&guess);

        if matches.is_empty() {
            let penalty = u64::from(value / 2);
            player.penalize(penalty);
            debug!(player = %player.name, guess = %guess, penalty, "no match");
            self.announce(GameEvent::NoMatch {
                player: player.name.clone(),
                penalty,
                round_score: player.round_score,
            });
            return Ok(TurnOutcome::EndedNoMatch);
        }

        for &position in &matches {
            puzzle.reveal(position);
        }
        player.earn(u64::from(value) * matches.len() as u64);
        debug!(player = %player.name, count = matches.len(), round_score = player.round_score, "letters revealed");
        self.announce(GameEvent::LettersRevealed {
            player: player.name.clone(),
            count: matches.len(),
            puzzle: puzzle.render(),
            round_score: player.round_score,
        });

        if puzzle.is_solved() {
            return Ok(self.solved(player, puzzle));
        }

        let answer = self.prompter.ask(&Prompt::TurnChoice {
            player: player.name.clone(),
        })?;
        if TurnChoice::from_answer(&answer) == TurnChoice::SpinAgain {
            return Ok(TurnOutcome::ContinueTurn);
        }

        let attempt = self.prompter.ask(&Prompt::SolveAttempt {
            player: player.name.clone(),
        })?;
        if puzzle.try_solve(&attempt) {
            return Ok(self.solved(player, puzzle));
        }

        player.forfeit_round();
        debug!(player = %player.name, "wrong solve");
        self.announce(GameEvent::WrongSolve {
            player: player.name.clone(),
        });
        Ok(TurnOutcome::EndedWrongSolve)
    }

    fn solved(&mut self, player: &mut Player, puzzle: &Puzzle) -> TurnOutcome {
        player.bank_round();
        debug!(player = %player.name, total_score = player.total_score, "puzzle solved");
        self.announce(GameEvent::PuzzleSolved {
            player: player.name.clone(),
            word: puzzle.word(),
        });
        TurnOutcome::RoundSolved
    }
}
