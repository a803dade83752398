//! A whole session: seat the players, play rounds until they stop, name a
//! winner.
//!
//! ## Tie-break
//!
//! Standings are ordered by total score, highest first. Equal totals keep
//! seat order, so the winner is the earliest-seated player among those
//! sharing the top total. `SessionResult::is_tie` tells front ends when that
//! rule decided the game.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::round::{RoundEngine, RoundSummary, Table};
use crate::core::error::Result;
use crate::core::{GameConfig, Player, PlayerId};
use crate::io::{Announcer, GameEvent, Prompt, Prompter};
use crate::wheel::Wheel;
use crate::words::WordSource;

/// A player's place in the final ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub seat: PlayerId,
    pub name: String,
    pub total_score: u64,
}

impl Standing {
    pub fn new(seat: PlayerId, player: &Player) -> Self {
        Self {
            seat,
            name: player.name.clone(),
            total_score: player.total_score,
        }
    }
}

/// Final ranking of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    /// Highest total first; ties in seat order.
    pub standings: Vec<Standing>,
    pub rounds_played: u32,
}

impl SessionResult {
    /// Rank a table.
    pub fn from_table(table: &Table, rounds_played: u32) -> Self {
        let mut standings = table.totals();
        // Stable sort: equal totals stay in seat order.
        standings.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        Self {
            standings,
            rounds_played,
        }
    }

    /// The first standing. A table always has at least one player.
    #[must_use]
    pub fn winner(&self) -> &Standing {
        &self.standings[0]
    }

    /// True if another player shares the winning total.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.standings
            .get(1)
            .is_some_and(|second| second.total_score == self.winner().total_score)
    }
}

/// Ask for the player count and names.
///
/// Counts that are not a number, or fall outside the configured bounds, are
/// reported and asked again.
pub fn seat_players<P, A>(config: &GameConfig, prompter: &mut P, announcer: &mut A) -> Result<Table>
where
    P: Prompter,
    A: Announcer,
{
    let (min, max) = (config.min_players, config.max_players);
    announcer.announce(&GameEvent::Welcome);

    let count = loop {
        let answer = prompter.ask(&Prompt::PlayerCount { min, max })?;
        match answer.trim().parse::<usize>() {
            Ok(count) if (min..=max).contains(&count) => break count,
            _ => {
                warn!(answer = %answer, min, max, "rejected player count");
                announcer.announce(&GameEvent::InvalidPlayerCount { min, max });
            }
        }
    };

    let mut names = Vec::with_capacity(count);
    for seat in PlayerId::all(count) {
        let name = prompter.ask(&Prompt::PlayerName { seat })?;
        names.push(name.trim().to_string());
    }

    info!(players = count, "players seated");
    Ok(Table::from_names(names))
}

/// Rounds over one table with one wheel and one word source.
pub struct GameSession<W, S> {
    table: Table,
    wheel: W,
    words: S,
    rounds_played: u32,
}

impl<W: Wheel, S: WordSource> GameSession<W, S> {
    pub fn new(table: Table, wheel: W, words: S) -> Self {
        Self {
            table,
            wheel,
            words,
            rounds_played: 0,
        }
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Play exactly one round.
    pub fn play_round<P, A>(&mut self, prompter: &mut P, announcer: &mut A) -> Result<RoundSummary>
    where
        P: Prompter,
        A: Announcer,
    {
        let round = self.rounds_played + 1;
        let summary = RoundEngine::new(&mut self.wheel, &mut self.words, prompter, announcer)
            .play_round(&mut self.table, round)?;
        self.rounds_played = round;
        Ok(summary)
    }

    /// Play rounds while the players answer `y`, then rank them.
    pub fn run<P, A>(&mut self, prompter: &mut P, announcer: &mut A) -> Result<SessionResult>
    where
        P: Prompter,
        A: Announcer,
    {
        loop {
            self.play_round(prompter, announcer)?;
            let answer = prompter.ask(&Prompt::PlayAgain)?;
            if !wants_another_round(&answer) {
                break;
            }
        }

        let result = self.result();
        info!(
            rounds = result.rounds_played,
            winner = %result.winner().name,
            tie = result.is_tie(),
            "session finished"
        );
        announcer.announce(&GameEvent::SessionEnded {
            winner: result.winner().clone(),
        });
        Ok(result)
    }

    /// Current ranking.
    #[must_use]
    pub fn result(&self) -> SessionResult {
        SessionResult::from_table(&self.table, self.rounds_played)
    }
}

fn wants_another_round(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ScriptedPrompter;

    fn table_with_totals(totals: &[(&str, u64)]) -> Table {
        let mut table = Table::from_names(totals.iter().map(|(name, _)| *name));
        for (i, (_, total)) in totals.iter().enumerate() {
            table.player_mut(PlayerId::new(i as u8)).total_score = *total;
        }
        table
    }

    #[test]
    fn test_seat_players_reprompts_until_valid() {
        let mut prompter = ScriptedPrompter::new(["abc", "0", "4", "2", "Ann", " Bo "]);
        let mut events = Vec::new();

        let table = seat_players(&GameConfig::default(), &mut prompter, &mut events).unwrap();

        assert_eq!(table.player_count(), 2);
        assert_eq!(table.player(PlayerId::new(1)).name, "Bo");
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::InvalidPlayerCount { .. }))
                .count(),
            3
        );
        assert_eq!(events[0], GameEvent::Welcome);
    }

    #[test]
    fn test_seat_players_honours_config_bounds() {
        let config = GameConfig::default().with_player_bounds(2, 2);
        let mut prompter = ScriptedPrompter::new(["1", "2", "Ann", "Bo"]);
        let mut events = Vec::new();

        let table = seat_players(&config, &mut prompter, &mut events).unwrap();
        assert_eq!(table.player_count(), 2);
    }

    #[test]
    fn test_standings_sorted_descending() {
        let table = table_with_totals(&[("Ann", 500), ("Bo", 1500), ("Cy", 900)]);
        let result = SessionResult::from_table(&table, 2);

        let names: Vec<_> = result.standings.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Bo", "Cy", "Ann"]);
        assert_eq!(result.winner().seat, PlayerId::new(1));
        assert!(!result.is_tie());
    }

    #[test]
    fn test_tie_goes_to_earliest_seat() {
        let table = table_with_totals(&[("Ann", 100), ("Bo", 900), ("Cy", 900)]);
        let result = SessionResult::from_table(&table, 1);

        assert_eq!(result.winner().name, "Bo");
        assert!(result.is_tie());
    }

    #[test]
    fn test_single_player_is_never_a_tie() {
        let table = table_with_totals(&[("Solo", 0)]);
        let result = SessionResult::from_table(&table, 1);

        assert_eq!(result.winner().name, "Solo");
        assert!(!result.is_tie());
    }

    #[test]
    fn test_play_again_answers() {
        assert!(wants_another_round("y"));
        assert!(wants_another_round(" Y "));
        assert!(!wants_another_round("yes"));
        assert!(!wants_another_round("n"));
        assert!(!wants_another_round(""));
    }

    #[test]
    fn test_result_serde() {
        let table = table_with_totals(&[("Ann", 700)]);
        let result = SessionResult::from_table(&table, 3);

        let json = serde_json::to_string(&result).unwrap();
        let back: SessionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
