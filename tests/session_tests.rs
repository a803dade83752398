//! Whole-session integration tests.
//!
//! Scripted sessions pin exact scores; the alphabet bot plays random seeded
//! games end to end to check the invariants that hold across rounds.

use fortune_wheel::core::{WHEEL_STREAM, WORD_STREAM};
use fortune_wheel::{
    seat_players, Dictionary, GameConfig, GameEvent, GameRng, GameSession, Prompt, PromptError,
    Prompter, RandomWords, ScriptedPrompter, ScriptedWheel, SequenceWords, SessionResult, Table,
    ValueWheel,
};

/// Guesses the alphabet in order, never solves, plays a fixed number of rounds.
struct AlphabetBot {
    players: Vec<&'static str>,
    next_name: usize,
    next_letter: u8,
    rounds_left: u32,
}

impl AlphabetBot {
    fn new(players: Vec<&'static str>, rounds: u32) -> Self {
        Self {
            players,
            next_name: 0,
            next_letter: 0,
            rounds_left: rounds,
        }
    }
}

impl Prompter for AlphabetBot {
    fn ask(&mut self, prompt: &Prompt) -> Result<String, PromptError> {
        let answer = match prompt {
            Prompt::PlayerCount { .. } => self.players.len().to_string(),
            Prompt::PlayerName { .. } => {
                let name = self.players[self.next_name];
                self.next_name += 1;
                name.to_string()
            }
            Prompt::Spin { .. } => String::new(),
            Prompt::Letter { .. } => {
                let letter = (b'a' + self.next_letter) as char;
                self.next_letter = (self.next_letter + 1) % 26;
                letter.to_string()
            }
            Prompt::TurnChoice { .. } => "1".to_string(),
            Prompt::SolveAttempt { .. } => String::new(),
            Prompt::PlayAgain => {
                self.rounds_left = self.rounds_left.saturating_sub(1);
                let answer = if self.rounds_left > 0 { "y" } else { "n" };
                answer.to_string()
            }
        };
        Ok(answer)
    }
}

fn seeded_session(seed: u64, players: Vec<&'static str>, rounds: u32) -> (SessionResult, Vec<GameEvent>) {
    let dictionary = Dictionary::parse("rust\ncargo\nborrow\nlifetime\ntrait\nclosure\n").unwrap();
    let rng = GameRng::new(seed);
    let wheel = ValueWheel::classic(rng.for_context(WHEEL_STREAM));
    let words = RandomWords::new(dictionary, rng.for_context(WORD_STREAM));

    let mut bot = AlphabetBot::new(players, rounds);
    let mut events = Vec::new();

    let table = seat_players(&GameConfig::default(), &mut bot, &mut events).unwrap();
    let result = GameSession::new(table, wheel, words)
        .run(&mut bot, &mut events)
        .unwrap();
    (result, events)
}

// =============================================================================
// Scripted sessions
// =============================================================================

#[test]
fn test_two_round_session_scores() {
    let table = Table::from_names(["Ann", "Bo"]);
    let mut session = GameSession::new(table, ScriptedWheel::new([500, 0, 800]), SequenceWords::new(["cat", "dog"]));

    let mut prompter = ScriptedPrompter::new([
        // Round 1: Ann solves "cat" straight away.
        "", "a", "2", "cat",
        "y",
        // Round 2: Ann lands on zero, Bo reveals "o" and solves "dog".
        "", "", "o", "2", "dog",
        "n",
    ]);
    let mut events = Vec::new();

    let result = session.run(&mut prompter, &mut events).unwrap();

    assert_eq!(result.rounds_played, 2);
    assert_eq!(result.winner().name, "Bo");
    assert_eq!(result.winner().total_score, 800);
    assert_eq!(result.standings[1].name, "Ann");
    assert_eq!(result.standings[1].total_score, 500);
    assert!(!result.is_tie());

    assert_eq!(prompter.remaining(), 0);
    assert!(matches!(events.last(), Some(GameEvent::SessionEnded { winner }) if winner.name == "Bo"));
}

#[test]
fn test_round_scores_zero_between_rounds() {
    let table = Table::from_names(["Ann", "Bo"]);
    let mut session = GameSession::new(table, ScriptedWheel::new([600, 300, 900]), SequenceWords::new(["owl"]));

    let mut prompter = ScriptedPrompter::new([
        // Ann: "o" then a miss, Bo finishes with "w" and solves.
        "", "o", "1", "", "z", "", "w", "2", "owl",
    ]);
    let mut events = Vec::new();

    let summary = session.play_round(&mut prompter, &mut events).unwrap();

    assert_eq!(summary.round, 1);
    assert_eq!(summary.word, "owl");
    for (_, player) in session.table().players().iter() {
        assert_eq!(player.round_score, 0);
    }
    // Ann earned 600, lost 150, and banked nothing.
    assert_eq!(summary.totals[0].total_score, 0);
    assert_eq!(summary.totals[1].total_score, 900);
}

#[test]
fn test_tie_reports_earliest_seat() {
    let table = Table::from_names(["Ann", "Bo"]);
    let mut session = GameSession::new(table, ScriptedWheel::new([700]), SequenceWords::new(["a", "b"]));

    let mut prompter = ScriptedPrompter::new([
        "", "a", "y",
        // Round 2 starts at Ann again; she misses, Bo takes it.
        "", "z", "", "b", "n",
    ]);
    let mut events = Vec::new();

    let result = session.run(&mut prompter, &mut events).unwrap();

    assert!(result.is_tie());
    assert_eq!(result.winner().name, "Ann");
    assert_eq!(result.winner().total_score, 700);
}

#[test]
fn test_closed_input_aborts_session() {
    let table = Table::from_names(["Ann"]);
    let mut session = GameSession::new(table, ScriptedWheel::new([500]), SequenceWords::new(["cat"]));
    let mut prompter = ScriptedPrompter::new(["", "a"]);
    let mut events = Vec::new();

    let result = session.run(&mut prompter, &mut events);
    assert!(matches!(result, Err(PromptError::Closed)));
    assert_eq!(session.rounds_played(), 0);
}

// =============================================================================
// Seeded sessions
// =============================================================================

#[test]
fn test_seeded_sessions_replay_identically() {
    let (first, first_events) = seeded_session(12345, vec!["Ann", "Bo", "Cy"], 3);
    let (second, second_events) = seeded_session(12345, vec!["Ann", "Bo", "Cy"], 3);

    assert_eq!(first, second);
    assert_eq!(first_events, second_events);
}

#[test]
fn test_totals_never_decrease_across_rounds() {
    for seed in [1, 2, 3, 42, 999] {
        let (result, events) = seeded_session(seed, vec!["Ann", "Bo"], 4);
        assert_eq!(result.rounds_played, 4);

        let mut previous = vec![0u64; 2];
        for event in &events {
            if let GameEvent::RoundEnded { totals, .. } = event {
                for standing in totals {
                    let seat = standing.seat.index();
                    assert!(standing.total_score >= previous[seat]);
                    previous[seat] = standing.total_score;
                }
            }
        }
    }
}

#[test]
fn test_single_player_session_completes() {
    let (result, events) = seeded_session(7, vec!["Solo"], 2);

    assert_eq!(result.rounds_played, 2);
    assert_eq!(result.standings.len(), 1);
    assert!(!result.is_tie());
    let solved = events
        .iter()
        .filter(|e| matches!(e, GameEvent::PuzzleSolved { player, .. } if player == "Solo"))
        .count();
    assert_eq!(solved, 2);
}
