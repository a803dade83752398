//! Line-oriented terminal front end.

use std::io::{self, BufRead, Stdin, Stdout, Write};

use tracing::warn;

use super::{Announcer, GameEvent, Prompt, Prompter};
use crate::core::error::Result;
use crate::core::PromptError;

const RULE: &str = "-----------------------------------------------------";

fn prompt_text(prompt: &Prompt) -> String {
    match prompt {
        Prompt::PlayerCount { min, max } => format!("How many players? ({min} - {max}): "),
        Prompt::PlayerName { seat } => format!("Welcome {seat}! Enter your name: "),
        Prompt::Spin { .. } => "Press ENTER to spin the wheel".to_string(),
        Prompt::Letter { .. } => "What letter would you like to guess? ".to_string(),
        Prompt::TurnChoice { .. } => "Enter 1 to spin and guess again, or 2 to solve: ".to_string(),
        Prompt::SolveAttempt { .. } => "Enter the solved word: ".to_string(),
        Prompt::PlayAgain => "Do you want to play another round? (Y/N) ".to_string(),
    }
}

/// Asks on a writer, answers from a reader. One line per prompt.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompter<io::StdinLock<'static>, Stdout> {
    /// Prompt on stdout, read from stdin.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn ask(&mut self, prompt: &Prompt) -> Result<String> {
        write!(self.output, "{}", prompt_text(prompt))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }
}

/// Writes each event as human-readable text.
pub struct ConsoleAnnouncer<W> {
    output: W,
}

impl ConsoleAnnouncer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleAnnouncer<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.output
    }

    fn write_event(&mut self, event: &GameEvent) -> io::Result<()> {
        let out = &mut self.output;
        match event {
            GameEvent::Welcome => {
                writeln!(out, "Welcome to the Fortune Wheel!")?;
            }
            GameEvent::InvalidPlayerCount { min, max } => {
                writeln!(out, "Invalid number of players. Enter a number between {min} - {max}")?;
            }
            GameEvent::TurnStarted { player, round_score, puzzle } => {
                writeln!(out)?;
                writeln!(out, "Player {player}, it is your turn")?;
                writeln!(out, "Your round score is {round_score}")?;
                writeln!(out, "Puzzle: {puzzle}")?;
                writeln!(out)?;
            }
            GameEvent::Spun { value, .. } => {
                writeln!(out, "You spun: {value}")?;
            }
            GameEvent::LandedOnZero { .. } => {
                writeln!(out, "You landed on 0. No points this turn. Your turn ends.")?;
                writeln!(out, "{RULE}")?;
            }
            GameEvent::LettersRevealed { puzzle, round_score, .. } => {
                writeln!(out)?;
                writeln!(out, "Yes! Puzzle: {puzzle}")?;
                writeln!(out, "Your round score is {round_score}")?;
                writeln!(out, "{RULE}")?;
            }
            GameEvent::NoMatch { penalty, round_score, .. } => {
                writeln!(out, "No matches! You lose {penalty} points. Your turn ends.")?;
                writeln!(out, "Your round score is {round_score}")?;
                writeln!(out, "{RULE}")?;
            }
            GameEvent::PuzzleSolved { word, .. } => {
                writeln!(out, "Congratulations! You solved the puzzle: {word}")?;
                writeln!(out)?;
            }
            GameEvent::WrongSolve { .. } => {
                writeln!(out, "That is incorrect. You lose all your points for this round.")?;
                writeln!(out, "{RULE}")?;
            }
            GameEvent::RoundEnded { round, word, totals } => {
                writeln!(out, "End of round {round}! The word was {word}.")?;
                writeln!(out, "{RULE}")?;
                for standing in totals {
                    writeln!(out, "{} - Total Score: {}", standing.name, standing.total_score)?;
                }
                writeln!(out, "{RULE}")?;
            }
            GameEvent::SessionEnded { winner } => {
                writeln!(
                    out,
                    "The winner is {} with a total score of {}!",
                    winner.name, winner.total_score
                )?;
                writeln!(out, "Goodbye! Thanks for playing")?;
            }
        }
        out.flush()
    }
}

impl<W: Write> Announcer for ConsoleAnnouncer<W> {
    fn announce(&mut self, event: &GameEvent) {
        if let Err(err) = self.write_event(event) {
            warn!(%err, "failed to write game output");
        }
    }
}
