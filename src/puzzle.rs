//! The hidden word and which of its letters are showing.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Character shown for a hidden position.
pub const HIDDEN: char = '-';

/// Positions matched by one guess. Words rarely repeat a letter more than a
/// few times.
pub type Matches = SmallVec<[usize; 4]>;

/// One round's word with a revealed flag per position.
///
/// Reveals are monotonic: nothing ever hides a position again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    word: Vec<char>,
    revealed: Vec<bool>,
}

impl Puzzle {
    /// A fully hidden puzzle for `word`, lowercased.
    pub fn new(word: &str) -> Self {
        let word: Vec<char> = word.to_lowercase().chars().collect();
        let revealed = vec![false; word.len()];
        Self { word, revealed }
    }

    /// The word being guessed.
    #[must_use]
    pub fn word(&self) -> String {
        self.word.iter().collect()
    }

    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Show one position. Revealing twice is a no-op.
    pub fn reveal(&mut self, position: usize) {
        self.revealed[position] = true;
    }

    /// Show every position.
    pub fn reveal_all(&mut self) {
        self.revealed.fill(true);
    }

    #[must_use]
    pub fn is_revealed(&self, position: usize) -> bool {
        self.revealed[position]
    }

    /// The word with hidden positions replaced by `-`.
    ///
    /// ```
    /// use fortune_wheel::Puzzle;
    ///
    /// let mut puzzle = Puzzle::new("cat");
    /// puzzle.reveal(1);
    /// assert_eq!(puzzle.render(), "-a-");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.word
            .iter()
            .zip(&self.revealed)
            .map(|(&c, &shown)| if shown { c } else { HIDDEN })
            .collect()
    }

    /// True once every position is showing.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.revealed.iter().all(|&shown| shown)
    }

    /// Hidden positions holding the guessed letter.
    ///
    /// The guess is lowercased first. Anything other than exactly one
    /// character matches nothing.
    #[must_use]
    pub fn match_positions(&self, guess: &str) -> Matches {
        let mut chars = guess.chars().flat_map(char::to_lowercase);
        let letter = match (chars.next(), chars.next()) {
            (Some(letter), None) => letter,
            _ => return Matches::new(),
        };

        self.word
            .iter()
            .enumerate()
            .filter(|&(i, &c)| c == letter && !self.revealed[i])
            .map(|(i, _)| i)
            .collect()
    }

    /// Compare a full-word attempt, ignoring case. A match reveals everything.
    pub fn try_solve(&mut self, attempt: &str) -> bool {
        let solved = attempt.to_lowercase().chars().eq(self.word.iter().copied());
        if solved {
            self.reveal_all();
        }
        solved
    }
}
