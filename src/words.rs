//! Dictionary loading and word selection.
//!
//! The dictionary is a line-delimited word list. Entries are trimmed and
//! lowercased, blank lines dropped. Entries with inner whitespace are skipped:
//! guesses are trimmed, so a space could never be revealed. A `Dictionary` is
//! never empty.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::core::{ConfigError, GameRng};

/// A non-empty list of lowercase words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Parse a line-delimited word list.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let words: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| {
                let single = !line.contains(char::is_whitespace);
                if !single {
                    warn!(entry = %line, "skipping dictionary entry with whitespace");
                }
                single
            })
            .map(str::to_lowercase)
            .collect();

        if words.is_empty() {
            return Err(ConfigError::EmptyDictionary);
        }
        Ok(Self { words })
    }

    /// Read and parse a dictionary file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::DictionaryUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::parse(&text)?;
        info!(path = %path.display(), words = dictionary.len(), "dictionary loaded");
        Ok(dictionary)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Supplies one word per round.
pub trait WordSource {
    fn draw(&mut self) -> String;
}

/// Uniform draw from a dictionary. Words may repeat across rounds.
#[derive(Clone, Debug)]
pub struct RandomWords {
    dictionary: Dictionary,
    rng: GameRng,
}

impl RandomWords {
    pub fn new(dictionary: Dictionary, rng: GameRng) -> Self {
        Self { dictionary, rng }
    }
}

impl WordSource for RandomWords {
    fn draw(&mut self) -> String {
        let word = self
            .rng
            .choose(self.dictionary.words())
            .cloned()
            .unwrap_or_default();
        debug!(len = word.chars().count(), "word drawn");
        word
    }
}

/// Fixed words in order, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct SequenceWords {
    words: Vec<String>,
    next: usize,
}

impl SequenceWords {
    /// # Panics
    ///
    /// Panics if `words` is empty.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        assert!(!words.is_empty(), "Need at least one word");
        Self { words, next: 0 }
    }
}

impl WordSource for SequenceWords {
    fn draw(&mut self) -> String {
        let word = self.words[self.next].clone();
        self.next = (self.next + 1) % self.words.len();
        word
    }
}
