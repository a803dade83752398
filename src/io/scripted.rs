//! Prompter that answers from a prepared script.

use std::collections::VecDeque;

use super::{Prompt, Prompter};
use crate::core::error::Result;
use crate::core::PromptError;

/// Answers prompts in order from a fixed list and remembers what was asked.
///
/// Runs out with `PromptError::Closed`, like a terminal hitting EOF.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<Prompt>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Every prompt asked so far.
    #[must_use]
    pub fn asked(&self) -> &[Prompt] {
        &self.asked
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &Prompt) -> Result<String> {
        self.asked.push(prompt.clone());
        self.answers.pop_front().ok_or(PromptError::Closed)
    }
}
