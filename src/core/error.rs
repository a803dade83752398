//! Error types.
//!
//! Only setup and the input channel can fail. Everything that happens during
//! play is a `TurnOutcome`, never an error.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal problems found before the first round starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read dictionary {}: {source}", path.display())]
    DictionaryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dictionary contains no words")]
    EmptyDictionary,

    #[error("wheel has no values")]
    EmptyWheel,

    #[error("invalid player bounds {min}..={max}")]
    InvalidPlayerBounds { min: usize, max: usize },
}

/// Failures of the input collaborator.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = PromptError> = std::result::Result<T, E>;
