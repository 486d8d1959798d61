//! Error types for the word-labyrinth engine.

use std::path::PathBuf;

/// Failures the engine reports to its caller.
///
/// Gameplay rejections (invalid words, non-adjacent taps) are not errors; they
/// come back as outcome values and session messages.
#[derive(Debug, thiserror::Error)]
pub enum LabyrinthError {
    #[error("failed to read word list {path}: {source}")]
    DictionaryIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The host could not fetch the word list (network, HTTP status).
    #[error("failed to fetch word list: {0}")]
    DictionaryFetch(String),

    #[error("invalid game config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used across the engine.
pub type Result<T> = std::result::Result<T, LabyrinthError>;
