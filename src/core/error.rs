//! Error types.
//!
//! Gameplay itself never errors: rejected flips are reported through
//! `FlipOutcome`. Only configuration and persistence can fail.

use thiserror::Error;

/// Invalid game configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,
    #[error("alphabet has {count} symbols, at most {max} are supported")]
    TooManySymbols { count: usize, max: usize },
    #[error("duplicate symbol key '{0}' in alphabet")]
    DuplicateSymbol(String),
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of the best-score store.
///
/// Callers degrade to "no best score recorded" rather than surfacing these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("score storage unavailable: {0}")]
    Unavailable(String),
    #[error("stored best score '{raw}' is not a move count")]
    Corrupt { raw: String },
    #[error("failed to write best score: {0}")]
    Write(String),
}
