//! Best-score persistence.
//!
//! The best (lowest) move count is the only state that outlives a session.
//! Backends implement `ScoreStore`; the session tracker treats every read
//! failure as "no best score recorded".

use crate::core::StoreError;

/// Storage key for the best score record.
pub const BEST_SCORE_KEY: &str = "bestScore";

/// Key-value backend for the best score.
pub trait ScoreStore {
    /// Read the stored best score. `Ok(None)` means nothing is recorded.
    fn load_best(&self) -> Result<Option<u32>, StoreError>;

    /// Persist a new best score.
    fn save_best(&mut self, moves: u32) -> Result<(), StoreError>;
}

/// In-memory store, for tests and hosts without persistent storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryScoreStore {
    best: Option<u32>,
    writes: u32,
}

impl MemoryScoreStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a best score.
    #[must_use]
    pub fn with_best(moves: u32) -> Self {
        Self {
            best: Some(moves),
            writes: 0,
        }
    }

    /// Current stored value.
    #[must_use]
    pub fn best(&self) -> Option<u32> {
        self.best
    }

    /// Number of successful `save_best` calls.
    #[must_use]
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_best(&self) -> Result<Option<u32>, StoreError> {
        Ok(self.best)
    }

    fn save_best(&mut self, moves: u32) -> Result<(), StoreError> {
        self.best = Some(moves);
        self.writes += 1;
        Ok(())
    }
}

/// Parse a raw stored record.
///
/// Surrounding whitespace is ignored. Anything that is not a non-negative
/// integer (including legacy sentinels such as `Infinity`) is corrupt.
pub fn parse_stored_best(raw: &str) -> Result<u32, StoreError> {
    raw.trim().parse::<u32>().map_err(|_| StoreError::Corrupt {
        raw: raw.to_string(),
    })
}
