//! `localStorage`-backed best score.

use crate::core::StoreError;
use crate::session::{parse_stored_best, ScoreStore, BEST_SCORE_KEY};

/// Best score kept in the browser's `localStorage`.
///
/// Private browsing modes and sandboxed iframes may refuse access; those
/// failures surface as `StoreError::Unavailable` and the game carries on
/// without a persisted best.
#[derive(Clone, Debug)]
pub struct LocalStorageScoreStore {
    key: String,
}

impl Default for LocalStorageScoreStore {
    fn default() -> Self {
        Self::new(BEST_SCORE_KEY)
    }
}

impl LocalStorageScoreStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|_| StoreError::Unavailable("localStorage access denied".into()))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
    }
}

impl ScoreStore for LocalStorageScoreStore {
    fn load_best(&self) -> Result<Option<u32>, StoreError> {
        let raw = Self::storage()?
            .get_item(&self.key)
            .map_err(|_| StoreError::Unavailable(format!("cannot read '{}'", self.key)))?;

        raw.as_deref().map(parse_stored_best).transpose()
    }

    fn save_best(&mut self, moves: u32) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(&self.key, &moves.to_string())
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }
}
