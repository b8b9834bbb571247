//! Session tracker: moves, elapsed time and the best score.
//!
//! `best_score` is monotonically non-increasing once set. It is loaded from
//! the store once at construction and written back only when beaten.

use super::store::ScoreStore;

/// Per-session counters plus the persisted best score.
#[derive(Debug)]
pub struct SessionTracker<S: ScoreStore> {
    moves: u32,
    elapsed_seconds: u32,
    best_score: Option<u32>,
    store: S,
}

impl<S: ScoreStore> SessionTracker<S> {
    /// Create a tracker, reading the best score from `store`.
    ///
    /// A failed read is logged and treated as "no best score yet".
    pub fn new(store: S) -> Self {
        let best_score = match store.load_best() {
            Ok(best) => best,
            Err(err) => {
                log::warn!("ignoring unreadable best score: {err}");
                None
            }
        };

        Self {
            moves: 0,
            elapsed_seconds: 0,
            best_score,
            store,
        }
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Count one move (a pair of flips). Returns the new total.
    pub fn record_move(&mut self) -> u32 {
        self.moves += 1;
        self.moves
    }

    /// Count one elapsed-time tick. Returns the new total.
    pub fn tick(&mut self) -> u32 {
        self.add_seconds(1)
    }

    /// Count several ticks at once. The total saturates at `u32::MAX`.
    pub fn add_seconds(&mut self, seconds: u32) -> u32 {
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(seconds);
        self.elapsed_seconds
    }

    /// Record a finished game. Returns true if `moves` is a new best.
    ///
    /// The in-memory best is updated even if persisting it fails.
    pub fn record_win(&mut self, moves: u32) -> bool {
        let is_new_best = self.best_score.map_or(true, |best| moves < best);
        if !is_new_best {
            return false;
        }

        self.best_score = Some(moves);
        if let Err(err) = self.store.save_best(moves) {
            log::warn!("best score {moves} kept in memory only: {err}");
        }
        true
    }

    /// Zero the per-session counters. The best score is kept.
    pub fn reset(&mut self) {
        self.moves = 0;
        self.elapsed_seconds = 0;
    }
}

/// Format seconds as `m:ss`.
///
/// ```
/// use bloom_match::session::format_clock;
///
/// assert_eq!(format_clock(0), "0:00");
/// assert_eq!(format_clock(75), "1:15");
/// assert_eq!(format_clock(600), "10:00");
/// ```
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Display text for a best score. Absence is shown as `-`, never as zero.
#[must_use]
pub fn best_score_label(best: Option<u32>) -> String {
    best.map_or_else(|| "-".to_string(), |moves| moves.to_string())
}
