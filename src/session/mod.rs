//! Session tracking and best-score persistence.

pub mod store;
pub mod tracker;

pub use store::{parse_stored_best, MemoryScoreStore, ScoreStore, BEST_SCORE_KEY};
pub use tracker::{best_score_label, format_clock, SessionTracker};
