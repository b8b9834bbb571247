//! # bloom-match
//!
//! A flower memory-matching game engine that runs headless.
//!
//! ## Design Principles
//!
//! 1. **Pure State Machine**: Commands (`start`, `flip`, `advance`) go in,
//!    `GameEvent`s come out. Rendering is a subscriber, never a dependency.
//!
//! 2. **Virtual Time**: Delays (mismatch flip-back, the elapsed-time tick,
//!    the win dialog) are timers on a `Timeline` the host drives forward,
//!    tagged with a session generation so a reset can never be mutated by
//!    callbacks from the session it replaced.
//!
//! 3. **Deterministic**: Every random choice comes from a seeded `GameRng`;
//!    decks are dealt with a uniform Fisher–Yates shuffle.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors, timer queue
//! - `cards`: Symbols, cards, deck builder
//! - `session`: Move/time counters and best-score persistence
//! - `engine`: The match state machine and its events
//! - `rewards`: Flower collection earned by winning
//! - `celebration`: Win sound settings and confetti layout
//! - `web`: Browser bindings (feature `wasm`)

pub mod core;
pub mod cards;
pub mod session;
pub mod engine;
pub mod rewards;
pub mod celebration;

#[cfg(feature = "wasm")]
pub mod web;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, FiredTimer, GameConfig, GameRng, Generation, StoreError, Timeline, TimerId,
};

pub use crate::cards::{build_deck, Alphabet, Card, CardPosition, Flower, Symbol};

pub use crate::session::{
    best_score_label, format_clock, parse_stored_best, MemoryScoreStore, ScoreStore,
    SessionTracker, BEST_SCORE_KEY,
};

pub use crate::engine::{EnginePhase, FlipOutcome, FlipRejection, GameEvent, GameSnapshot, MatchEngine};

pub use crate::rewards::FlowerCollection;

pub use crate::celebration::{
    confetti_burst, AudioSettings, Celebration, CelebrationConfig, CelebrationCue, ConfettiConfig,
    ConfettiPiece,
};
