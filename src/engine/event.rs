//! Engine notifications.
//!
//! The engine is a pure state machine: commands go in through
//! `MatchEngine::{start, flip, advance}`, and everything a renderer needs
//! to know comes out as `GameEvent`s in the order they happened.
//!
//! Events serialize as tagged JSON objects for the browser adapter:
//!
//! ```
//! use bloom_match::engine::GameEvent;
//!
//! let json = serde_json::to_string(&GameEvent::MovesChanged { moves: 3 }).unwrap();
//! assert_eq!(json, r#"{"type":"movesChanged","moves":3}"#);
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::CardPosition;

/// Something the presentation layer should react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum GameEvent {
    /// A fresh deck was dealt and counters were zeroed.
    GameStarted {
        generation: u64,
        card_count: usize,
        best_score: Option<u32>,
    },

    /// A card turned face-up.
    CardFlipped { position: CardPosition },

    /// The pending pair was compared.
    PairResolved {
        first: CardPosition,
        second: CardPosition,
        matched: bool,
    },

    /// A mismatched pair turned face-down after the confirmation delay.
    CardsHidden {
        first: CardPosition,
        second: CardPosition,
    },

    MovesChanged { moves: u32 },

    TimeChanged { elapsed_seconds: u32 },

    /// Every pair is matched. The clock has stopped.
    Won {
        moves: u32,
        elapsed_seconds: u32,
        is_new_best: bool,
    },

    /// A new best score was recorded.
    BestScoreChanged { best_score: u32 },

    /// The win dialog should be shown now.
    WinRevealed { moves: u32, elapsed_seconds: u32 },
}

impl GameEvent {
    /// Short name, for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::GameStarted { .. } => "game_started",
            GameEvent::CardFlipped { .. } => "card_flipped",
            GameEvent::PairResolved { .. } => "pair_resolved",
            GameEvent::CardsHidden { .. } => "cards_hidden",
            GameEvent::MovesChanged { .. } => "moves_changed",
            GameEvent::TimeChanged { .. } => "time_changed",
            GameEvent::Won { .. } => "won",
            GameEvent::BestScoreChanged { .. } => "best_score_changed",
            GameEvent::WinRevealed { .. } => "win_revealed",
        }
    }
}
