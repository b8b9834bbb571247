//! Engine phases, flip outcomes and renderer snapshots.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Match engine state.
///
/// `Resolved` is transient inside `MatchEngine::flip`: a matched pair goes
/// straight back to `Idle` (or `Won`), a mismatched pair stays in
/// `Evaluating` until the flip-back timer fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnginePhase {
    /// No unmatched card is face-up.
    #[default]
    Idle,
    /// Exactly one unmatched card is face-up.
    OnePicked,
    /// Two unmatched cards are face-up and input is locked.
    Evaluating,
    /// Every pair is matched.
    Won,
}

impl EnginePhase {
    /// Is the session finished?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == EnginePhase::Won
    }
}

/// Why a flip request was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlipRejection {
    /// A mismatched pair is being shown.
    Locked,
    /// The card is already face-up (including the card picked first).
    AlreadyFaceUp,
    /// The card was matched earlier.
    AlreadyMatched,
    /// No card at that position (or no deck dealt yet).
    UnknownPosition,
    /// The session is won; only `start`/`reset` do anything now.
    GameOver,
}

/// Result of `MatchEngine::flip`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlipOutcome {
    /// Nothing changed.
    Ignored(FlipRejection),
    /// First card of a pair turned face-up.
    Revealed,
    /// Second card matched the first. `won` is set on the final pair.
    Matched { won: bool },
    /// Second card differs; both flip back after the confirmation delay.
    Mismatched,
}

impl FlipOutcome {
    /// Did the flip change any state?
    #[must_use]
    pub fn is_accepted(self) -> bool {
        !matches!(self, FlipOutcome::Ignored(_))
    }
}

/// Point-in-time view of a session for renderers.
///
/// `cards` is a persistent vector, so taking a snapshot every frame is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub generation: u64,
    pub phase: EnginePhase,
    pub locked: bool,
    pub moves: u32,
    pub matches_found: u32,
    pub pair_count: u32,
    pub elapsed_seconds: u32,
    pub best_score: Option<u32>,
    pub cards: Vector<Card>,
}

impl GameSnapshot {
    /// Cards currently face-up and unmatched.
    pub fn pending_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.is_pending())
    }
}
