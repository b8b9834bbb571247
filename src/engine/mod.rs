//! Match engine: the flip / match / mismatch / lock state machine.
//!
//! ## States
//!
//! - `Idle`: no unmatched card face-up
//! - `OnePicked`: one unmatched card face-up
//! - `Evaluating`: two unmatched cards face-up, input locked until the
//!   mismatch flip-back fires
//! - `Won`: terminal, clock stopped
//!
//! Rendering is a subscriber: the engine reports every change as a
//! `GameEvent` and never touches a display.

mod machine;
pub mod event;
pub mod state;

pub use event::GameEvent;
pub use machine::MatchEngine;
pub use state::{EnginePhase, FlipOutcome, FlipRejection, GameSnapshot};
