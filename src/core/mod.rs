//! Core building blocks: RNG, configuration, errors and the timer queue.
//!
//! Nothing in here knows the rules of the game; the engine, session and
//! reward modules are built on top.

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;

pub use clock::{FiredTimer, Generation, Timeline, TimerId};
pub use config::GameConfig;
pub use error::{ConfigError, StoreError};
pub use rng::GameRng;
