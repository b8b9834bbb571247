//! Game configuration.
//!
//! Hosts configure the engine at construction time. Every field has a
//! default matching the garden page, so an empty JSON object is a valid
//! configuration:
//!
//! ```
//! use bloom_match::core::GameConfig;
//!
//! let config = GameConfig::from_json("{}").unwrap();
//! assert_eq!(config, GameConfig::default());
//! assert_eq!(config.mismatch_delay_ms, 1000);
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::Alphabet;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Symbols dealt in pairs.
    pub alphabet: Alphabet,

    /// How long a mismatched pair stays visible before flipping back.
    pub mismatch_delay_ms: u64,

    /// Period of the elapsed-time counter.
    pub tick_interval_ms: u64,

    /// Delay between the final match and `WinRevealed`.
    pub win_reveal_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::flowers(),
            mismatch_delay_ms: 1000,
            tick_interval_ms: 1000,
            win_reveal_delay_ms: 500,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the alphabet.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Set the mismatch confirmation delay.
    #[must_use]
    pub fn with_mismatch_delay_ms(mut self, ms: u64) -> Self {
        self.mismatch_delay_ms = ms;
        self
    }

    /// Set the elapsed-time tick period.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Set the win dialog delay.
    #[must_use]
    pub fn with_win_reveal_delay_ms(mut self, ms: u64) -> Self {
        self.win_reveal_delay_ms = ms;
        self
    }

    /// Number of pairs in a dealt deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.alphabet.len()
    }

    /// Number of cards in a dealt deck.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.alphabet.len() * 2
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if self.alphabet.len() > Alphabet::MAX_SYMBOLS {
            return Err(ConfigError::TooManySymbols {
                count: self.alphabet.len(),
                max: Alphabet::MAX_SYMBOLS,
            });
        }

        let mut seen = FxHashSet::default();
        for flower in self.alphabet.entries() {
            if !seen.insert(flower.key.as_str()) {
                return Err(ConfigError::DuplicateSymbol(flower.key.clone()));
            }
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}
