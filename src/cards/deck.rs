//! Deck builder.
//!
//! Duplicates the alphabet and applies a uniform shuffle, so every symbol
//! appears exactly twice and every arrangement is equally likely.

use super::card::{Card, CardPosition};
use super::symbol::{Alphabet, Symbol};
use crate::core::{ConfigError, GameRng};

/// Build a shuffled deck of `2 * alphabet.len()` face-down cards.
///
/// Positions are assigned after shuffling, so `deck[i].position == i`.
/// Alphabets larger than `Alphabet::MAX_SYMBOLS` are rejected.
pub fn build_deck(alphabet: &Alphabet, rng: &mut GameRng) -> Result<Vec<Card>, ConfigError> {
    if alphabet.len() > Alphabet::MAX_SYMBOLS {
        return Err(ConfigError::TooManySymbols {
            count: alphabet.len(),
            max: Alphabet::MAX_SYMBOLS,
        });
    }

    let mut symbols: Vec<Symbol> = alphabet.symbols().chain(alphabet.symbols()).collect();
    rng.shuffle(&mut symbols);

    Ok((0..=u8::MAX)
        .zip(symbols)
        .map(|(i, symbol)| Card::new(CardPosition::new(i), symbol))
        .collect())
}
