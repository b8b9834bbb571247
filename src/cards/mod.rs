//! Card system: symbols, card instances and the deck builder.
//!
//! - `Symbol` / `Alphabet`: what is printed on a card face
//! - `Card`: per-session visibility state of one grid slot
//! - `build_deck`: shuffled, paired sequence of cards

pub mod card;
pub mod deck;
pub mod symbol;

pub use card::{Card, CardPosition};
pub use deck::build_deck;
pub use symbol::{Alphabet, Flower, Symbol};
