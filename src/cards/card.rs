//! Card instances - per-session card state.
//!
//! A `Card` is created at deck-build time and only ever mutated by the
//! match engine. Matched cards stay face-up for the rest of the session.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Grid position of a card (0-based, row-major).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardPosition(pub u8);

impl CardPosition {
    /// Create a new position.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Index into the deck.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A single playable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub position: CardPosition,
    pub symbol: Symbol,
    pub face_up: bool,
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(position: CardPosition, symbol: Symbol) -> Self {
        Self {
            position,
            symbol,
            face_up: false,
            matched: false,
        }
    }

    /// Is this card face-up and waiting to be paired?
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.face_up && !self.matched
    }

    /// Does this card share a symbol with `other`?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.position != other.position && self.symbol == other.symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_face_down() {
        let card = Card::new(CardPosition::new(3), Symbol::new(1));
        assert!(!card.face_up);
        assert!(!card.matched);
        assert!(!card.is_pending());
        assert_eq!(card.position.index(), 3);
    }

    #[test]
    fn test_pending() {
        let mut card = Card::new(CardPosition::new(0), Symbol::new(0));
        card.face_up = true;
        assert!(card.is_pending());

        card.matched = true;
        assert!(!card.is_pending());
    }

    #[test]
    fn test_pairs_with() {
        let a = Card::new(CardPosition::new(0), Symbol::new(2));
        let b = Card::new(CardPosition::new(5), Symbol::new(2));
        let c = Card::new(CardPosition::new(6), Symbol::new(3));

        assert!(a.pairs_with(&b));
        assert!(!a.pairs_with(&c));
        assert!(!a.pairs_with(&a));
    }

    #[test]
    fn test_card_serde_field_names() {
        let card = Card::new(CardPosition::new(1), Symbol::new(4));
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"faceUp\":false"));
        assert!(json.contains("\"matched\":false"));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(format!("{}", CardPosition::new(12)), "Card(12)");
    }
}
