//! Symbols and the alphabet they are drawn from.
//!
//! A `Symbol` is an opaque index into an `Alphabet`. The engine only ever
//! compares symbols for equality; the alphabet supplies names and glyphs
//! for display and for the flower collection.

use serde::{Deserialize, Serialize};

/// Opaque symbol identifier: the index of a flower in its alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub u8);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Index into the alphabet.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// A displayable symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flower {
    /// Stable key, unique within an alphabet.
    pub key: String,
    /// Human-readable name.
    pub name: String,
    /// Glyph shown on the card face.
    pub glyph: String,
}

impl Flower {
    pub fn new(key: impl Into<String>, name: impl Into<String>, glyph: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            glyph: glyph.into(),
        }
    }
}

/// Ordered set of symbols a deck is built from.
///
/// Each entry appears exactly twice in a dealt deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alphabet {
    flowers: Vec<Flower>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::flowers()
    }
}

impl Alphabet {
    /// Largest supported alphabet. Two cards per symbol must fit a `u8` position.
    pub const MAX_SYMBOLS: usize = 128;

    /// Create an alphabet from explicit entries.
    #[must_use]
    pub fn new(flowers: Vec<Flower>) -> Self {
        Self { flowers }
    }

    /// The eight-flower garden.
    #[must_use]
    pub fn flowers() -> Self {
        Self::new(vec![
            Flower::new("flower1", "Tulip", "🌷"),
            Flower::new("flower2", "Hyacinth", "🪻"),
            Flower::new("flower3", "Hibiscus", "🌺"),
            Flower::new("flower4", "Rose", "🌹"),
            Flower::new("flower5", "Cherry Blossom", "🌸"),
            Flower::new("flower6", "Blossom", "🌼"),
            Flower::new("flower7", "Sunflower", "🌻"),
            Flower::new("flower8", "Lotus", "🪷"),
        ])
    }

    /// Number of symbols (and therefore pairs per deck).
    #[must_use]
    pub fn len(&self) -> usize {
        self.flowers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }

    /// Iterate over every symbol in alphabet order.
    ///
    /// Only the first 256 entries are addressable by a `Symbol`; anything
    /// beyond is never yielded.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..=u8::MAX).take(self.flowers.len()).map(Symbol::new)
    }

    /// Look up the flower for a symbol.
    #[must_use]
    pub fn get(&self, symbol: Symbol) -> Option<&Flower> {
        self.flowers.get(symbol.index())
    }

    /// All entries in order.
    #[must_use]
    pub fn entries(&self) -> &[Flower] {
        &self.flowers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol() {
        let s = Symbol::new(5);
        assert_eq!(s.raw(), 5);
        assert_eq!(s.index(), 5);
        assert_eq!(format!("{}", s), "Symbol(5)");
    }

    #[test]
    fn test_flower_alphabet() {
        let alphabet = Alphabet::flowers();
        assert_eq!(alphabet.len(), 8);
        assert_eq!(alphabet.get(Symbol::new(0)).unwrap().name, "Tulip");
        assert_eq!(alphabet.get(Symbol::new(7)).unwrap().glyph, "🪷");
        assert!(alphabet.get(Symbol::new(8)).is_none());
    }

    #[test]
    fn test_symbols_in_order() {
        let alphabet = Alphabet::flowers();
        let symbols: Vec<_> = alphabet.symbols().collect();
        assert_eq!(symbols.len(), 8);
        assert_eq!(symbols[0], Symbol::new(0));
        assert_eq!(symbols[7], Symbol::new(7));
    }

    #[test]
    fn test_symbols_never_wrap() {
        let alphabet = Alphabet::new(
            (0..300)
                .map(|i| Flower::new(format!("f{i}"), format!("Flower {i}"), "*"))
                .collect(),
        );
        let symbols: Vec<_> = alphabet.symbols().collect();

        assert_eq!(symbols.len(), 256);
        assert_eq!(symbols[255], Symbol::new(255));
        assert!(symbols.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_alphabet_serde_is_a_plain_list() {
        let alphabet = Alphabet::new(vec![Flower::new("a", "Aster", "*")]);
        let json = serde_json::to_string(&alphabet).unwrap();
        assert!(json.starts_with('['));

        let back: Alphabet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, alphabet);
    }
}
