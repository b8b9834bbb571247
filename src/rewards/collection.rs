//! Flower collection: one new flower per won game.
//!
//! The collection starts empty for every page session and is never
//! persisted. When the win dialog opens, a uniformly random flower that has
//! not been collected yet is added; once the garden is complete, further
//! wins award nothing.

use rustc_hash::FxHashSet;

use crate::cards::{Alphabet, Flower, Symbol};
use crate::core::GameRng;
use crate::engine::GameEvent;

/// Set of flowers earned this page session.
#[derive(Clone, Debug)]
pub struct FlowerCollection {
    alphabet: Alphabet,
    collected: FxHashSet<Symbol>,
    rng: GameRng,
}

impl FlowerCollection {
    /// Create an empty collection over `alphabet`.
    #[must_use]
    pub fn new(alphabet: Alphabet, seed: u64) -> Self {
        Self {
            alphabet,
            collected: FxHashSet::default(),
            rng: GameRng::new(seed).for_context("flowers"),
        }
    }

    /// Award a new flower if the event opens the win dialog.
    pub fn observe(&mut self, event: &GameEvent) -> Option<Symbol> {
        match event {
            GameEvent::WinRevealed { .. } => self.add_new_flower(),
            _ => None,
        }
    }

    /// Add a random uncollected flower. `None` once everything is collected.
    pub fn add_new_flower(&mut self) -> Option<Symbol> {
        // Candidates in alphabet order so the draw is seed-deterministic.
        let uncollected: Vec<Symbol> = self
            .alphabet
            .symbols()
            .filter(|s| !self.collected.contains(s))
            .collect();

        let symbol = *self.rng.choose(&uncollected)?;
        self.collected.insert(symbol);
        log::info!(
            "collected {} ({}/{})",
            self.alphabet.get(symbol).map_or("?", |f| f.name.as_str()),
            self.collected.len(),
            self.alphabet.len()
        );
        Some(symbol)
    }

    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.collected.contains(&symbol)
    }

    #[must_use]
    pub fn collected_count(&self) -> usize {
        self.collected.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.alphabet.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.collected.len() == self.alphabet.len()
    }

    /// Every flower with its collected flag, in alphabet order.
    pub fn entries(&self) -> impl Iterator<Item = (&Flower, bool)> + '_ {
        self.alphabet
            .symbols()
            .zip(self.alphabet.entries())
            .map(|(symbol, flower)| (flower, self.collected.contains(&symbol)))
    }

    /// Look up a flower by symbol.
    #[must_use]
    pub fn flower(&self, symbol: Symbol) -> Option<&Flower> {
        self.alphabet.get(symbol)
    }

    /// Progress line shown under the scrapbook.
    #[must_use]
    pub fn status_message(&self) -> String {
        if self.is_complete() {
            "🎉 Congratulations! You've collected all flowers! 🎉".to_string()
        } else {
            format!(
                "You've collected {} out of {} flowers!",
                self.collected_count(),
                self.total()
            )
        }
    }

    /// Line added to the win dialog for a freshly collected flower.
    #[must_use]
    pub fn notification(flower: &Flower) -> String {
        format!("You collected a new flower: {}!", flower.name)
    }
}
