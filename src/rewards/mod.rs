//! Rewards earned by winning games.

pub mod collection;

pub use collection::FlowerCollection;
