//! Playable game instances built on the engine.

pub mod literature;

pub use literature::{GameSnapshot, LiteratureGame, LiteratureGameBuilder};
