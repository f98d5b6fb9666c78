//! Synthetic test signals

pub mod generator;

pub use generator::{CosineTone, generate_cosine};
