//! Constructive heuristics for building initial solutions.
//!
//! - [`roulette_insertion`] — Randomized greedy insertion with inverse-distance roulette, O(n²)

mod roulette;

pub use roulette::roulette_insertion;
