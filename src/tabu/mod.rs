//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that keeps a short-term memory
//! of recently visited solution signatures and refuses to return to them,
//! preventing cycling and pushing the search into new parts of the space.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod runner;

pub use config::SearchConfig;
pub use memory::TabuMemory;
pub use runner::{SearchResult, TabuSearch, DEFAULT_SEED};
