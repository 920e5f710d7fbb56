//! # u-dispatch
//!
//! Single-depot pickup-and-delivery routing: an unlimited fleet of identical
//! shift-limited vehicles serves a set of loads, minimizing travel distance
//! plus a fixed cost per driver.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Load, Vehicle, Route, Solution, DispatchProblem)
//! - [`distance`] — Asymmetric deadhead matrix and service distances
//! - [`evaluation`] — Solution cost and shift feasibility
//! - [`constructive`] — Randomized greedy insertion
//! - [`neighborhood`] — Neighborhood generators (route swap)
//! - [`tabu`] — Tabu memory and the search loop
//! - [`io`] — Load file reader and route output

pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod io;
pub mod models;
pub mod neighborhood;
pub mod tabu;
