//! Domain model types for the dispatch problem.
//!
//! Provides the core abstractions: loads with pickup and dropoff points,
//! the shift-limited vehicle type, routes as ordered sequences of loads,
//! solutions with their tabu signature, and the immutable problem context
//! that ties everything together.

mod load;
mod problem;
mod route;
mod solution;
mod vehicle;

pub use load::{Load, Point};
pub use problem::DispatchProblem;
pub use route::Route;
pub use solution::{Signature, Solution, Violation, ViolationType};
pub use vehicle::Vehicle;
