//! Neighborhood generators for the tabu search.
//!
//! - [`SwapRoutes`] — Exchange the positions of two routes in the route list

mod swap_routes;

pub use swap_routes::{swap_random_routes, SwapRoutes};
