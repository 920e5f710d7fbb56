//! Solution, signature and violation types.

use super::Route;

/// A type of constraint violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// Route duration exceeds the vehicle's shift.
    MaxDurationExceeded {
        /// Route index.
        route_index: usize,
        /// Actual duration.
        duration: f64,
        /// Maximum allowed duration.
        max_duration: f64,
    },
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Canonical encoding of a solution's ordered route structure.
///
/// Each route contributes its length followed by its load indices, so two
/// route lists share a signature exactly when they are structurally equal.
/// Used as the key of the tabu memory.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Route, Solution};
///
/// let a = Solution::from_routes(vec![Route::from(vec![1, 2]), Route::from(vec![3])]);
/// let b = Solution::from_routes(vec![Route::from(vec![3]), Route::from(vec![1, 2])]);
/// assert_ne!(a.signature(), b.signature());
/// assert_eq!(a.signature(), a.clone().signature());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(Vec<usize>);

impl Signature {
    /// Encodes the given route list.
    pub fn of(routes: &[Route]) -> Self {
        let len = routes.len() + routes.iter().map(Route::len).sum::<usize>();
        let mut code = Vec::with_capacity(len);
        for route in routes {
            code.push(route.len());
            code.extend_from_slice(route.loads());
        }
        Self(code)
    }
}

/// A complete solution: an ordered list of routes and its cached cost.
///
/// The cost is whatever was last set by the caller; the builders and
/// neighborhood operators refresh it through the evaluator whenever the
/// route structure changes.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Solution, Route};
///
/// let mut sol = Solution::new();
/// sol.add_route(Route::from(vec![1, 2]));
/// assert_eq!(sol.num_routes(), 1);
/// assert_eq!(sol.num_served(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    routes: Vec<Route>,
    cost: f64,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            cost: 0.0,
        }
    }

    /// Creates a solution from routes, with cost left at zero.
    pub fn from_routes(routes: Vec<Route>) -> Self {
        Self { routes, cost: 0.0 }
    }

    /// Adds a route to this solution.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Returns the routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns a mutable reference to the routes.
    pub fn routes_mut(&mut self) -> &mut Vec<Route> {
        &mut self.routes
    }

    /// Returns the number of routes (drivers used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of loads served (across all routes).
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Returns the cached total cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Sets the cached total cost.
    pub fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
    }

    /// All served load indices, sorted.
    pub fn served_loads(&self) -> Vec<usize> {
        let mut all: Vec<usize> = self
            .routes
            .iter()
            .flat_map(|r| r.loads().iter().copied())
            .collect();
        all.sort_unstable();
        all
    }

    /// Returns `true` if every load in `1..=num_loads` is served exactly once.
    pub fn is_complete(&self, num_loads: usize) -> bool {
        self.served_loads().into_iter().eq(1..=num_loads)
    }

    /// Structural signature of the route list.
    pub fn signature(&self) -> Signature {
        Signature::of(&self.routes)
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::new()
    }
}
