//! Route-swap neighborhood.
//!
//! # Move
//!
//! Clone the solution and exchange the positions of two distinct routes,
//! chosen uniformly at random, within the route list.
//!
//! Route cost does not depend on a route's position in the list, so every
//! neighbor costs exactly what its source costs. What changes is the
//! solution [`Signature`](crate::models::Signature): the move walks the
//! search through distinct tabu keys without changing the objective.

use rand::Rng;

use crate::evaluation::CostEvaluator;
use crate::models::Solution;

/// Generates a fixed number of route-swap neighbors per call.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_dispatch::models::{DispatchProblem, Load, Point, Route, Solution, Vehicle};
/// use u_dispatch::evaluation::CostEvaluator;
/// use u_dispatch::neighborhood::SwapRoutes;
///
/// let loads = vec![
///     Load::new(1, Point::new(1.0, 0.0), Point::new(2.0, 0.0)),
///     Load::new(2, Point::new(0.0, 3.0), Point::new(0.0, 4.0)),
/// ];
/// let problem = DispatchProblem::new(loads, Vehicle::new(720.0).with_driver_cost(500.0));
/// let evaluator = CostEvaluator::new(&problem);
///
/// let mut sol = Solution::from_routes(vec![Route::from(vec![1]), Route::from(vec![2])]);
/// evaluator.refresh(&mut sol);
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let neighbors = SwapRoutes::new(5).generate(&sol, &evaluator, &mut rng);
/// assert_eq!(neighbors.len(), 5);
/// assert!(neighbors.iter().all(|n| n.cost() == sol.cost()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapRoutes {
    size: usize,
}

impl SwapRoutes {
    /// Creates a generator producing `size` neighbors per call.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Number of neighbors produced per call.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Produces exactly `size()` neighbors of `solution`, in generation order.
    ///
    /// With fewer than two routes every neighbor is an unchanged clone.
    pub fn generate<R: Rng>(
        &self,
        solution: &Solution,
        evaluator: &CostEvaluator<'_>,
        rng: &mut R,
    ) -> Vec<Solution> {
        (0..self.size)
            .map(|_| {
                let mut neighbor = swap_random_routes(solution, rng);
                evaluator.refresh(&mut neighbor);
                neighbor
            })
            .collect()
    }
}

/// Clones `solution` and swaps two distinct, uniformly chosen routes.
pub fn swap_random_routes<R: Rng>(solution: &Solution, rng: &mut R) -> Solution {
    let mut neighbor = solution.clone();
    let n = neighbor.num_routes();
    if n < 2 {
        return neighbor;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    neighbor.routes_mut().swap(i, j);
    neighbor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DispatchProblem, Load, Point, Route, Vehicle};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (DispatchProblem, Solution) {
        let loads = vec![
            Load::new(1, Point::new(1.0, 0.0), Point::new(2.0, 0.0)),
            Load::new(2, Point::new(0.0, 3.0), Point::new(0.0, 4.0)),
            Load::new(3, Point::new(5.0, 5.0), Point::new(6.0, 6.0)),
            Load::new(4, Point::new(-2.0, 1.0), Point::new(-3.0, 1.0)),
        ];
        let problem = DispatchProblem::new(loads, Vehicle::new(720.0).with_driver_cost(500.0));
        let sol = Solution::from_routes(vec![
            Route::from(vec![1, 2]),
            Route::from(vec![3]),
            Route::from(vec![4]),
        ]);
        (problem, sol)
    }

    #[test]
    fn test_exact_size() {
        let (p, sol) = setup();
        let eval = CostEvaluator::new(&p);
        let mut rng = StdRng::seed_from_u64(42);
        for size in [0, 1, 10] {
            assert_eq!(SwapRoutes::new(size).generate(&sol, &eval, &mut rng).len(), size);
        }
    }

    #[test]
    fn test_cost_unchanged() {
        let (p, mut sol) = setup();
        let eval = CostEvaluator::new(&p);
        eval.refresh(&mut sol);
        let mut rng = StdRng::seed_from_u64(3);
        for n in SwapRoutes::new(20).generate(&sol, &eval, &mut rng) {
            assert!((n.cost() - sol.cost()).abs() < 1e-10);
        }
    }

    #[test]
    fn test_swap_changes_signature() {
        let (_, sol) = setup();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let n = swap_random_routes(&sol, &mut rng);
            assert_ne!(n.signature(), sol.signature());
            assert_eq!(n.served_loads(), sol.served_loads());
            // Exactly two positions differ
            let moved = n
                .routes()
                .iter()
                .zip(sol.routes())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(moved, 2);
        }
    }

    #[test]
    fn test_single_route_unchanged() {
        let sol = Solution::from_routes(vec![Route::from(vec![1, 2])]);
        let mut rng = StdRng::seed_from_u64(42);
        let n = swap_random_routes(&sol, &mut rng);
        assert_eq!(n, sol);
    }

    #[test]
    fn test_source_untouched() {
        let (p, sol) = setup();
        let before = sol.clone();
        let eval = CostEvaluator::new(&p);
        let mut rng = StdRng::seed_from_u64(42);
        let _ = SwapRoutes::new(5).generate(&sol, &eval, &mut rng);
        assert_eq!(sol, before);
    }
}
