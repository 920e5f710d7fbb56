//! Randomized greedy insertion.
//!
//! Builds routes one at a time: starting from the depot, the next load is
//! drawn by roulette wheel over the remaining loads, each weighted by the
//! inverse deadhead distance from the route's current position to its
//! pickup. Loads that could not be served and still reach the depot within
//! the shift get no weight. When nothing can be drawn the route is closed
//! and a new one starts at the depot.
//!
//! # Complexity
//!
//! O(n²) where n = number of loads.

use rand::Rng;
use tracing::{debug, warn};

use crate::evaluation::CostEvaluator;
use crate::models::{DispatchProblem, Route, Solution};

/// Constructs a complete solution by randomized greedy insertion.
///
/// Feasibility is checked one load ahead: a candidate is drawable when the
/// route's elapsed time, the deadhead to its pickup, its service leg and the
/// drive back to the depot fit within the shift. Elapsed time is tracked
/// incrementally as loads are appended.
///
/// A load whose own depot round trip exceeds the shift can never be drawn.
/// When a fresh route finds nothing drawable, the remaining load nearest to
/// the depot gets a route of its own. Such routes overrun the shift and are
/// reported by [`CostEvaluator::violations`].
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_dispatch::models::{DispatchProblem, Load, Point, Vehicle};
/// use u_dispatch::constructive::roulette_insertion;
///
/// let loads = vec![
///     Load::new(1, Point::new(1.0, 0.0), Point::new(2.0, 0.0)),
///     Load::new(2, Point::new(3.0, 0.0), Point::new(4.0, 0.0)),
///     Load::new(3, Point::new(0.0, 5.0), Point::new(0.0, 6.0)),
/// ];
/// let problem = DispatchProblem::new(loads, Vehicle::new(720.0).with_driver_cost(500.0));
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let solution = roulette_insertion(&problem, &mut rng);
/// assert!(solution.is_complete(3));
/// assert_eq!(solution.num_routes(), 1);
/// ```
pub fn roulette_insertion<R: Rng>(problem: &DispatchProblem, rng: &mut R) -> Solution {
    let mut remaining: Vec<usize> = (1..=problem.num_loads()).collect();
    let mut solution = Solution::new();

    while !remaining.is_empty() {
        let mut route = Route::new();
        let mut current = 0;
        let mut route_time = 0.0;

        while let Some(pos) = select_next(problem, current, route_time, &remaining, rng) {
            let next = remaining.remove(pos);
            route_time += problem.distance(current, next) + problem.service(next);
            route.push(next);
            current = next;
        }

        if route.is_empty() {
            let Some(load) = problem.distances().nearest_neighbor(0, &remaining) else {
                break;
            };
            warn!(
                load_id = problem.load(load).id(),
                round_trip = problem.round_trip(load),
                shift = problem.vehicle().shift_duration(),
                "load cannot be served within one shift; assigning a dedicated route"
            );
            remaining.retain(|&l| l != load);
            route.push(load);
        }

        debug!(loads = route.len(), route_time, "route closed");
        solution.add_route(route);
    }

    CostEvaluator::new(problem).refresh(&mut solution);
    solution
}

/// Draws the position in `remaining` of the next load, or `None` when no
/// candidate fits the shift.
fn select_next<R: Rng>(
    problem: &DispatchProblem,
    current: usize,
    route_time: f64,
    remaining: &[usize],
    rng: &mut R,
) -> Option<usize> {
    let shift = problem.vehicle().shift_duration();
    let mut weights = Vec::with_capacity(remaining.len());
    let mut sum = 0.0;

    for (pos, &load) in remaining.iter().enumerate() {
        let deadhead = problem.distance(current, load);
        let finish = route_time + deadhead + problem.service(load) + problem.distance(load, 0);
        if finish > shift {
            weights.push(0.0);
            continue;
        }
        // A pickup exactly where the vehicle stands has unbounded weight.
        if deadhead <= 0.0 {
            return Some(pos);
        }
        let w = 1.0 / deadhead;
        weights.push(w);
        sum += w;
    }

    if sum <= 0.0 {
        return None;
    }

    let mut value = rng.random::<f64>() * sum;
    let mut last = None;
    for (pos, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        value -= w;
        if value <= 0.0 {
            return Some(pos);
        }
        last = Some(pos);
    }
    // Rounding left a sliver of the wheel unclaimed.
    last
}
