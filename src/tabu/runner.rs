//! Tabu search execution engine.
//!
//! # Algorithm
//!
//! 1. Build an initial solution by randomized greedy insertion; it is the
//!    first best
//! 2. At each iteration:
//!    a. Generate the route-swap neighborhood of the current solution
//!    b. Select the cheapest neighbor whose signature is not tabu (first
//!       generated wins ties); if all are tabu, the cheapest tabu neighbor
//!    c. Replace the best solution if the selection is strictly cheaper
//!    d. Record the selection's signature in the tabu memory
//!    e. Continue from the selection, even if it is worse
//! 3. Stop after the iteration budget
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::config::SearchConfig;
use super::memory::TabuMemory;
use crate::constructive::roulette_insertion;
use crate::evaluation::CostEvaluator;
use crate::models::{DispatchProblem, Solution};
use crate::neighborhood::SwapRoutes;

/// Seed used when the config does not name one.
pub const DEFAULT_SEED: u64 = 42;

/// Result of a tabu search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best solution found.
    pub best: Solution,
    /// Cost of the best solution.
    pub best_cost: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best solution was found (None: the initial solution).
    pub best_iteration: Option<usize>,
    /// Best cost after each iteration.
    pub cost_history: Vec<f64>,
    /// Iterations in which every neighbor was tabu.
    pub tabu_fallbacks: usize,
}

/// Tabu search over a dispatch problem.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_dispatch::models::{DispatchProblem, Load, Point};
/// use u_dispatch::tabu::{SearchConfig, TabuSearch};
///
/// let config = SearchConfig::default().with_max_iterations(20);
/// let loads = vec![
///     Load::new(1, Point::new(1.0, 0.0), Point::new(2.0, 0.0)),
///     Load::new(2, Point::new(0.0, 3.0), Point::new(0.0, 4.0)),
/// ];
/// let problem = DispatchProblem::new(loads, config.vehicle());
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let result = TabuSearch::new(&problem, &config).run(&mut rng);
/// assert!(result.best.is_complete(2));
/// assert_eq!(result.iterations, 20);
/// ```
#[derive(Debug, Clone)]
pub struct TabuSearch<'a> {
    problem: DispatchProblem,
    config: &'a SearchConfig,
}

impl<'a> TabuSearch<'a> {
    /// Creates a search over the loads of `problem` with the given parameters.
    ///
    /// The fleet is taken from `config`: its `max_shift_duration` and
    /// `driver_cost` replace the vehicle `problem` was built with.
    pub fn new(problem: &DispatchProblem, config: &'a SearchConfig) -> Self {
        Self {
            problem: problem.clone().with_vehicle(config.vehicle()),
            config,
        }
    }

    /// The problem as searched, with the config's vehicle.
    pub fn problem(&self) -> &DispatchProblem {
        &self.problem
    }

    /// Runs the search with an RNG seeded from the config (or [`DEFAULT_SEED`]).
    pub fn solve(&self) -> SearchResult {
        let mut rng = StdRng::seed_from_u64(self.config.seed.unwrap_or(DEFAULT_SEED));
        self.run(&mut rng)
    }

    /// Runs the search drawing all randomness from `rng`.
    pub fn run<R: Rng>(&self, rng: &mut R) -> SearchResult {
        let evaluator = CostEvaluator::new(&self.problem);
        let generator = SwapRoutes::new(self.config.neighborhood_size);
        let mut memory = TabuMemory::new(self.config.tabu_capacity, self.config.tabu_tenure);

        let mut current = roulette_insertion(&self.problem, rng);
        let mut best = current.clone();
        let mut best_iteration = None;
        let mut tabu_fallbacks = 0;
        let mut cost_history = Vec::with_capacity(self.config.max_iterations);

        info!(
            loads = self.problem.num_loads(),
            routes = current.num_routes(),
            cost = current.cost(),
            "initial solution built"
        );

        for iteration in 0..self.config.max_iterations {
            let mut neighbors = generator.generate(&current, &evaluator, rng);

            let selected = match best_admissible(&neighbors, &memory) {
                Some(idx) => Some(idx),
                None => {
                    tabu_fallbacks += 1;
                    debug!(iteration, "all neighbors tabu; taking the cheapest");
                    cheapest(&neighbors)
                }
            };

            if let Some(idx) = selected {
                let chosen = neighbors.swap_remove(idx);

                if chosen.cost() < best.cost() {
                    best = chosen.clone();
                    best_iteration = Some(iteration);
                }

                memory.record(chosen.signature());
                current = chosen;
            }

            cost_history.push(best.cost());

            debug!(
                iteration,
                current = current.cost(),
                best = best.cost(),
                tabu = memory.len(),
                "iteration done"
            );
        }

        info!(
            best_cost = best.cost(),
            routes = best.num_routes(),
            tabu_fallbacks,
            "search finished"
        );

        SearchResult {
            best_cost: best.cost(),
            best,
            iterations: cost_history.len(),
            best_iteration,
            cost_history,
            tabu_fallbacks,
        }
    }
}

/// Index of the cheapest non-tabu neighbor; earliest wins ties.
fn best_admissible(neighbors: &[Solution], memory: &TabuMemory) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, neighbor) in neighbors.iter().enumerate() {
        if memory.is_tabu(&neighbor.signature()) {
            continue;
        }
        if best.map_or(true, |(_, cost)| neighbor.cost() < cost) {
            best = Some((idx, neighbor.cost()));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Index of the cheapest neighbor regardless of tabu status; earliest wins ties.
fn cheapest(neighbors: &[Solution]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, neighbor) in neighbors.iter().enumerate() {
        if best.map_or(true, |(_, cost)| neighbor.cost() < cost) {
            best = Some((idx, neighbor.cost()));
        }
    }
    best.map(|(idx, _)| idx)
}
