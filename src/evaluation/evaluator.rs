//! Cost evaluator for routes and solutions.

use crate::models::{DispatchProblem, Solution, Violation, ViolationType};

/// Computes route durations, solution costs and shift violations.
///
/// Time and distance are the same unit. A route's duration is the deadhead
/// from the depot to the first pickup, every service leg, every deadhead
/// between consecutive loads, and the drive home. A solution's cost is the
/// sum of its route durations plus one driver cost per route, so it does
/// not depend on the order of the route list.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{DispatchProblem, Load, Point, Route, Solution, Vehicle};
/// use u_dispatch::evaluation::CostEvaluator;
///
/// let loads = vec![
///     Load::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
///     Load::new(2, Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
/// ];
/// let problem = DispatchProblem::new(loads, Vehicle::new(720.0).with_driver_cost(500.0));
/// let evaluator = CostEvaluator::new(&problem);
///
/// let sol = Solution::from_routes(vec![Route::from(vec![1, 2])]);
/// assert!((evaluator.cost(&sol) - 540.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CostEvaluator<'a> {
    problem: &'a DispatchProblem,
}

impl<'a> CostEvaluator<'a> {
    /// Creates a new evaluator for the given problem.
    pub fn new(problem: &'a DispatchProblem) -> Self {
        Self { problem }
    }

    /// The problem this evaluator reads from.
    pub fn problem(&self) -> &'a DispatchProblem {
        self.problem
    }

    /// Depot-to-depot duration of a route serving `loads` in order.
    ///
    /// An empty route takes no time.
    pub fn route_duration(&self, loads: &[usize]) -> f64 {
        if loads.is_empty() {
            return 0.0;
        }
        let mut total = 0.0;
        let mut prev = 0;
        for &load in loads {
            total += self.problem.distance(prev, load) + self.problem.service(load);
            prev = load;
        }
        total + self.problem.distance(prev, 0)
    }

    /// Total cost: route durations plus one driver cost per route.
    pub fn cost(&self, solution: &Solution) -> f64 {
        let mut durations: Vec<f64> = solution
            .routes()
            .iter()
            .map(|r| self.route_duration(r.loads()))
            .collect();
        // Summed in sorted order so any permutation of routes gives the same bits.
        durations.sort_by(f64::total_cmp);
        let travel: f64 = durations.iter().sum();
        travel + solution.num_routes() as f64 * self.problem.vehicle().driver_cost()
    }

    /// Routes whose duration exceeds the vehicle's shift.
    pub fn violations(&self, solution: &Solution) -> Vec<Violation> {
        let max_duration = self.problem.vehicle().shift_duration();
        solution
            .routes()
            .iter()
            .enumerate()
            .filter_map(|(route_index, route)| {
                let duration = self.route_duration(route.loads());
                (duration > max_duration).then(|| {
                    Violation::new(ViolationType::MaxDurationExceeded {
                        route_index,
                        duration,
                        max_duration,
                    })
                })
            })
            .collect()
    }

    /// Evaluates an entire solution, returning `(cost, violations)`.
    pub fn evaluate_solution(&self, solution: &Solution) -> (f64, Vec<Violation>) {
        (self.cost(solution), self.violations(solution))
    }

    /// Recomputes and stores the cost of `solution`.
    pub fn refresh(&self, solution: &mut Solution) {
        let cost = self.cost(solution);
        solution.set_cost(cost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Load, Point, Route, Vehicle};

    const DRIVER_COST: f64 = 500.0;

    fn line_problem(shift: f64) -> DispatchProblem {
        let loads = vec![
            Load::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
            Load::new(2, Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
            Load::new(3, Point::new(0.0, 5.0), Point::new(0.0, 10.0)),
        ];
        DispatchProblem::new(loads, Vehicle::new(shift).with_driver_cost(DRIVER_COST))
    }

    #[test]
    fn test_route_duration_empty() {
        let p = line_problem(720.0);
        let eval = CostEvaluator::new(&p);
        assert_eq!(eval.route_duration(&[]), 0.0);
    }

    #[test]
    fn test_route_duration_single() {
        let p = line_problem(720.0);
        let eval = CostEvaluator::new(&p);
        // depot->(0,5) 5 + service 5 + (0,10)->depot 10
        assert!((eval.route_duration(&[3]) - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_two_load_chain_cost() {
        let p = line_problem(720.0);
        let eval = CostEvaluator::new(&p);
        let sol = Solution::from_routes(vec![Route::from(vec![1, 2])]);
        // 10 (service1) + 0 (dropoff1->pickup2) + 10 (service2) + 20 (home)
        assert!((eval.route_duration(&[1, 2]) - 40.0).abs() < 1e-10);
        assert!((eval.cost(&sol) - (40.0 + DRIVER_COST)).abs() < 1e-10);
    }

    #[test]
    fn test_direction_matters() {
        let p = line_problem(720.0);
        let eval = CostEvaluator::new(&p);
        // [2, 1]: depot->(10,0) 10 + 10 + (20,0)->(0,0) 20 + 10 + (10,0)->depot 10
        assert!((eval.route_duration(&[2, 1]) - 60.0).abs() < 1e-10);
    }

    #[test]
    fn test_cost_counts_drivers() {
        let p = line_problem(720.0);
        let eval = CostEvaluator::new(&p);
        let one = Solution::from_routes(vec![Route::from(vec![1, 2])]);
        let two = Solution::from_routes(vec![Route::from(vec![1]), Route::from(vec![2])]);
        // [1]: 0 + 10 + 10 = 20; [2]: 10 + 10 + 20 = 40
        assert!((eval.cost(&two) - (60.0 + 2.0 * DRIVER_COST)).abs() < 1e-10);
        assert!(eval.cost(&one) < eval.cost(&two));
    }

    #[test]
    fn test_cost_order_invariant() {
        let p = line_problem(720.0);
        let eval = CostEvaluator::new(&p);
        let a = Solution::from_routes(vec![Route::from(vec![1, 2]), Route::from(vec![3])]);
        let b = Solution::from_routes(vec![Route::from(vec![3]), Route::from(vec![1, 2])]);
        assert!((eval.cost(&a) - eval.cost(&b)).abs() < 1e-10);
    }

    #[test]
    fn test_cost_empty_solution() {
        let p = line_problem(720.0);
        let eval = CostEvaluator::new(&p);
        assert_eq!(eval.cost(&Solution::new()), 0.0);
    }

    #[test]
    fn test_violations_none() {
        let p = line_problem(720.0);
        let eval = CostEvaluator::new(&p);
        let sol = Solution::from_routes(vec![Route::from(vec![1, 2, 3])]);
        let (_, violations) = eval.evaluate_solution(&sol);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_violations_shift_exceeded() {
        let p = line_problem(30.0);
        let eval = CostEvaluator::new(&p);
        let sol = Solution::from_routes(vec![Route::from(vec![3]), Route::from(vec![1, 2])]);
        let violations = eval.violations(&sol);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationType::MaxDurationExceeded { route_index: 1, .. }
        ));
    }

    #[test]
    fn test_refresh() {
        let p = line_problem(720.0);
        let eval = CostEvaluator::new(&p);
        let mut sol = Solution::from_routes(vec![Route::from(vec![3])]);
        eval.refresh(&mut sol);
        assert!((sol.cost() - (20.0 + DRIVER_COST)).abs() < 1e-10);
    }
}
