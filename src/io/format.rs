//! Route output.

use serde::Serialize;

use crate::models::{DispatchProblem, Solution};

/// A solution expressed in caller load ids, ready to serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    /// Load ids of each route, in visit order.
    pub routes: Vec<Vec<u64>>,
    /// Total cost.
    pub cost: f64,
}

impl RoutePlan {
    /// Translates `solution` to caller ids.
    pub fn new(problem: &DispatchProblem, solution: &Solution) -> Self {
        Self {
            routes: problem.load_ids(solution),
            cost: solution.cost(),
        }
    }
}

/// Renders one `[id,id,...]` line per route.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{DispatchProblem, Load, Point, Route, Solution, Vehicle};
/// use u_dispatch::io::format_routes;
///
/// let loads = vec![
///     Load::new(4, Point::new(0.0, 0.0), Point::new(1.0, 0.0)),
///     Load::new(9, Point::new(2.0, 0.0), Point::new(3.0, 0.0)),
/// ];
/// let problem = DispatchProblem::new(loads, Vehicle::new(720.0));
/// let sol = Solution::from_routes(vec![Route::from(vec![2, 1])]);
/// assert_eq!(format_routes(&problem, &sol), "[9,4]\n");
/// ```
pub fn format_routes(problem: &DispatchProblem, solution: &Solution) -> String {
    problem
        .load_ids(solution)
        .iter()
        .map(|route| {
            let ids: Vec<String> = route.iter().map(u64::to_string).collect();
            format!("[{}]\n", ids.join(","))
        })
        .collect()
}
