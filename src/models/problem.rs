//! Dispatch problem context.

use super::{Load, Solution, Vehicle};
use crate::distance::DistanceMatrix;

/// An immutable problem instance: the loads, the distances between them and
/// the vehicle type of the fleet.
///
/// Built once and shared by reference with every solver component. Load
/// `i` in the input is addressed as index `i + 1`; index 0 is the depot.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{DispatchProblem, Load, Point, Vehicle};
///
/// let loads = vec![
///     Load::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
///     Load::new(2, Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
/// ];
/// let problem = DispatchProblem::new(loads, Vehicle::new(720.0));
/// assert_eq!(problem.num_loads(), 2);
/// assert!((problem.distance(1, 2) - 0.0).abs() < 1e-10);
/// assert!((problem.service(2) - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DispatchProblem {
    loads: Vec<Load>,
    distances: DistanceMatrix,
    vehicle: Vehicle,
}

impl DispatchProblem {
    /// Precomputes distances for the given loads.
    pub fn new(loads: Vec<Load>, vehicle: Vehicle) -> Self {
        let distances = DistanceMatrix::from_loads(&loads);
        Self {
            loads,
            distances,
            vehicle,
        }
    }

    /// Replaces the vehicle type; distances are kept.
    pub fn with_vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicle = vehicle;
        self
    }

    /// Loads in input order.
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Number of loads (excluding depot).
    pub fn num_loads(&self) -> usize {
        self.loads.len()
    }

    /// Returns the load at problem index `index` (1..=N).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 0 or greater than `num_loads()`.
    pub fn load(&self, index: usize) -> &Load {
        &self.loads[index - 1]
    }

    /// The precomputed distance model.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Deadhead distance from the end of `from` to the start of `to`.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// Pickup-to-dropoff distance of load `index`.
    pub fn service(&self, index: usize) -> f64 {
        self.distances.service(index)
    }

    /// The fleet's vehicle type.
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Time of the shortest possible route serving only `index`.
    pub fn round_trip(&self, index: usize) -> f64 {
        self.distance(0, index) + self.service(index) + self.distance(index, 0)
    }

    /// Caller ids of every route of `solution`, in route order.
    pub fn load_ids(&self, solution: &Solution) -> Vec<Vec<u64>> {
        solution
            .routes()
            .iter()
            .map(|r| r.loads().iter().map(|&i| self.load(i).id()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Point, Route};

    fn sample() -> DispatchProblem {
        let loads = vec![
            Load::new(10, Point::new(3.0, 4.0), Point::new(3.0, 8.0)),
            Load::new(20, Point::new(0.0, 8.0), Point::new(0.0, 2.0)),
        ];
        DispatchProblem::new(loads, Vehicle::new(100.0).with_driver_cost(5.0))
    }

    #[test]
    fn test_problem_accessors() {
        let p = sample();
        assert_eq!(p.num_loads(), 2);
        assert_eq!(p.load(1).id(), 10);
        assert_eq!(p.load(2).id(), 20);
        assert_eq!(p.vehicle().driver_cost(), 5.0);
        assert!((p.distance(0, 1) - 5.0).abs() < 1e-10);
        assert!((p.service(1) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_with_vehicle() {
        let p = sample().with_vehicle(Vehicle::new(30.0).with_driver_cost(7.0));
        assert_eq!(p.vehicle().shift_duration(), 30.0);
        assert_eq!(p.vehicle().driver_cost(), 7.0);
        assert!((p.distance(0, 1) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_round_trip() {
        let p = sample();
        // depot->(3,4) = 5, service 4, (3,8)->depot = sqrt(73)
        let expected = 5.0 + 4.0 + 73f64.sqrt();
        assert!((p.round_trip(1) - expected).abs() < 1e-10);
    }

    #[test]
    fn test_load_ids() {
        let p = sample();
        let sol = Solution::from_routes(vec![Route::from(vec![2]), Route::from(vec![1])]);
        assert_eq!(p.load_ids(&sol), vec![vec![20], vec![10]]);
    }
}
