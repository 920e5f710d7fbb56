//! Vehicle type with shift and cost parameters.

/// The vehicle type shared by every route of the homogeneous fleet.
///
/// The fleet is unlimited: each route uses one vehicle and pays
/// `driver_cost` once. Travel time equals travel distance.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Vehicle;
///
/// let v = Vehicle::new(720.0).with_driver_cost(500.0);
/// assert_eq!(v.shift_duration(), 720.0);
/// assert_eq!(v.driver_cost(), 500.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    shift_duration: f64,
    driver_cost: f64,
}

impl Vehicle {
    /// Creates a vehicle with the given shift limit and no driver cost.
    pub fn new(shift_duration: f64) -> Self {
        Self {
            shift_duration,
            driver_cost: 0.0,
        }
    }

    /// Sets the fixed cost paid once per route.
    pub fn with_driver_cost(mut self, cost: f64) -> Self {
        self.driver_cost = cost;
        self
    }

    /// Maximum time a route may take, depot to depot.
    pub fn shift_duration(&self) -> f64 {
        self.shift_duration
    }

    /// Fixed cost for using this vehicle (independent of distance).
    pub fn driver_cost(&self) -> f64 {
        self.driver_cost
    }
}
