//! Tabu search configuration.

use anyhow::{ensure, Result};
use serde::Deserialize;

use crate::models::Vehicle;

/// Problem and search parameters.
///
/// Every field has a default, so a JSON config file may set any subset.
///
/// # Examples
///
/// ```
/// use u_dispatch::tabu::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_max_iterations(1000)
///     .with_neighborhood_size(20)
///     .with_seed(7);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.neighborhood_size, 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Longest a route may take, depot to depot.
    pub max_shift_duration: f64,
    /// Fixed cost paid once per route.
    pub driver_cost: f64,
    /// Maximum number of signatures held in the tabu memory.
    pub tabu_capacity: usize,
    /// Countdown given to a signature when it is recorded.
    pub tabu_tenure: usize,
    /// Number of search iterations.
    pub max_iterations: usize,
    /// Number of neighbors generated per iteration.
    pub neighborhood_size: usize,
    /// Random seed (None lets the caller choose).
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_shift_duration: 720.0,
            driver_cost: 500.0,
            tabu_capacity: 10,
            tabu_tenure: 10,
            max_iterations: 100,
            neighborhood_size: 10,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Sets the shift limit.
    pub fn with_max_shift_duration(mut self, duration: f64) -> Self {
        self.max_shift_duration = duration;
        self
    }

    /// Sets the per-route driver cost.
    pub fn with_driver_cost(mut self, cost: f64) -> Self {
        self.driver_cost = cost;
        self
    }

    /// Sets the tabu memory capacity.
    pub fn with_tabu_capacity(mut self, capacity: usize) -> Self {
        self.tabu_capacity = capacity;
        self
    }

    /// Sets the tabu tenure.
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the neighborhood size.
    pub fn with_neighborhood_size(mut self, n: usize) -> Self {
        self.neighborhood_size = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The fleet's vehicle type described by this config.
    pub fn vehicle(&self) -> Vehicle {
        Vehicle::new(self.max_shift_duration).with_driver_cost(self.driver_cost)
    }

    /// Checks that every parameter is positive.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.max_shift_duration.is_finite() && self.max_shift_duration > 0.0,
            "max_shift_duration must be positive, got {}",
            self.max_shift_duration
        );
        ensure!(
            self.driver_cost.is_finite() && self.driver_cost > 0.0,
            "driver_cost must be positive, got {}",
            self.driver_cost
        );
        ensure!(self.tabu_capacity > 0, "tabu_capacity must be positive");
        ensure!(self.tabu_tenure > 0, "tabu_tenure must be positive");
        ensure!(self.max_iterations > 0, "max_iterations must be positive");
        ensure!(self.neighborhood_size > 0, "neighborhood_size must be positive");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.max_shift_duration, 720.0);
        assert_eq!(config.driver_cost, 500.0);
        assert_eq!(config.tabu_capacity, 10);
        assert_eq!(config.tabu_tenure, 10);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.neighborhood_size, 10);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SearchConfig::default()
            .with_max_shift_duration(480.0)
            .with_driver_cost(100.0)
            .with_tabu_capacity(5)
            .with_tabu_tenure(3)
            .with_max_iterations(50)
            .with_neighborhood_size(4)
            .with_seed(123);
        assert_eq!(config.max_shift_duration, 480.0);
        assert_eq!(config.driver_cost, 100.0);
        assert_eq!(config.tabu_capacity, 5);
        assert_eq!(config.tabu_tenure, 3);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.neighborhood_size, 4);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_config_vehicle() {
        let v = SearchConfig::default().vehicle();
        assert_eq!(v.shift_duration(), 720.0);
        assert_eq!(v.driver_cost(), 500.0);
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        assert!(SearchConfig::default().with_max_shift_duration(0.0).validate().is_err());
        assert!(SearchConfig::default().with_driver_cost(-1.0).validate().is_err());
        assert!(SearchConfig::default().with_tabu_capacity(0).validate().is_err());
        assert!(SearchConfig::default().with_tabu_tenure(0).validate().is_err());
        assert!(SearchConfig::default().with_max_iterations(0).validate().is_err());
        assert!(SearchConfig::default().with_neighborhood_size(0).validate().is_err());
        assert!(SearchConfig::default()
            .with_max_shift_duration(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"max_iterations": 250, "seed": 9}"#).expect("valid json");
        assert_eq!(config.max_iterations, 250);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.driver_cost, 500.0);
    }

    #[test]
    fn test_deserialize_unknown_field() {
        let result = serde_json::from_str::<SearchConfig>(r#"{"iterations": 5}"#);
        assert!(result.is_err());
    }
}
