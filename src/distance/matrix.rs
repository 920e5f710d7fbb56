//! Dense asymmetric distance matrix.

use crate::models::{Load, Point};

/// A dense (N+1)×(N+1) deadhead matrix stored in row-major order, plus the
/// per-load service distances.
///
/// Index 0 is the depot at the origin; index `i` (1..=N) is the i-th load.
/// Entry `(i, j)` is the empty drive from where `i` ends (its dropoff, or
/// the depot) to where `j` starts (its pickup, or the depot), so the matrix
/// is asymmetric in general. Diagonal entries are zero and never used.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Load, Point};
/// use u_dispatch::distance::DistanceMatrix;
///
/// let loads = vec![
///     Load::new(1, Point::new(3.0, 4.0), Point::new(6.0, 8.0)),
/// ];
/// let dm = DistanceMatrix::from_loads(&loads);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!((dm.get(1, 0) - 10.0).abs() < 1e-10);
/// assert!((dm.service(1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    service: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix for `num_loads` loads, initialized to zero.
    fn new(num_loads: usize) -> Self {
        let size = num_loads + 1;
        Self {
            data: vec![0.0; size * size],
            service: vec![0.0; size],
            size,
        }
    }

    /// Computes deadhead and service distances from load coordinates.
    pub fn from_loads(loads: &[Load]) -> Self {
        let depot = Point::depot();
        let mut dm = Self::new(loads.len());
        for (i, load) in loads.iter().enumerate() {
            let from = i + 1;
            dm.service[from] = load.service_distance();
            dm.set(0, from, depot.distance_to(&load.pickup()));
            dm.set(from, 0, load.dropoff().distance_to(&depot));
            for (j, other) in loads.iter().enumerate() {
                if i != j {
                    dm.set(from, j + 1, load.dropoff().distance_to(&other.pickup()));
                }
            }
        }
        dm
    }

    /// Returns the deadhead distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Pickup-to-dropoff distance of load `index` (zero for the depot).
    pub fn service(&self, index: usize) -> f64 {
        self.service[index]
    }

    /// Number of locations in this matrix, depot included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of loads (matrix size minus the depot).
    pub fn num_loads(&self) -> usize {
        self.size - 1
    }

    /// Returns the candidate whose pickup is nearest to where `from` ends.
    ///
    /// Ties go to the earlier candidate. Returns `None` if `candidates` is
    /// empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}
