//! Point and load types.

use serde::{Deserialize, Serialize};

/// A location in the plane.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X-coordinate.
    pub x: f64,
    /// Y-coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The depot location (origin).
    pub fn depot() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A delivery task: drive to `pickup`, carry the load to `dropoff`.
///
/// The id is assigned by the caller and only used to report routes; the
/// solver addresses loads by their position in the input.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Load, Point};
///
/// let load = Load::new(7, Point::new(0.0, 0.0), Point::new(10.0, 0.0));
/// assert_eq!(load.id(), 7);
/// assert!((load.service_distance() - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    id: u64,
    pickup: Point,
    dropoff: Point,
}

impl Load {
    /// Creates a new load.
    pub fn new(id: u64, pickup: Point, dropoff: Point) -> Self {
        Self {
            id,
            pickup,
            dropoff,
        }
    }

    /// Caller-assigned identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Where the load is collected.
    pub fn pickup(&self) -> Point {
        self.pickup
    }

    /// Where the load is delivered.
    pub fn dropoff(&self) -> Point {
        self.dropoff
    }

    /// Distance driven while carrying the load.
    pub fn service_distance(&self) -> f64 {
        self.pickup.distance_to(&self.dropoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_point_depot() {
        assert_eq!(Point::depot(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_load_new() {
        let l = Load::new(3, Point::new(1.0, 1.0), Point::new(4.0, 5.0));
        assert_eq!(l.id(), 3);
        assert_eq!(l.pickup(), Point::new(1.0, 1.0));
        assert_eq!(l.dropoff(), Point::new(4.0, 5.0));
        assert!((l.service_distance() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_load_zero_service() {
        let l = Load::new(1, Point::new(2.0, 2.0), Point::new(2.0, 2.0));
        assert_eq!(l.service_distance(), 0.0);
    }
}
