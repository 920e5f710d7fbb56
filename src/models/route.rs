//! Route type.

/// An ordered sequence of loads served by a single vehicle.
///
/// Loads are addressed by their problem index (1..=N). A route starts and
/// ends at the depot, which is not stored.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Route;
///
/// let mut route = Route::new();
/// route.push(2);
/// route.push(1);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.loads(), &[2, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Route {
    loads: Vec<usize>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self { loads: Vec::new() }
    }

    /// Appends a load to the end of this route.
    pub fn push(&mut self, load: usize) {
        self.loads.push(load);
    }

    /// Returns the load indices in visit order.
    pub fn loads(&self) -> &[usize] {
        &self.loads
    }

    /// Returns the number of loads on this route.
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Returns `true` if this route serves no loads.
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }
}

impl From<Vec<usize>> for Route {
    fn from(loads: Vec<usize>) -> Self {
        Self { loads }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_empty() {
        let r = Route::new();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn test_route_push() {
        let mut r = Route::new();
        r.push(5);
        r.push(3);
        assert_eq!(r.len(), 2);
        assert_eq!(r.loads(), &[5, 3]);
    }

    #[test]
    fn test_route_from_vec() {
        let r = Route::from(vec![4, 1]);
        assert_eq!(r, Route::from(vec![4, 1]));
        assert_ne!(r, Route::from(vec![1, 4]));
    }
}
