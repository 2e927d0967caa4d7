//! Point type and the distance capability tours are built over.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A location that can measure its distance to another location of the
/// same kind.
///
/// [`Tour`](super::Tour) only ever talks to points through this trait.
/// Distances are expected to be non-negative and symmetric; the tour does
/// not check either property.
///
/// # Examples
///
/// ```
/// use u_tour::models::Location;
///
/// #[derive(Debug)]
/// struct Milepost(f64);
///
/// impl Location for Milepost {
///     fn distance_to(&self, other: &Self) -> f64 {
///         (self.0 - other.0).abs()
///     }
/// }
///
/// assert_eq!(Milepost(3.0).distance_to(&Milepost(10.0)), 7.0);
/// assert!(Milepost(f64::NAN).is_valid());
/// ```
pub trait Location {
    /// Distance from `self` to `other`.
    fn distance_to(&self, other: &Self) -> f64;

    /// Returns `false` if this location must not be inserted into a tour.
    fn is_valid(&self) -> bool {
        true
    }
}

/// An immutable point in the Euclidean plane.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Location, Point};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// assert_eq!(b.to_string(), "(3.0, 4.0)");
/// assert!(!Point::new(f64::NAN, 1.0).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl Location for Point {
    fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Renders `(x, y)`; coordinates always carry a decimal point, so whole
/// numbers print as `0.0` rather than `0`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x(), 10.0);
        assert_eq!(p.y(), 20.0);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_point_distance_symmetric() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_point_distance_coincident() {
        let a = Point::new(7.5, -2.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_point_validity() {
        assert!(Point::new(0.0, 0.0).is_valid());
        assert!(!Point::new(f64::NAN, 0.0).is_valid());
        assert!(!Point::new(0.0, f64::INFINITY).is_valid());
        assert!(!Point::new(f64::NEG_INFINITY, 0.0).is_valid());
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(0.0, 100.0).to_string(), "(0.0, 100.0)");
        assert_eq!(Point::new(1.5, -2.25).to_string(), "(1.5, -2.25)");
    }

    #[test]
    fn test_point_deserialize() {
        let p: Point = serde_json::from_str(r#"{"x": 3.0, "y": 4.0}"#).expect("valid json");
        assert_eq!(p, Point::new(3.0, 4.0));
    }
}
