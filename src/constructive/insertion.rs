//! Whole-tour construction by repeated insertion.
//!
//! Points are inserted one at a time, in input order, with a single
//! heuristic. The order of the input therefore matters: the same point set
//! fed in a different order generally yields a different tour.
//!
//! # Complexity
//!
//! O(n²) for n points: each insertion scans the current tour once.

use rand::Rng;

use crate::error::Result;
use crate::models::{Location, Point, Tour};

use super::Heuristic;

/// Builds a tour by inserting every point with the given heuristic.
///
/// # Errors
///
/// Returns [`TourError::InvalidPoint`](crate::error::TourError::InvalidPoint)
/// for the first point that fails its validity check; no tour is returned.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::constructive::{build_tour, Heuristic};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 100.0),
///     Point::new(100.0, 100.0),
/// ];
/// let tour = build_tour(points, Heuristic::Smallest).unwrap();
/// assert_eq!(tour.size(), 3);
/// assert!((tour.distance() - 341.42).abs() < 0.01);
/// ```
pub fn build_tour<P, I>(points: I, heuristic: Heuristic) -> Result<Tour<P>>
where
    P: Location,
    I: IntoIterator<Item = P>,
{
    let mut tour = Tour::new();
    for point in points {
        heuristic.insert_into(&mut tour, point)?;
    }
    tracing::debug!(
        %heuristic,
        size = tour.size(),
        distance = tour.distance(),
        "tour constructed"
    );
    Ok(tour)
}

/// Builds a tour with nearest-neighbor insertion.
///
/// Shorthand for [`build_tour`] with [`Heuristic::Nearest`].
pub fn nearest_insertion<P, I>(points: I) -> Result<Tour<P>>
where
    P: Location,
    I: IntoIterator<Item = P>,
{
    build_tour(points, Heuristic::Nearest)
}

/// Builds a tour with cheapest (smallest increase) insertion.
///
/// Shorthand for [`build_tour`] with [`Heuristic::Smallest`].
pub fn smallest_insertion<P, I>(points: I) -> Result<Tour<P>>
where
    P: Location,
    I: IntoIterator<Item = P>,
{
    build_tour(points, Heuristic::Smallest)
}

/// Generates `n` points uniformly distributed over `[0, width) × [0, height)`.
///
/// Non-positive or non-finite extents collapse that axis to zero.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tour::constructive::random_points;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let points = random_points(50, 600.0, 400.0, &mut rng);
/// assert_eq!(points.len(), 50);
/// assert!(points.iter().all(|p| p.x() < 600.0 && p.y() < 400.0));
/// ```
pub fn random_points<R: Rng>(n: usize, width: f64, height: f64, rng: &mut R) -> Vec<Point> {
    let mut sample = |extent: f64| {
        if extent > 0.0 && extent.is_finite() {
            rng.random_range(0.0..extent)
        } else {
            0.0
        }
    };
    (0..n)
        .map(|_| {
            let x = sample(width);
            let y = sample(height);
            Point::new(x, y)
        })
        .collect()
}
