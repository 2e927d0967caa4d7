//! Insertion heuristic selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TourError};
use crate::models::{Location, Tour};

/// Which greedy rule decides where a new point joins the tour.
///
/// Parses from (and serializes to) its lowercase name, so it can be read
/// straight from configuration.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::Heuristic;
///
/// let h: Heuristic = "Smallest".parse().unwrap();
/// assert_eq!(h, Heuristic::Smallest);
/// assert_eq!(h.to_string(), "smallest");
/// assert!("greedy".parse::<Heuristic>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    /// Insert after the closest point already in the tour.
    #[default]
    Nearest,
    /// Insert into the edge that yields the shortest resulting tour.
    Smallest,
}

impl Heuristic {
    /// All heuristics, in declaration order.
    pub const ALL: [Heuristic; 2] = [Heuristic::Nearest, Heuristic::Smallest];

    /// Lowercase name of this heuristic.
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Nearest => "nearest",
            Heuristic::Smallest => "smallest",
        }
    }

    /// Inserts `point` into `tour` with this heuristic.
    ///
    /// # Errors
    ///
    /// [`TourError::InvalidPoint`] if `point` fails its validity check.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tour::constructive::Heuristic;
    /// use u_tour::models::{Point, Tour};
    ///
    /// let mut tour = Tour::new();
    /// Heuristic::Smallest.insert_into(&mut tour, Point::new(1.0, 1.0)).unwrap();
    /// assert_eq!(tour.size(), 1);
    /// ```
    pub fn insert_into<P: Location>(&self, tour: &mut Tour<P>, point: P) -> Result<()> {
        match self {
            Heuristic::Nearest => tour.insert_nearest(point),
            Heuristic::Smallest => tour.insert_smallest(point),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = TourError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Heuristic::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TourError::UnknownHeuristic(s.to_string()))
    }
}
