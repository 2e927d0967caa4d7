//! Constructive heuristics for building closed tours.
//!
//! - [`Heuristic`] — Selects nearest-neighbor or cheapest insertion
//! - [`build_tour`] — Inserts a whole point set with one heuristic, O(n²)
//! - [`random_points`] — Uniform random instances

mod heuristic;
mod insertion;

pub use heuristic::Heuristic;
pub use insertion::{build_tour, nearest_insertion, random_points, smallest_insertion};
