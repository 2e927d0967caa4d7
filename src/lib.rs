//! # u-tour
//!
//! Closed tour construction over 2D points using greedy insertion
//! heuristics, the constructive core of a TSP solver.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Location trait, Tour)
//! - [`constructive`] — Heuristic selection and whole-tour construction
//! - [`error`] — Error type shared by all operations
//!
//! ## Example
//!
//! ```
//! use u_tour::constructive::{build_tour, Heuristic};
//! use u_tour::models::Point;
//!
//! let points = [(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)].map(|(x, y)| Point::new(x, y));
//! let tour = build_tour(points, Heuristic::Nearest)?;
//! assert_eq!(tour.size(), 3);
//! assert!((tour.distance() - 12.0).abs() < 1e-10);
//! # Ok::<(), u_tour::error::TourError>(())
//! ```

pub mod constructive;
pub mod error;
pub mod models;
