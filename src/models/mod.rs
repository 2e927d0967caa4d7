//! Domain model types for tour construction.
//!
//! Provides the distance capability points must offer and the tour itself:
//! a circular sequence of points grown one insertion at a time.

mod point;
mod tour;

pub use point::{Location, Point};
pub use tour::{Iter, Tour};
