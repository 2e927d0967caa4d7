//! Error types for tour construction.

use thiserror::Error;

/// Errors raised by tour operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// A point failed its validity check (e.g. a NaN coordinate).
    ///
    /// The tour is left unchanged.
    #[error("invalid point: coordinates must be finite")]
    InvalidPoint,

    /// A heuristic name could not be parsed.
    #[error("unknown insertion heuristic: {0}")]
    UnknownHeuristic(String),
}

/// Result type alias for tour operations.
pub type Result<T> = std::result::Result<T, TourError>;
