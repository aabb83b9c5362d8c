//! Error types for structured error handling.
//!
//! This module provides:
//! - `SeriesError`: Errors from series construction
//! - `FillError`: Errors from fill operations (consumed by the coordinator)

use std::fmt;
use thiserror::Error;

/// Side of a gap, as seen from the gap's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Lower positions.
    Left,
    /// Higher positions.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Errors from series construction.
///
/// # Variants
/// - `LengthMismatch`: Position and value columns have different lengths
/// - `NonIncreasingPositions`: Positions are not strictly increasing
///
/// # Examples
/// ```
/// use fill_core::types::SeriesError;
///
/// let err = SeriesError::NonIncreasingPositions { index: 3 };
/// assert!(format!("{}", err).contains("strictly increasing"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// Position and value columns have different lengths.
    #[error("Positions and values must have same length: got {positions} and {values}")]
    LengthMismatch {
        /// Number of positions provided
        positions: usize,
        /// Number of values provided
        values: usize,
    },

    /// Positions are not strictly increasing at the given index.
    #[error("Positions must be strictly increasing: violation at index {index}")]
    NonIncreasingPositions {
        /// First index whose position does not exceed its predecessor
        index: usize,
    },
}

/// Errors from fill operations.
///
/// Every variant is a local, per-gap decision: the fallback coordinator
/// consumes these internally, so a caller only ever observes "filled with
/// record" or "left unfilled", never an aborted pass.
///
/// # Variants
/// - `MissingBound`: No known value on the required side of a gap
/// - `InsufficientCandidates`: Fewer candidate points than the fit needs
/// - `CoincidentPositions`: Two-point fit given a repeated position
/// - `SingularSystem`: Quadratic system determinant is zero
///
/// # Examples
/// ```
/// use fill_core::types::FillError;
///
/// let err = FillError::InsufficientCandidates { got: 2, need: 3 };
/// assert_eq!(
///     format!("{}", err),
///     "Insufficient candidates: got 2, need at least 3"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FillError {
    /// No known value on the required side of a gap.
    #[error("No known value to the {side} of index {index}")]
    MissingBound {
        /// The gap index
        index: usize,
        /// The side that has no known value
        side: Side,
    },

    /// Fewer candidate points than the requested fit needs.
    #[error("Insufficient candidates: got {got}, need at least {need}")]
    InsufficientCandidates {
        /// Number of usable candidate points found
        got: usize,
        /// Minimum number of points the fit requires
        need: usize,
    },

    /// Two-point fit through points sharing one position.
    #[error("Cannot fit a line through two points at position {x}")]
    CoincidentPositions {
        /// The repeated position
        x: f64,
    },

    /// The 3x3 quadratic system has a zero determinant (fewer than two
    /// distinct positions among the candidates, or numerically singular).
    #[error("Degenerate quadratic fit through positions ({x0}, {x1}, {x2})")]
    SingularSystem {
        /// First candidate position
        x0: f64,
        /// Second candidate position
        x1: f64,
        /// Third candidate position
        x2: f64,
    },
}
