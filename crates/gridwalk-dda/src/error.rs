//! Error types for the traversal library.
//!
//! Degenerate segments (zero length, axis-aligned) are not errors. These
//! variants only cover inputs the walk cannot represent and callers that
//! asked for a step budget.

use core::fmt;

/// Errors that can occur when setting up or running a grid traversal.
#[derive(Debug, Clone, PartialEq)]
pub enum TraversalError {
    /// An endpoint coordinate is NaN or infinite.
    NonFiniteCoordinate(&'static str),
    /// The endpoints are finite but their difference overflows to infinity.
    SpanOverflow(&'static str),
    /// An endpoint lies in a cell whose index does not fit in an `i32`.
    CellOutOfRange(&'static str),
    /// The step budget ran out before the walk reached the end cell.
    IncompleteTraversal {
        /// Number of cells emitted before the budget was exhausted.
        visited: usize,
    },
}

impl fmt::Display for TraversalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalError::NonFiniteCoordinate(msg) => write!(f, "Non-finite coordinate: {}", msg),
            TraversalError::SpanOverflow(msg) => write!(f, "Segment span overflow: {}", msg),
            TraversalError::CellOutOfRange(msg) => write!(f, "Cell out of range: {}", msg),
            TraversalError::IncompleteTraversal { visited } => {
                write!(f, "Incomplete traversal: step budget exhausted after {} cells", visited)
            }
        }
    }
}

impl core::error::Error for TraversalError {}
