//! Error types for grid construction and addressed mutation.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or `(row, column)`-addressed
/// operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The addressed position lies outside the container's bounds.
    OutOfBounds {
        /// The offending row index.
        row: usize,
        /// The offending column index.
        column: usize,
        /// The container's height.
        height: usize,
        /// The container's width.
        width: usize,
    },
    /// Attempted to construct a matrix with a zero dimension.
    EmptyGrid,
    /// The requested dimensions overflow addressable space.
    TooLarge {
        /// The requested height.
        height: usize,
        /// The requested width.
        width: usize,
    },
    /// Row input of inconsistent length during construction.
    BadShape {
        /// Index of the offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// The expected width, taken from the first row.
        width: usize,
    },
    /// The operation is structurally disallowed for this container shape.
    Unsupported {
        /// The operation that was attempted.
        op: &'static str,
    },
    /// A cursor `set` with no element returned yet by `next`/`previous`.
    NoCursorElement,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                row,
                column,
                height,
                width,
            } => write!(
                f,
                "position ({row},{column}) out of bounds for a {height}x{width} container"
            ),
            Self::EmptyGrid => write!(f, "matrix must have at least one row and one column"),
            Self::TooLarge { height, width } => {
                write!(f, "matrix dimensions {height}x{width} overflow addressable space")
            }
            Self::BadShape { row, len, width } => {
                write!(f, "row {row} has length {len}, expected {width}")
            }
            Self::Unsupported { op } => write!(f, "unsupported operation: {op}"),
            Self::NoCursorElement => {
                write!(f, "cursor has no element to rewrite; call next or previous first")
            }
        }
    }
}

impl Error for GridError {}
