//! Errors raised by matrix access and system solving.

use thiserror::Error;

/// Errors that can occur in matrix and system operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Flat element index past the end of the matrix.
    #[error("matrix index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// The requested flat index.
        index: usize,
        /// Number of stored elements.
        len: usize,
    },

    /// Row/column pair outside the matrix shape.
    #[error("matrix cell ({row}, {col}) out of range for {rows}x{cols} matrix")]
    CellOutOfRange {
        /// The requested row.
        row: usize,
        /// The requested column.
        col: usize,
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// A matrix needs at least one row and one column.
    #[error("matrix must have at least one row and one column")]
    EmptyMatrix,

    /// Rows passed to a constructor had different lengths.
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// The operation needs a constants column.
    #[error("matrix is not augmented")]
    NotAugmented,

    /// The coefficient rank is larger than the declared number of unknowns.
    #[error("coefficient rank {rank} exceeds unknown count {unknowns}")]
    RankExceedsUnknowns {
        /// Rank of the coefficient matrix.
        rank: usize,
        /// Declared number of unknowns.
        unknowns: usize,
    },

    /// Only systems in two or three unknowns can be drawn.
    #[error("cannot visualize a system in {0} unknowns")]
    UnsupportedDimension(usize),
}
