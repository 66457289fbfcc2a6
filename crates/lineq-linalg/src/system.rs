//! Equation-by-equation view over a matrix.

use lineq_numbers::Rational;

use crate::{LinalgError, Matrix};

/// A read-only view of a matrix as a system of linear equations.
///
/// Row `i` is equation `i`; its first [`unknown_count`](Self::unknown_count)
/// entries are coefficients and, for augmented matrices, the last entry is
/// the constant term. The view owns nothing.
#[derive(Debug, Clone, Copy)]
pub struct SystemOfEquations<'a> {
    matrix: &'a Matrix,
}

impl<'a> SystemOfEquations<'a> {
    /// Wraps a matrix.
    #[must_use]
    pub fn new(matrix: &'a Matrix) -> Self {
        Self { matrix }
    }

    /// Returns the underlying matrix.
    #[must_use]
    pub fn matrix(&self) -> &'a Matrix {
        self.matrix
    }

    /// Number of equations.
    #[must_use]
    pub fn equation_count(&self) -> usize {
        self.matrix.num_rows()
    }

    /// Number of unknowns.
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        if self.matrix.is_augmented() {
            self.matrix.num_cols() - 1
        } else {
            self.matrix.num_cols()
        }
    }

    /// Coefficient of unknown `unknown` in equation `row`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::CellOutOfRange`] if either index is outside the
    /// coefficient block.
    pub fn coefficient(&self, row: usize, unknown: usize) -> Result<&'a Rational, LinalgError> {
        if unknown >= self.unknown_count() {
            return Err(LinalgError::CellOutOfRange {
                row,
                col: unknown,
                rows: self.equation_count(),
                cols: self.unknown_count(),
            });
        }
        self.matrix.get(row, unknown)
    }

    /// Constant term of equation `row`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotAugmented`] for a plain coefficient matrix
    /// and [`LinalgError::CellOutOfRange`] for a bad row.
    pub fn constant(&self, row: usize) -> Result<&'a Rational, LinalgError> {
        if !self.matrix.is_augmented() {
            return Err(LinalgError::NotAugmented);
        }
        self.matrix.get(row, self.matrix.num_cols() - 1)
    }

    /// Coefficients of equation `row` followed by its constant term, as `f64`.
    ///
    /// A plain coefficient matrix yields a constant of `0.0` (homogeneous
    /// equation). This is the hand-off format for the geometry layer.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::CellOutOfRange`] if `row` is out of range.
    pub fn row_as_f64(&self, row: usize) -> Result<Vec<f64>, LinalgError> {
        let mut values = (0..self.unknown_count())
            .map(|unknown| self.coefficient(row, unknown).map(Rational::to_f64))
            .collect::<Result<Vec<_>, _>>()?;
        let constant = match self.constant(row) {
            Ok(c) => c.to_f64(),
            Err(LinalgError::NotAugmented) => 0.0,
            Err(err) => return Err(err),
        };
        values.push(constant);
        Ok(values)
    }
}
