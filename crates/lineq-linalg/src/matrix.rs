//! Dense matrix of exact rationals with Gauss-Jordan reduction.
//!
//! The same type serves as a plain coefficient matrix and as an augmented
//! matrix whose last column holds the constant terms of the equations.

use std::fmt;
use std::ops::{Index, IndexMut};

use lineq_numbers::Rational;
use num_traits::{One, Zero};
use tracing::{debug, trace};

use crate::LinalgError;

/// Dense matrix stored in column-major order.
///
/// Cloning performs a deep copy of every element, so a pristine and a
/// reduced version of the same system can coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    /// Entries in column-major order: `index = row + col * num_rows`.
    data: Vec<Rational>,
    num_rows: usize,
    num_cols: usize,
    /// Whether the last column holds constants rather than coefficients.
    augmented: bool,
}

impl Matrix {
    /// Creates a new matrix filled with zeros.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize, augmented: bool) -> Self {
        assert!(num_rows > 0 && num_cols > 0, "{}", LinalgError::EmptyMatrix);
        Self {
            data: vec![Rational::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
            augmented,
        }
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::EmptyMatrix`] if there are no rows or the rows
    /// are empty, and [`LinalgError::RaggedRows`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Rational>>, augmented: bool) -> Result<Self, LinalgError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if num_rows == 0 || num_cols == 0 {
            return Err(LinalgError::EmptyMatrix);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != num_cols)
        {
            return Err(LinalgError::RaggedRows {
                row,
                expected: num_cols,
                found,
            });
        }

        let mut m = Self::zeros(num_rows, num_cols, augmented);
        for (row, values) in rows.into_iter().enumerate() {
            for (col, value) in values.into_iter().enumerate() {
                m[(row, col)] = value;
            }
        }
        Ok(m)
    }

    /// Creates a matrix from integer rows.
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::from_rows`].
    pub fn from_i64_rows(rows: &[&[i64]], augmented: bool) -> Result<Self, LinalgError> {
        let rows = rows
            .iter()
            .map(|row| row.iter().copied().map(Rational::from_integer).collect())
            .collect();
        Self::from_rows(rows, augmented)
    }

    /// Creates an identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n, false);
        for i in 0..n {
            m[(i, i)] = Rational::one();
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the number of stored elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; a matrix has at least one element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if the last column holds constant terms.
    #[must_use]
    pub fn is_augmented(&self) -> bool {
        self.augmented
    }

    /// Maps (row, col) to the flat column-major index.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::CellOutOfRange`] if the cell lies outside the matrix.
    pub fn flat_index(&self, row: usize, col: usize) -> Result<usize, LinalgError> {
        if row < self.num_rows && col < self.num_cols {
            Ok(row + col * self.num_rows)
        } else {
            Err(LinalgError::CellOutOfRange {
                row,
                col,
                rows: self.num_rows,
                cols: self.num_cols,
            })
        }
    }

    /// Returns a reference to the entry at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::CellOutOfRange`] if the cell lies outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<&Rational, LinalgError> {
        let index = self.flat_index(row, col)?;
        Ok(&self.data[index])
    }

    /// Returns a mutable reference to the entry at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::CellOutOfRange`] if the cell lies outside the matrix.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut Rational, LinalgError> {
        let index = self.flat_index(row, col)?;
        Ok(&mut self.data[index])
    }

    /// Overwrites the entry at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::CellOutOfRange`] if the cell lies outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: Rational) -> Result<(), LinalgError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Returns the entry at a flat column-major index.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`] if `index >= len()`.
    pub fn get_flat(&self, index: usize) -> Result<&Rational, LinalgError> {
        self.data.get(index).ok_or(LinalgError::IndexOutOfRange {
            index,
            len: self.data.len(),
        })
    }

    /// Overwrites the entry at a flat column-major index.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`] if `index >= len()`.
    pub fn set_flat(&mut self, index: usize, value: Rational) -> Result<(), LinalgError> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(LinalgError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Returns a row as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> Vec<Rational> {
        (0..self.num_cols)
            .map(|col| self[(row, col)].clone())
            .collect()
    }

    /// Returns a copy without the constants column.
    ///
    /// A non-augmented matrix is copied unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::EmptyMatrix`] if the matrix has no coefficient columns.
    pub fn coefficient_part(&self) -> Result<Self, LinalgError> {
        if !self.augmented {
            return Ok(self.clone());
        }
        let num_cols = self.num_cols - 1;
        if num_cols == 0 {
            return Err(LinalgError::EmptyMatrix);
        }
        // Column-major: dropping the last column is a truncation.
        let data = self.data[..self.num_rows * num_cols].to_vec();
        Ok(Self {
            data,
            num_rows: self.num_rows,
            num_cols,
            augmented: false,
        })
    }

    /// Swaps two rows in-place.
    ///
    /// # Panics
    ///
    /// Panics with the [`LinalgError::CellOutOfRange`] message
    /// (`matrix cell (row, col) out of range for RxC matrix`) if either row
    /// is out of range, the same as indexing.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.checked_index(a, 0);
        self.checked_index(b, 0);
        if a == b {
            return;
        }
        for col in 0..self.num_cols {
            let i = self.checked_index(a, col);
            let j = self.checked_index(b, col);
            self.data.swap(i, j);
        }
    }

    /// Number of zero entries before the first non-zero entry in `row`.
    ///
    /// Returns the column count for an all-zero row.
    ///
    /// # Panics
    ///
    /// Panics with the [`LinalgError::CellOutOfRange`] message if `row` is
    /// out of range, the same as indexing.
    #[must_use]
    pub fn row_leading_zero_count(&self, row: usize) -> usize {
        self.checked_index(row, 0);
        (0..self.num_cols)
            .take_while(|&col| self[(row, col)].is_zero())
            .count()
    }

    /// Returns true if every entry of `row` is zero.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn is_zero_row(&self, row: usize) -> bool {
        self.row_leading_zero_count(row) == self.num_cols
    }

    /// Counts the rows with at least one non-zero entry.
    #[must_use]
    pub fn count_nonzero_rows(&self) -> usize {
        (0..self.num_rows).filter(|&row| !self.is_zero_row(row)).count()
    }

    /// Index of the bottom-most non-zero row, if any.
    #[must_use]
    pub fn last_nonzero_row_index(&self) -> Option<usize> {
        (0..self.num_rows).rev().find(|&row| !self.is_zero_row(row))
    }

    /// Number of non-zero rows.
    ///
    /// This is the rank only once [`Matrix::reduce_to_rref`] has run.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.count_nonzero_rows()
    }

    /// Reduces the matrix in place to reduced row-echelon form.
    ///
    /// Gauss-Jordan elimination that prefers pivots equal to 1, then -1,
    /// then the current row, then the first non-zero row below. Unit pivots
    /// keep the intermediate fractions small for display. Elimination stops
    /// early once the remaining rows are all zero.
    pub fn reduce_to_rref(&mut self) {
        let mut col = 0;

        for row in 0..self.num_rows {
            if self.is_zero_row(row) {
                match self.last_nonzero_row_index() {
                    Some(last) if last > row => self.swap_rows(row, last),
                    _ => break,
                }
            }

            let mut pivot = None;
            while col < self.num_cols {
                pivot = self.best_pivot_row(row, col);
                if pivot.is_some() {
                    break;
                }
                col += 1;
            }
            let Some(pivot_row) = pivot else {
                break;
            };

            if pivot_row != row {
                self.swap_rows(row, pivot_row);
            }
            trace!(row, col, pivot = %self[(row, col)], "selected pivot");

            // Scale pivot row to make pivot = 1
            if self[(row, col)] != 1_i64 {
                let pivot_val = self[(row, col)].clone();
                for c in col + 1..self.num_cols {
                    self[(row, c)] /= &pivot_val;
                }
                self[(row, col)].set(1);
            }

            // Eliminate the pivot column from every other row
            for other in 0..self.num_rows {
                if other == row || self[(other, col)].is_zero() {
                    continue;
                }
                let factor = self[(other, col)].clone();
                for c in col..self.num_cols {
                    let delta = &self[(row, c)] * &factor;
                    self[(other, c)] -= &delta;
                }
            }

            col += 1;
        }

        debug!(
            rows = self.num_rows,
            cols = self.num_cols,
            rank = self.rank(),
            "reduced matrix to RREF"
        );
    }

    /// Emits the matrix through `tracing` at debug level.
    pub fn log_debug(&self, description: &str) {
        debug!("{description}\n{self}");
    }

    /// Chooses the pivot row for `col`, searching from `from_row` down.
    fn best_pivot_row(&self, from_row: usize, col: usize) -> Option<usize> {
        let rows = from_row..self.num_rows;
        rows.clone()
            .find(|&row| self[(row, col)] == 1_i64)
            .or_else(|| rows.clone().find(|&row| self[(row, col)] == -1_i64))
            .or_else(|| rows.clone().find(|&row| !self[(row, col)].is_zero()))
    }

    fn checked_index(&self, row: usize, col: usize) -> usize {
        match self.flat_index(row, col) {
            Ok(index) => index,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Rational;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[self.checked_index(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let index = self.checked_index(row, col);
        &mut self.data[index]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix {}x{}", self.num_rows, self.num_cols)?;
        for row in 0..self.num_rows {
            writeln!(f)?;
            for col in 0..self.num_cols {
                write!(f, "{:>3} ", self[(row, col)])?;
            }
        }
        Ok(())
    }
}
