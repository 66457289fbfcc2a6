//! Solution classification and extraction.
//!
//! Classification follows the Kronecker-Capelli theorem: compare the rank
//! of the coefficient matrix, the rank of the augmented matrix and the
//! number of unknowns.

use lineq_numbers::Rational;
use num_traits::{One, Zero};
use tracing::debug;

use crate::{LinalgError, Matrix, SystemOfEquations};

/// How many solutions a system has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolutionClass {
    /// The system is inconsistent.
    NoSolution,
    /// Exactly one solution.
    UniqueSolution,
    /// A family of solutions with at least one free unknown.
    InfiniteSolutions,
}

/// Ranks and class of a system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Rank of the coefficient matrix.
    pub rank_coefficients: usize,
    /// Rank of the augmented matrix.
    pub rank_augmented: usize,
    /// The resulting solution class.
    pub solution_class: SolutionClass,
}

impl Classification {
    /// Classifies from ranks alone.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::RankExceedsUnknowns`] if the coefficient rank
    /// is larger than `unknown_count`.
    pub fn from_ranks(
        rank_coefficients: usize,
        rank_augmented: usize,
        unknown_count: usize,
    ) -> Result<Self, LinalgError> {
        if rank_coefficients > unknown_count {
            return Err(LinalgError::RankExceedsUnknowns {
                rank: rank_coefficients,
                unknowns: unknown_count,
            });
        }
        let solution_class = if rank_augmented > rank_coefficients {
            SolutionClass::NoSolution
        } else if rank_coefficients == unknown_count {
            SolutionClass::UniqueSolution
        } else {
            SolutionClass::InfiniteSolutions
        };
        Ok(Self {
            rank_coefficients,
            rank_augmented,
            solution_class,
        })
    }
}

/// Reduces copies of the coefficient and augmented matrices and classifies
/// the system. The input matrix is left untouched.
///
/// A non-augmented input is treated as a homogeneous system, so both ranks
/// coincide.
///
/// # Errors
///
/// Returns [`LinalgError::EmptyMatrix`] for an augmented matrix without
/// coefficient columns, and [`LinalgError::RankExceedsUnknowns`] if
/// `unknown_count` is smaller than the coefficient rank.
pub fn solve_classify(matrix: &Matrix, unknown_count: usize) -> Result<Classification, LinalgError> {
    let mut coefficients = matrix.coefficient_part()?;
    coefficients.reduce_to_rref();
    let rank_coefficients = coefficients.rank();

    let rank_augmented = if matrix.is_augmented() {
        let mut augmented = matrix.clone();
        augmented.reduce_to_rref();
        augmented.rank()
    } else {
        rank_coefficients
    };

    let classification = Classification::from_ranks(rank_coefficients, rank_augmented, unknown_count)?;
    debug!(
        rank_coefficients,
        rank_augmented,
        unknown_count,
        class = ?classification.solution_class,
        "classified system"
    );
    Ok(classification)
}

/// General solution of a consistent system with free unknowns.
///
/// Every solution is `particular + Σ tᵢ · directions[i]`, with one parameter
/// per free unknown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParametricSolution {
    /// Solution obtained by setting every free unknown to zero.
    pub particular: Vec<Rational>,
    /// Indices of the free unknowns, ascending.
    pub free_unknowns: Vec<usize>,
    /// One direction per free unknown, in the same order.
    pub directions: Vec<Vec<Rational>>,
}

impl ParametricSolution {
    /// Evaluates the solution for the given parameter values.
    ///
    /// # Panics
    ///
    /// Panics if the number of parameters differs from the number of free
    /// unknowns.
    #[must_use]
    pub fn evaluate(&self, params: &[Rational]) -> Vec<Rational> {
        assert_eq!(params.len(), self.directions.len());
        let mut point = self.particular.clone();
        for (t, direction) in params.iter().zip(&self.directions) {
            for (x, d) in point.iter_mut().zip(direction) {
                *x = &*x + &(t * d);
            }
        }
        point
    }
}

/// Solution set of a linear system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolutionSet {
    /// The system is inconsistent.
    None,
    /// The single solution, one value per unknown.
    Unique(Vec<Rational>),
    /// The parametric family of solutions.
    Infinite(ParametricSolution),
}

impl SolutionSet {
    /// The class of this solution set.
    #[must_use]
    pub fn class(&self) -> SolutionClass {
        match self {
            SolutionSet::None => SolutionClass::NoSolution,
            SolutionSet::Unique(_) => SolutionClass::UniqueSolution,
            SolutionSet::Infinite(_) => SolutionClass::InfiniteSolutions,
        }
    }

    /// Returns the unique solution if there is one.
    #[must_use]
    pub fn unique(&self) -> Option<&[Rational]> {
        match self {
            SolutionSet::Unique(values) => Some(values),
            _ => None,
        }
    }
}

/// Solves an augmented system exactly.
///
/// # Errors
///
/// Returns [`LinalgError::NotAugmented`] if the matrix has no constants
/// column.
pub fn solve(matrix: &Matrix) -> Result<SolutionSet, LinalgError> {
    if !matrix.is_augmented() {
        return Err(LinalgError::NotAugmented);
    }
    let unknowns = matrix.num_cols() - 1;

    let mut rref = matrix.clone();
    rref.reduce_to_rref();

    // (row, pivot column) of every non-zero row
    let pivots: Vec<(usize, usize)> = (0..rref.num_rows())
        .filter(|&row| !rref.is_zero_row(row))
        .map(|row| (row, rref.row_leading_zero_count(row)))
        .collect();

    // A pivot in the constants column is a row 0 = c with c != 0.
    if pivots.iter().any(|&(_, col)| col == unknowns) {
        return Ok(SolutionSet::None);
    }

    let mut particular = vec![Rational::zero(); unknowns];
    for &(row, col) in &pivots {
        particular[col] = rref[(row, unknowns)].clone();
    }

    if pivots.len() == unknowns {
        return Ok(SolutionSet::Unique(particular));
    }

    let free_unknowns: Vec<usize> = (0..unknowns)
        .filter(|col| !pivots.iter().any(|(_, pivot_col)| pivot_col == col))
        .collect();

    let directions = free_unknowns
        .iter()
        .map(|&free| {
            let mut direction = vec![Rational::zero(); unknowns];
            direction[free] = Rational::one();
            for &(row, col) in &pivots {
                direction[col] = -&rref[(row, free)];
            }
            direction
        })
        .collect();

    Ok(SolutionSet::Infinite(ParametricSolution {
        particular,
        free_unknowns,
        directions,
    }))
}

/// Structural problems worth pointing out to a learner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SystemDiagnostics {
    /// Equations of the form `0 = c` with `c != 0`.
    pub contradictory_equations: Vec<usize>,
    /// Equations of the form `0 = 0`.
    pub zeroed_equations: Vec<usize>,
    /// Unknowns whose coefficient is zero in every equation.
    pub zeroed_unknowns: Vec<usize>,
    /// True if elimination exposes a contradiction anywhere.
    pub inconsistent: bool,
}

impl SystemDiagnostics {
    /// Returns true if nothing was flagged.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.contradictory_equations.is_empty()
            && self.zeroed_equations.is_empty()
            && self.zeroed_unknowns.is_empty()
            && !self.inconsistent
    }
}

/// Inspects a system for contradictions and zeroed rows or columns.
///
/// Row and unknown indices refer to the input matrix, not to its reduced form.
#[must_use]
pub fn diagnose(matrix: &Matrix) -> SystemDiagnostics {
    let soe = SystemOfEquations::new(matrix);
    let unknowns = soe.unknown_count();

    let mut diagnostics = SystemDiagnostics::default();

    for row in 0..soe.equation_count() {
        if matrix.row_leading_zero_count(row) < unknowns {
            continue;
        }
        let constant_is_zero = soe.constant(row).map_or(true, Zero::is_zero);
        if constant_is_zero {
            diagnostics.zeroed_equations.push(row);
        } else {
            diagnostics.contradictory_equations.push(row);
        }
    }

    diagnostics.zeroed_unknowns = (0..unknowns)
        .filter(|&col| (0..matrix.num_rows()).all(|row| matrix[(row, col)].is_zero()))
        .collect();

    diagnostics.inconsistent = matrix.is_augmented()
        && matches!(solve(matrix), Ok(SolutionSet::None));

    diagnostics
}
