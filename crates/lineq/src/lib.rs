//! # lineq
//!
//! Exact solving and geometric visualization data for small systems of
//! linear equations.
//!
//! A system is entered as an augmented matrix of exact rationals. It is
//! classified by rank (no solution, unique, infinitely many), and each
//! equation is turned into a clipped line (two unknowns) or a triangulated
//! plane (three unknowns) inside a symmetric bounding cube.
//!
//! ## Quick Start
//!
//! ```rust
//! use lineq::prelude::*;
//!
//! // x + y = 2, x - y = 0
//! let m = Matrix::from_i64_rows(&[&[1, 1, 2], &[1, -1, 0]], true).unwrap();
//! let vis = SystemVisualization::build(&m, &BoundingRegion::default()).unwrap();
//!
//! assert_eq!(vis.classification.solution_class, SolutionClass::UniqueSolution);
//! assert_eq!(vis.lines().len(), 2);
//! assert_eq!(vis.solution_in_region(), Some(true));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use lineq_geometry as geometry;
pub use lineq_linalg as linalg;
pub use lineq_numbers as numbers;

pub mod visualization;

pub use visualization::{Primitives, SystemVisualization};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::visualization::{Primitives, SystemVisualization};
    pub use lineq_geometry::{BoundingRegion, EquationLine, EquationPlane, ParallelConfig, PlaneMesh};
    pub use lineq_linalg::{
        solve, solve_classify, LinalgError, Matrix, SolutionClass, SolutionSet, SystemOfEquations,
    };
    pub use lineq_numbers::Rational;
}
