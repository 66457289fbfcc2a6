//! # lineq-linalg
//!
//! Exact linear algebra for small systems of linear equations.
//!
//! This crate provides:
//! - [`Matrix`]: a dense column-major matrix of exact rationals with
//!   Gauss-Jordan reduction to reduced row-echelon form
//! - [`SystemOfEquations`]: a typed per-equation view over a matrix
//! - [`solve_classify`] and [`solve`]: rank-based classification and exact
//!   solution extraction
//!
//! ## Pivot Selection
//!
//! Elimination prefers pivots that are exactly 1, then exactly -1, so
//! that intermediate matrices shown to a learner stay free of fractions
//! whenever possible. Arithmetic is exact, so numerical stability plays no
//! part in the choice.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod matrix;
pub mod solve;
pub mod system;

pub use error::LinalgError;
pub use matrix::Matrix;
pub use solve::{
    diagnose, solve, solve_classify, Classification, ParametricSolution, SolutionClass,
    SolutionSet, SystemDiagnostics,
};
pub use system::SystemOfEquations;

#[cfg(test)]
mod proptests;
