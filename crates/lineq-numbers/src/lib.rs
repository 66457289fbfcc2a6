//! # lineq-numbers
//!
//! Exact rational arithmetic for the lineq solver.
//!
//! Every coefficient that passes through elimination is a [`Rational`], so
//! row reduction never introduces rounding error. Values are backed by
//! `dashu` and therefore never overflow, no matter how large numerators and
//! denominators grow during elimination.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::NumberError;
pub use rational::Rational;

/// Re-exported so callers can inspect numerators and denominators.
pub use dashu::integer::{IBig, UBig};
