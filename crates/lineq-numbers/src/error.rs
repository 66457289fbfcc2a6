//! Errors raised by exact arithmetic.

use thiserror::Error;

/// Errors that can occur in rational arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum NumberError {
    /// The divisor (or a constructed denominator) was zero.
    #[error("division by zero")]
    DivisionByZero,
}
