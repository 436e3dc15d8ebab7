// src/polynomial/error.rs

use thiserror::Error;

/// Errors raised by polynomial arithmetic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolynomialError {
    #[error("division by the zero polynomial")]
    DivisionByZeroPolynomial,
}
