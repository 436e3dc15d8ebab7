// src/polynomial/mod.rs

pub mod arithmetic;
pub mod degree;
pub mod division;
pub mod error;
pub mod polynomial;

// Re-export main types for convenience
pub use degree::Degree;
pub use error::PolynomialError;
pub use polynomial::Polynomial;
