// src/lib.rs

pub mod cli;
pub mod config;
pub mod format;
pub mod input;
pub mod polynomial;

pub use polynomial::{Degree, Polynomial, PolynomialError};
