// src/input/mod.rs

pub mod coefficients;

// Re-export main types for convenience
pub use coefficients::{parse_coefficients, strip_line_ending, InputError};
