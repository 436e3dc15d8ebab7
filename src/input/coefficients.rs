// src/input/coefficients.rs

use std::str::FromStr;

use log::trace;
use thiserror::Error;

use crate::polynomial::Polynomial;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("empty input")]
    Empty,
    #[error("not a number: {0:?}")]
    InvalidNumber(String),
}

/// Strips a trailing `\n` or `\r\n`, leaving any other whitespace in place.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Parses whitespace-separated coefficients, constant term first.
///
/// `"-5 2 3"` becomes `3x² + 2x - 5`. Only an empty line is rejected; a line
/// of blanks has no coefficients and gives the zero polynomial.
pub fn parse_coefficients(line: &str) -> Result<Polynomial, InputError> {
    let line = strip_line_ending(line);
    if line.is_empty() {
        return Err(InputError::Empty);
    }

    let coefficients = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| InputError::InvalidNumber(token.to_string()))
        })
        .collect::<Result<Vec<f64>, InputError>>()?;

    trace!("parsed {} coefficients from {:?}", coefficients.len(), line);
    Ok(Polynomial::new(coefficients))
}

impl FromStr for Polynomial {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coefficients(s)
    }
}
