// src/polynomial/polynomial.rs

use log::trace;
use num::Zero;
use serde::{Deserialize, Serialize};

use crate::polynomial::degree::Degree;

/// Dense univariate polynomial with `f64` coefficients.
///
/// Coefficients are stored in ascending power order, constant term first.
/// The vector is never empty and never ends in a zero, except for the zero
/// polynomial itself, which is stored as `[0.0]`.
///
/// Zero tests are exact (`c == 0.0`). A coefficient that should have
/// cancelled but carries rounding noise is kept as a genuine term.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<f64>", into = "Vec<f64>")]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Builds a normalized polynomial from coefficients in ascending power order.
    pub fn new<I, T>(coefficients: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        let mut coefficients: Vec<f64> = coefficients.into_iter().map(Into::into).collect();
        trim_trailing_zeros(&mut coefficients);
        Polynomial { coefficients }
    }

    pub fn zero() -> Self {
        Polynomial { coefficients: vec![0.0] }
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_zero()
    }

    pub fn degree(&self) -> Degree {
        if self.is_zero() {
            Degree::NegInfinity
        } else {
            Degree::Finite(self.coefficients.len() - 1)
        }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Coefficient of `x^power`; zero beyond the stored terms.
    pub fn coefficient(&self, power: usize) -> f64 {
        self.coefficients.get(power).copied().unwrap_or(0.0)
    }

    /// Coefficient of the highest stored power (`0.0` for the zero polynomial).
    pub fn leading_coefficient(&self) -> f64 {
        self.coefficients.last().copied().unwrap_or(0.0)
    }
}

/// Drops trailing exact zeros, keeping at least one element, and replaces an
/// empty buffer with `[0.0]`.
pub(crate) fn trim_trailing_zeros(coefficients: &mut Vec<f64>) {
    let before = coefficients.len();
    while coefficients.len() > 1 && coefficients.last().map_or(false, |c| c.is_zero()) {
        coefficients.pop();
    }
    if coefficients.is_empty() {
        coefficients.push(0.0);
    }
    if coefficients.len() != before {
        trace!("trimmed coefficients from length {} to {}", before, coefficients.len());
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Polynomial::zero()
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coefficients: Vec<f64>) -> Self {
        Polynomial::new(coefficients)
    }
}

impl From<Polynomial> for Vec<f64> {
    fn from(polynomial: Polynomial) -> Self {
        polynomial.coefficients
    }
}
