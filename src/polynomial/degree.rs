// src/polynomial/degree.rs

use std::fmt::{Display, Formatter, Result};

/// Degree of a polynomial.
///
/// The zero polynomial has degree negative infinity, which orders below
/// every finite degree. Variant order matters: the derived `Ord` relies on
/// `NegInfinity` being declared first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Degree {
    NegInfinity,
    Finite(usize),
}

impl Display for Degree {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Degree::NegInfinity => write!(f, "-∞"),
            Degree::Finite(n) => write!(f, "{}", n),
        }
    }
}
