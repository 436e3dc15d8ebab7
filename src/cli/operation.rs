// src/cli/operation.rs

use clap::ValueEnum;
use serde::Serialize;

use crate::polynomial::{Polynomial, PolynomialError};

/// Binary operation offered by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Result of applying an [`Operation`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Value { result: Polynomial },
    Division { quotient: Polynomial, remainder: Polynomial },
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Operation::Add => "SUM",
            Operation::Subtract => "DIFFERENCE",
            Operation::Multiply => "PRODUCT",
            Operation::Divide => "DIVISION",
        }
    }

    pub fn apply(&self, p1: &Polynomial, p2: &Polynomial) -> Result<Outcome, PolynomialError> {
        let outcome = match self {
            Operation::Add => Outcome::Value { result: p1 + p2 },
            Operation::Subtract => Outcome::Value { result: p1 - p2 },
            Operation::Multiply => Outcome::Value { result: p1 * p2 },
            Operation::Divide => {
                let (quotient, remainder) = p1.divmod(p2)?;
                Outcome::Division { quotient, remainder }
            }
        };
        Ok(outcome)
    }
}
