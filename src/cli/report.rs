// src/cli/report.rs

use serde::Serialize;
use thiserror::Error;

use crate::cli::operation::{Operation, Outcome};
use crate::format::{render, RenderOptions};
use crate::input::{parse_coefficients, InputError};
use crate::polynomial::{Polynomial, PolynomialError};

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("invalid {operand}: {source}")]
    Input {
        operand: &'static str,
        #[source]
        source: InputError,
    },
    #[error(transparent)]
    Polynomial(#[from] PolynomialError),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct Report<'a> {
    operation: Operation,
    p1: &'a Polynomial,
    p2: &'a Polynomial,
    #[serde(flatten)]
    outcome: &'a Outcome,
}

fn parse_operand(operand: &'static str, text: &str) -> Result<Polynomial, CalcError> {
    parse_coefficients(text).map_err(|source| CalcError::Input { operand, source })
}

/// Evaluates a single operation on two coefficient lines and formats the result,
/// either as text or as a JSON document.
pub fn calculate(
    operation: Operation,
    p1: &str,
    p2: &str,
    options: &RenderOptions,
    json: bool,
) -> Result<String, CalcError> {
    let p1 = parse_operand("P1", p1)?;
    let p2 = parse_operand("P2", p2)?;
    let outcome = operation.apply(&p1, &p2)?;

    if json {
        let report = Report {
            operation,
            p1: &p1,
            p2: &p2,
            outcome: &outcome,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let operands = format!(
        "({}) {} ({})",
        render(&p1, options),
        operation.symbol(),
        render(&p2, options)
    );
    let text = match outcome {
        Outcome::Value { result } => format!("{} = {}", operands, render(&result, options)),
        Outcome::Division { quotient, remainder } => format!(
            "{}\nquotient:  {}\nremainder: {}",
            operands,
            render(&quotient, options),
            render(&remainder, options)
        ),
    };
    Ok(text)
}
