//! Operand evaluation and result formatting.
//!
//! Applies a pending operation to the two textual operands held by the
//! engine and renders the result the way the display expects it.

use super::Operator;
use thiserror::Error;

/// Number of decimal places results are rounded to before formatting.
const ROUND_PLACES: usize = 10;

/// Results with a larger magnitude are shown in scientific notation.
const SCIENTIFIC_UPPER: f64 = 1e15;

/// Nonzero results with a smaller magnitude are shown in scientific notation.
const SCIENTIFIC_LOWER: f64 = 1e-10;

/// Fractional digits kept in scientific notation.
const SCIENTIFIC_DIGITS: usize = 5;

/// Why a calculation could not produce a value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("invalid operand {0:?}")]
    InvalidOperand(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not a finite number")]
    Overflow,
}

/// Evaluate `lhs op rhs` and format the result for display.
pub fn evaluate(lhs: &str, op: Operator, rhs: &str) -> Result<String, CalcError> {
    let lhs = parse_operand(lhs)?;
    let rhs = parse_operand(rhs)?;

    if op == Operator::Divide && rhs == 0.0 {
        return Err(CalcError::DivisionByZero);
    }

    let value = op.apply(lhs, rhs);
    if !value.is_finite() {
        return Err(CalcError::Overflow);
    }

    Ok(format_result(round_to_places(value, ROUND_PLACES)))
}

fn parse_operand(text: &str) -> Result<f64, CalcError> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CalcError::InvalidOperand(text.to_string()))
}

/// Round to a fixed number of decimal places.
///
/// Goes through the exact decimal expansion so the rounding happens on the
/// decimal value rather than on a scaled binary one.
fn round_to_places(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Format a rounded result for the display.
pub fn format_result(value: f64) -> String {
    let magnitude = value.abs();

    if magnitude > SCIENTIFIC_UPPER || (value != 0.0 && magnitude < SCIENTIFIC_LOWER) {
        format_scientific(value)
    } else if value.fract() == 0.0 {
        // Magnitude is at most 1e15 here, well inside i64. Also folds -0 to 0.
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Scientific notation with a signed, at least two digit exponent
/// (`1.23457e+16`, `-5.00000e-11`).
fn format_scientific(value: f64) -> String {
    let formatted = format!("{value:.SCIENTIFIC_DIGITS$e}");

    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => formatted,
    }
}
