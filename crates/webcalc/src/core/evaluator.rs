//! AST evaluation, result rounding, and display formatting.

use crate::core::parser::{AstNode, Parser};
use crate::core::{CalcError, CalcResult};

/// Decimal digits of precision kept in results; float noise beyond this is
/// rounded away (`0.1 + 0.2` comes out exactly `0.3`).
const RESULT_SCALE: f64 = 1e12;

/// Evaluates an expression string to its display form.
///
/// An empty or whitespace-only expression evaluates to the empty string;
/// that is a success, not an error. Everything else goes through the
/// tokenizer and parser; the result is rounded and formatted as a decimal
/// string.
pub fn evaluate_expression(input: &str) -> CalcResult<String> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }

    let ast = Parser::parse_str(input)?;
    let value = evaluate_ast(&ast)?;
    if !value.is_finite() {
        return Err(CalcError::NonFinite);
    }
    Ok(format_value(round_result(value)))
}

/// Evaluates an AST node to its numeric value.
pub fn evaluate_ast(node: &AstNode) -> CalcResult<f64> {
    match node {
        AstNode::Number(n) => Ok(*n),
        AstNode::Negate(inner) => Ok(-evaluate_ast(inner)?),
        AstNode::BinaryOp { left, op, right } => {
            let left_val = evaluate_ast(left)?;
            let right_val = evaluate_ast(right)?;
            op.apply(left_val, right_val)
        }
    }
}

/// Rounds to 12 decimal digits, nudged by an epsilon so values that are one
/// ulp under a clean decimal land on it. Values too large for the scaling
/// are returned unchanged; they carry no fractional noise to absorb.
fn round_result(value: f64) -> f64 {
    let scaled = (value + f64::EPSILON) * RESULT_SCALE;
    if scaled.is_finite() {
        scaled.round() / RESULT_SCALE
    } else {
        value
    }
}

/// Formats a value with the shortest decimal representation that round-trips.
fn format_value(value: f64) -> String {
    // -0.0 renders as "0"
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
