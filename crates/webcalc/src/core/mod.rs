//! Core expression engine: state, lexing, parsing, evaluation.

pub mod engine;
pub mod evaluator;
mod operations;
pub mod parser;

pub use engine::{Engine, Snapshot};
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// Evaluation failure.
///
/// All variants surface identically at the display boundary as a single
/// transient error indicator; the distinctions are internal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A character outside the arithmetic alphabet.
    #[error("invalid character '{0}' in expression")]
    InvalidCharacter(char),
    /// The expression does not parse as arithmetic.
    #[error("invalid expression: {0}")]
    Parse(String),
    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The computed value is not a finite number.
    #[error("result is not a finite number")]
    NonFinite,
}
