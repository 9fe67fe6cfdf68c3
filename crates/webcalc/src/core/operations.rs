//! The calculator's four-operator arithmetic alphabet.

use crate::core::{CalcError, CalcResult};

/// Binary operator recognized by the expression engine.
///
/// Each operator has two spellings: the ASCII form delivered by the keyboard
/// and the display glyph shown on the keypad. Both are accepted everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-` / `−`)
    Subtract,
    /// Multiplication (`*` / `×`)
    Multiply,
    /// Division (`/` / `÷`)
    Divide,
}

impl Operation {
    /// ASCII symbol used during evaluation.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Glyph shown on the keypad and in the expression display.
    #[must_use]
    pub const fn glyph(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Precedence level (higher binds tighter).
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    /// Maps an input character, accepting both spellings.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operation to two operands.
    ///
    /// Division by zero and non-finite results are failures; every value
    /// this returns is finite.
    pub fn apply(&self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };
        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::NonFinite)
        }
    }
}
