//! The expression engine: editing state and the evaluate operation.
//!
//! The engine owns exactly two strings, the in-progress expression and the
//! previously evaluated one, and every public operation mutates them in
//! place, synchronously. Evaluation is all-or-nothing: a failure leaves both
//! strings untouched.

use serde::{Deserialize, Serialize};

use crate::core::evaluator::evaluate_expression;
use crate::core::{CalcResult, Operation};

/// Marker appended to an evaluated expression in the history line.
const HISTORY_MARKER: &str = " =";

/// The calculator's editing and evaluation state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Engine {
    /// In-progress expression, possibly empty.
    current: String,
    /// Last evaluated expression plus the trailing marker, or empty.
    previous: String,
}

impl Engine {
    /// Creates an engine with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The in-progress expression.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The previously evaluated expression with its trailing marker.
    #[must_use]
    pub fn previous(&self) -> &str {
        &self.previous
    }

    /// Text for the main display: the expression, or `"0"` when empty.
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.current.is_empty() {
            "0"
        } else {
            &self.current
        }
    }

    /// Text for the history line.
    #[must_use]
    pub fn history_text(&self) -> &str {
        &self.previous
    }

    /// Appends an edit character.
    ///
    /// A decimal point is validated against the trailing numeric run (the
    /// substring after the last operator character): at most one point per
    /// number, and a leading `0` is inserted when the run is empty, so `.`
    /// after `3+` produces `3+0.`. Every other character appends as-is.
    pub fn append(&mut self, ch: char) {
        if ch == '.' {
            let run = self.trailing_run();
            if run.contains('.') {
                return;
            }
            if run.is_empty() {
                self.current.push('0');
            }
        }
        self.current.push(ch);
    }

    /// The numeric run after the last operator character. Parentheses are
    /// not a boundary.
    fn trailing_run(&self) -> &str {
        self.current
            .rsplit(|c: char| Operation::from_char(c).is_some())
            .next()
            .unwrap_or(&self.current)
    }

    /// Removes the final character; no-op when empty.
    pub fn delete_last(&mut self) {
        self.current.pop();
    }

    /// Resets both the expression and the history line to empty.
    pub fn clear(&mut self) {
        self.current.clear();
        self.previous.clear();
    }

    /// Toggles the sign of the whole expression.
    ///
    /// If the expression already has the literal wrapped form `(0-X)`, one
    /// level is unwrapped back to `X`; otherwise the entire expression is
    /// wrapped as `(0-…)`. The toggle always applies to the whole
    /// expression, never just the last operand. No-op when empty.
    pub fn toggle_sign(&mut self) {
        if self.current.is_empty() {
            return;
        }
        if let Some(inner) = self
            .current
            .strip_prefix("(0-")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            self.current = inner.to_string();
        } else {
            self.current = format!("(0-{})", self.current);
        }
    }

    /// Appends the percent marker; no-op when empty.
    ///
    /// Unlike `append('.')` there is no trailing-run validation: a `%` may
    /// follow any character, including an operator or another `%`. Invalid
    /// placements fail at evaluation time instead.
    pub fn append_percent(&mut self) {
        if self.current.is_empty() {
            return;
        }
        self.current.push('%');
    }

    /// Evaluates the current expression.
    ///
    /// On success the history line becomes the expression with the trailing
    /// marker and the expression becomes the result's decimal string (empty
    /// input evaluates to an empty result). On failure the error is
    /// returned and both strings are left exactly as they were.
    pub fn evaluate(&mut self) -> CalcResult<()> {
        let result = evaluate_expression(&self.current)?;
        self.previous = format!("{}{HISTORY_MARKER}", self.current);
        self.current = result;
        Ok(())
    }

    /// Captures the state for serialization.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current: self.current.clone(),
            previous: self.previous.clone(),
        }
    }

    /// Restores an engine from a previously captured snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            current: snapshot.current,
            previous: snapshot.previous,
        }
    }
}

/// Serializable view of the engine state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// In-progress expression.
    pub current: String,
    /// Previous evaluated expression with its trailing marker.
    pub previous: String,
}
