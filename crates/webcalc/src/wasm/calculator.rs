//! Command dispatch and the display contract.
//!
//! `WasmCalculator` sits between the input collaborators (keypad buttons,
//! keyboard) and the engine, and produces the two strings the page shows.
//! Evaluation failures surface only as a transient error indicator in the
//! main display; engine state is never touched by a failure.

use super::keypad::{Keypad, KeypadAction};
use crate::core::{Engine, Snapshot};

/// How long the error indicator stays up before the display reverts,
/// in milliseconds.
pub const ERROR_FLASH_MS: u64 = 900;

/// Text shown in the main display while the error flash is active.
const ERROR_TEXT: &str = "Error";

/// Browser-ready calculator: engine, keypad, and the error-flash clock.
#[derive(Debug, Default)]
pub struct WasmCalculator {
    engine: Engine,
    keypad: Keypad,
    error_remaining_ms: Option<u64>,
}

impl WasmCalculator {
    /// Creates a calculator with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The keypad model.
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Applies a keypad command.
    ///
    /// Any command issued while the error flash is pending repaints the
    /// normal display immediately; commands are never queued or blocked by
    /// the flash.
    pub fn apply(&mut self, action: KeypadAction) {
        match action {
            KeypadAction::Percent => self.engine.append_percent(),
            KeypadAction::Negate => self.engine.toggle_sign(),
            KeypadAction::Delete => self.engine.delete_last(),
            KeypadAction::Clear => self.engine.clear(),
            KeypadAction::Equals => {
                if self.engine.evaluate().is_err() {
                    self.error_remaining_ms = Some(ERROR_FLASH_MS);
                    return;
                }
            }
            _ => {
                if let Some(ch) = action.to_char() {
                    self.engine.append(ch);
                }
            }
        }
        self.error_remaining_ms = None;
    }

    /// Handles a button click by element id. Returns whether the id was a
    /// known button.
    pub fn handle_button(&mut self, id: &str) -> bool {
        match self.keypad.handle_click(id) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }

    /// Handles a plain keyboard key. Returns whether the key was mapped.
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.handle_key_with_modifiers(key, false, false)
    }

    /// Handles a keyboard key with modifier state. Keys pressed with Ctrl
    /// or Meta held are left to the browser.
    pub fn handle_key_with_modifiers(&mut self, key: &str, ctrl: bool, meta: bool) -> bool {
        if ctrl || meta {
            return false;
        }
        match Keypad::key_to_action(key) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }

    /// Advances the error-flash clock. Once the flash duration has fully
    /// elapsed the normal display is restored.
    pub fn advance(&mut self, ms: u64) {
        if let Some(remaining) = self.error_remaining_ms.take() {
            if ms < remaining {
                self.error_remaining_ms = Some(remaining - ms);
            }
        }
    }

    /// Whether the error flash is currently showing.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error_remaining_ms.is_some()
    }

    /// Ends the error flash immediately (the browser glue's timeout path).
    pub fn dismiss_error(&mut self) {
        self.error_remaining_ms = None;
    }

    /// Main display text: the error indicator while flashing, otherwise the
    /// expression, or `"0"` when the expression is empty.
    #[must_use]
    pub fn output_text(&self) -> &str {
        if self.has_error() {
            ERROR_TEXT
        } else {
            self.engine.display_text()
        }
    }

    /// History line text.
    #[must_use]
    pub fn history_text(&self) -> &str {
        self.engine.history_text()
    }

    /// Serializable state snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// State snapshot as JSON (for browser interop).
    #[must_use]
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}
