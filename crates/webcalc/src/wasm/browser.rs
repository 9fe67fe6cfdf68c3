//! Browser bindings for the calculator.
//!
//! The JS glue forwards keydown events and button clicks, reads back
//! `output`/`history` after each call, and schedules the error-flash revert
//! with `setTimeout(dismiss_error, error_flash_ms)`.

// Conditionally compiled via #[cfg(feature = "wasm")] in mod.rs

use wasm_bindgen::prelude::*;
use web_sys::console;

use super::calculator::{WasmCalculator, ERROR_FLASH_MS};

/// The calculator as the browser sees it.
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    inner: WasmCalculator,
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a calculator with empty state.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            inner: WasmCalculator::new(),
        }
    }

    /// Main display text.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn output(&self) -> String {
        self.inner.output_text().to_string()
    }

    /// History line text.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn history(&self) -> String {
        self.inner.history_text().to_string()
    }

    /// Handles a keydown. Returns whether the key was consumed (the glue
    /// calls `preventDefault` when it was).
    pub fn handle_key(&mut self, key: &str, ctrl: bool, meta: bool) -> bool {
        self.inner.handle_key_with_modifiers(key, ctrl, meta)
    }

    /// Handles a button click by element id. Returns whether the id was a
    /// known button.
    pub fn handle_button(&mut self, id: &str) -> bool {
        self.inner.handle_button(id)
    }

    /// Whether the error flash is showing.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.inner.has_error()
    }

    /// Ends the error flash; the glue calls this from its timeout.
    pub fn dismiss_error(&mut self) {
        self.inner.dismiss_error();
    }

    /// Error flash duration in milliseconds.
    #[must_use]
    pub fn error_flash_ms(&self) -> u32 {
        ERROR_FLASH_MS as u32
    }

    /// State snapshot as JSON.
    #[must_use]
    pub fn state_json(&self) -> String {
        self.inner.state_json()
    }
}

/// Module start: install the panic hook and announce readiness.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"webcalc initialized".into());
}
