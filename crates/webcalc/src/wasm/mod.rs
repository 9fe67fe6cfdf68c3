//! Browser frontend for the calculator.
//!
//! The mock DOM keeps the full rendering contract testable without browser
//! bindings; the real `wasm-bindgen` entry point is behind the `wasm`
//! feature.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use calculator::{WasmCalculator, ERROR_FLASH_MS};
pub use dom::{DomElement, DomEvent, MockDom};
pub use driver::WasmDriver;
pub use keypad::{Keypad, KeypadAction, KeypadButtonDef};
