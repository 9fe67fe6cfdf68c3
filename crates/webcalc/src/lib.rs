//! Browser calculator with a pure-Rust expression engine.
//!
//! The engine holds two pieces of state, the in-progress expression and the
//! previously evaluated one, and applies discrete editing commands (append
//! token, delete last, clear, toggle sign, append percent) plus an evaluate
//! operation backed by an explicit tokenizer and recursive-descent parser.
//! Around it sit the thin browser collaborators: a keypad model, a mock DOM
//! that keeps the rendering contract testable without a browser, and an
//! optional `wasm-bindgen` entry point behind the `wasm` feature.
//!
//! # Example
//!
//! ```rust
//! use webcalc::prelude::*;
//!
//! let mut engine = Engine::new();
//! for ch in "6×7".chars() {
//!     engine.append(ch);
//! }
//! engine.evaluate().unwrap();
//! assert_eq!(engine.current(), "42");
//! assert_eq!(engine.previous(), "6×7 =");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

/// Browser frontend. Always compiled so the mock DOM keeps the rendering
/// contract testable; real bindings are behind the `wasm` feature.
pub mod wasm;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::core::evaluator::evaluate_expression;
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{CalcError, CalcResult, Engine, Operation, Snapshot};
    pub use crate::driver::CalculatorDriver;
    pub use crate::wasm::{
        DomElement, DomEvent, Keypad, KeypadAction, MockDom, WasmCalculator, WasmDriver,
    };

    #[cfg(feature = "wasm")]
    pub use crate::wasm::BrowserCalculator;
}
