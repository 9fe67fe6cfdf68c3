//! Drives the calculator the way the page does and prints what the display
//! would show after each step.
//!
//! Run with: `cargo run --example expression_demo`

use webcalc::wasm::{WasmCalculator, ERROR_FLASH_MS};

fn main() {
    let mut calc = WasmCalculator::new();

    let keys = ["2", "0", "0", "*", "5", "0", "%", "Enter"];
    for key in keys {
        calc.handle_key(key);
        println!("{key:>9}  →  {}", calc.output_text());
    }

    println!("history: {}", calc.history_text());

    calc.handle_key("Escape");
    for key in ["1", "/", "0", "Enter"] {
        calc.handle_key(key);
    }
    println!("after 1÷0: {}", calc.output_text());
    calc.advance(ERROR_FLASH_MS);
    println!("after the flash: {}", calc.output_text());
}
