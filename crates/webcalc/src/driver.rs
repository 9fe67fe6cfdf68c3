//! Unified test driver: write the interaction scripts once, run them against
//! any frontend that implements [`CalculatorDriver`].

use crate::wasm::ERROR_FLASH_MS;

/// Abstract driver for calculator interactions.
///
/// The driver speaks the same command vocabulary the page does (keyboard
/// keys and button element ids) and reads back the two display strings.
pub trait CalculatorDriver {
    /// Presses a keyboard key (`"5"`, `"Enter"`, `"Backspace"`, …).
    fn press_key(&mut self, key: &str);

    /// Clicks a keypad button by element id.
    fn click_button(&mut self, id: &str);

    /// Advances the wall clock, driving the error-flash revert.
    fn advance_time(&mut self, ms: u64);

    /// The main display text.
    fn display(&self) -> String;

    /// The history line text.
    fn history(&self) -> String;
}

/// Presses one key per character.
pub fn type_keys<D: CalculatorDriver>(driver: &mut D, keys: &str) {
    for ch in keys.chars() {
        driver.press_key(&ch.to_string());
    }
}

// ===== Verification scripts =====
// These run against ANY CalculatorDriver implementation.

/// Verifies the four operations and precedence through the keyboard.
pub fn verify_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    type_keys(driver, "2+3");
    driver.press_key("Enter");
    assert_eq!(driver.display(), "5");
    assert_eq!(driver.history(), "2+3 =");
    driver.press_key("Escape");

    type_keys(driver, "2+3*4");
    driver.press_key("Enter");
    assert_eq!(driver.display(), "14");
    driver.press_key("Escape");

    type_keys(driver, "(2+3)*4");
    driver.press_key("Enter");
    assert_eq!(driver.display(), "20");
    driver.press_key("Escape");

    type_keys(driver, "10/4");
    driver.press_key("Enter");
    assert_eq!(driver.display(), "2.5");
    driver.press_key("Escape");
}

/// Verifies the editing rules: decimal-point handling, delete, sign toggle.
pub fn verify_editing<D: CalculatorDriver>(driver: &mut D) {
    // Point after an operator gets a leading zero
    type_keys(driver, "3+.");
    assert_eq!(driver.display(), "3+0.");
    driver.press_key("Escape");

    // Second point in the same run is ignored
    type_keys(driver, "3.5.");
    assert_eq!(driver.display(), "3.5");
    driver.press_key("Escape");

    // Delete last character; deleting on empty is a no-op
    type_keys(driver, "12");
    driver.press_key("Backspace");
    assert_eq!(driver.display(), "1");
    driver.press_key("Backspace");
    driver.press_key("Backspace");
    assert_eq!(driver.display(), "0");

    // Sign toggle wraps and unwraps the whole expression
    driver.press_key("5");
    driver.click_button("btn-negate");
    assert_eq!(driver.display(), "(0-5)");
    driver.click_button("btn-negate");
    assert_eq!(driver.display(), "5");
    driver.press_key("Escape");
}

/// Verifies percent semantics: always "of 100".
pub fn verify_percent<D: CalculatorDriver>(driver: &mut D) {
    type_keys(driver, "50");
    driver.click_button("btn-percent");
    driver.press_key("Enter");
    assert_eq!(driver.display(), "0.5");
    driver.press_key("Escape");

    type_keys(driver, "200*50%");
    driver.press_key("Enter");
    assert_eq!(driver.display(), "100");
    driver.press_key("Escape");
}

/// Verifies the transient error indicator and that state survives failures.
pub fn verify_error_flash<D: CalculatorDriver>(driver: &mut D) {
    type_keys(driver, "10/0");
    driver.press_key("Enter");
    assert_eq!(driver.display(), "Error");
    assert_eq!(driver.history(), "");

    driver.advance_time(ERROR_FLASH_MS);
    assert_eq!(driver.display(), "10÷0");
    driver.press_key("Escape");
}

/// Verifies that a result seeds the next calculation.
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    type_keys(driver, "6*7");
    driver.press_key("Enter");
    assert_eq!(driver.display(), "42");

    type_keys(driver, "+8");
    driver.press_key("Enter");
    assert_eq!(driver.display(), "50");
    assert_eq!(driver.history(), "42+8 =");
    driver.press_key("Escape");
}

/// Runs every verification script.
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_arithmetic(driver);
    verify_editing(driver);
    verify_percent(driver);
    verify_error_flash(driver);
    verify_chaining(driver);
}
