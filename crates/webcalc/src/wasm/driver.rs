//! Driver over the mock DOM: every interaction goes through the same
//! command surface the page uses, and the element text is re-synced after
//! each step so tests can assert on what the page would actually show.

use super::calculator::WasmCalculator;
use super::dom::{DomEvent, MockDom};
use crate::driver::CalculatorDriver;

/// Calculator plus mock DOM, kept in sync after every command.
#[derive(Debug)]
pub struct WasmDriver {
    calculator: WasmCalculator,
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver with the calculator page structure and keypad
    /// installed.
    #[must_use]
    pub fn new() -> Self {
        let calculator = WasmCalculator::new();
        let mut dom = MockDom::calculator();
        calculator.keypad().install_into(&mut dom);
        let mut driver = Self { calculator, dom };
        driver.sync_dom();
        driver
    }

    /// The calculator.
    #[must_use]
    pub fn calculator(&self) -> &WasmCalculator {
        &self.calculator
    }

    /// The mock DOM.
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Simulates a key press, recording the event.
    pub fn press_key_event(&mut self, key: &str, ctrl: bool, meta: bool) {
        self.dom
            .dispatch_event(DomEvent::key_press_with_modifiers(key, ctrl, meta));
        self.calculator.handle_key_with_modifiers(key, ctrl, meta);
        self.sync_dom();
    }

    /// Simulates a button click, recording the event.
    pub fn click_button_event(&mut self, id: &str) {
        self.dom.dispatch_event(DomEvent::click(id));
        self.calculator.handle_button(id);
        self.sync_dom();
    }

    /// Writes the display contract into the DOM elements.
    fn sync_dom(&mut self) {
        let output = self.calculator.output_text().to_string();
        let history = self.calculator.history_text().to_string();
        self.dom.set_element_text("output", &output);
        self.dom.set_element_text("history", &history);
    }

    /// The output element's text.
    #[must_use]
    pub fn output_element_text(&self) -> Option<&str> {
        self.dom.get_element_text("output")
    }

    /// The history element's text.
    #[must_use]
    pub fn history_element_text(&self) -> Option<&str> {
        self.dom.get_element_text("history")
    }
}

impl CalculatorDriver for WasmDriver {
    fn press_key(&mut self, key: &str) {
        self.press_key_event(key, false, false);
    }

    fn click_button(&mut self, id: &str) {
        self.click_button_event(id);
    }

    fn advance_time(&mut self, ms: u64) {
        self.calculator.advance(ms);
        self.sync_dom();
    }

    fn display(&self) -> String {
        self.calculator.output_text().to_string()
    }

    fn history(&self) -> String {
        self.calculator.history_text().to_string()
    }
}
