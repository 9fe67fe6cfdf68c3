//! Keypad model: the button grid and the keyboard command mapping.

use super::dom::{DomElement, MockDom};

/// Commands a keypad button or keyboard key can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadAction {
    /// Insert a digit (0-9)
    Digit(u8),
    /// Insert a decimal point (validated by the engine)
    Decimal,
    /// Insert an operator glyph
    Operator(char),
    /// Open parenthesis
    OpenParen,
    /// Close parenthesis
    CloseParen,
    /// Append the percent marker
    Percent,
    /// Toggle the sign of the whole expression
    Negate,
    /// Delete the last character
    Delete,
    /// Clear all state
    Clear,
    /// Evaluate the expression
    Equals,
}

impl KeypadAction {
    /// The character this action inserts, for insert-type actions.
    /// Command actions (percent, negate, delete, clear, equals) return
    /// `None`; they go through their own engine operations.
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            Self::Operator(op) => Some(*op),
            Self::OpenParen => Some('('),
            Self::CloseParen => Some(')'),
            _ => None,
        }
    }

    /// The button label.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.to_string(),
            Self::OpenParen => "(".to_string(),
            Self::CloseParen => ")".to_string(),
            Self::Percent => "%".to_string(),
            Self::Negate => "±".to_string(),
            Self::Delete => "⌫".to_string(),
            Self::Clear => "C".to_string(),
            Self::Equals => "=".to_string(),
        }
    }
}

/// A single keypad button definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The command this button issues
    pub action: KeypadAction,
    /// DOM element id
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a button definition with its derived element id.
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        let id = match action {
            KeypadAction::Digit(d) => format!("btn-{d}"),
            KeypadAction::Decimal => "btn-decimal".to_string(),
            KeypadAction::Operator(op) => format!("btn-{}", op_name(op)),
            KeypadAction::OpenParen => "btn-open-paren".to_string(),
            KeypadAction::CloseParen => "btn-close-paren".to_string(),
            KeypadAction::Percent => "btn-percent".to_string(),
            KeypadAction::Negate => "btn-negate".to_string(),
            KeypadAction::Delete => "btn-delete".to_string(),
            KeypadAction::Clear => "btn-clear".to_string(),
            KeypadAction::Equals => "btn-equals".to_string(),
        };
        Self {
            action,
            id,
            row,
            col,
        }
    }
}

/// `data-action` value for a command button.
fn action_name(action: KeypadAction) -> &'static str {
    match action {
        KeypadAction::Percent => "percent",
        KeypadAction::Negate => "negate",
        KeypadAction::Delete => "delete",
        KeypadAction::Clear => "clear",
        KeypadAction::Equals => "evaluate",
        _ => "insert",
    }
}

/// Element-id fragment for an operator glyph.
fn op_name(op: char) -> &'static str {
    match op {
        '+' => "plus",
        '-' | '−' => "minus",
        '*' | '×' => "times",
        '/' | '÷' => "divide",
        _ => "op",
    }
}

/// The calculator keypad.
///
/// Layout:
/// ```text
/// [ C ] [ ± ] [ % ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ − ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ ( ] [ 0 ] [ ) ] [ . ]
///       [ ⌫ ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButtonDef>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: C ± % ÷
            KeypadButtonDef::new(KeypadAction::Clear, 0, 0),
            KeypadButtonDef::new(KeypadAction::Negate, 0, 1),
            KeypadButtonDef::new(KeypadAction::Percent, 0, 2),
            KeypadButtonDef::new(KeypadAction::Operator('÷'), 0, 3),
            // Row 1: 7 8 9 ×
            KeypadButtonDef::new(KeypadAction::Digit(7), 1, 0),
            KeypadButtonDef::new(KeypadAction::Digit(8), 1, 1),
            KeypadButtonDef::new(KeypadAction::Digit(9), 1, 2),
            KeypadButtonDef::new(KeypadAction::Operator('×'), 1, 3),
            // Row 2: 4 5 6 −
            KeypadButtonDef::new(KeypadAction::Digit(4), 2, 0),
            KeypadButtonDef::new(KeypadAction::Digit(5), 2, 1),
            KeypadButtonDef::new(KeypadAction::Digit(6), 2, 2),
            KeypadButtonDef::new(KeypadAction::Operator('−'), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButtonDef::new(KeypadAction::Digit(1), 3, 0),
            KeypadButtonDef::new(KeypadAction::Digit(2), 3, 1),
            KeypadButtonDef::new(KeypadAction::Digit(3), 3, 2),
            KeypadButtonDef::new(KeypadAction::Operator('+'), 3, 3),
            // Row 4: ( 0 ) .
            KeypadButtonDef::new(KeypadAction::OpenParen, 4, 0),
            KeypadButtonDef::new(KeypadAction::Digit(0), 4, 1),
            KeypadButtonDef::new(KeypadAction::CloseParen, 4, 2),
            KeypadButtonDef::new(KeypadAction::Decimal, 4, 3),
            // Row 5: ⌫ = (sparse row)
            KeypadButtonDef::new(KeypadAction::Delete, 5, 1),
            KeypadButtonDef::new(KeypadAction::Equals, 5, 2),
        ];

        Self {
            buttons,
            rows: 6,
            cols: 4,
        }
    }

    /// Number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions as (rows, cols). The last row is sparse.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All button definitions.
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// The button at a grid position, if that cell is populated.
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element id.
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by the action it issues.
    #[must_use]
    pub fn find_button_by_action(&self, action: KeypadAction) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Resolves a button click to its action.
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_button_by_id(element_id).map(|b| b.action)
    }

    /// Maps a keyboard key to a command.
    ///
    /// ASCII `*` and `/` enter as the `×`/`÷` display glyphs while `-`
    /// stays ASCII, matching what each key appends to the expression.
    #[must_use]
    pub fn key_to_action(key: &str) -> Option<KeypadAction> {
        match key {
            "0" => Some(KeypadAction::Digit(0)),
            "1" => Some(KeypadAction::Digit(1)),
            "2" => Some(KeypadAction::Digit(2)),
            "3" => Some(KeypadAction::Digit(3)),
            "4" => Some(KeypadAction::Digit(4)),
            "5" => Some(KeypadAction::Digit(5)),
            "6" => Some(KeypadAction::Digit(6)),
            "7" => Some(KeypadAction::Digit(7)),
            "8" => Some(KeypadAction::Digit(8)),
            "9" => Some(KeypadAction::Digit(9)),
            "." => Some(KeypadAction::Decimal),
            "+" => Some(KeypadAction::Operator('+')),
            "-" => Some(KeypadAction::Operator('-')),
            "*" => Some(KeypadAction::Operator('×')),
            "/" => Some(KeypadAction::Operator('÷')),
            "%" => Some(KeypadAction::Percent),
            "(" => Some(KeypadAction::OpenParen),
            ")" => Some(KeypadAction::CloseParen),
            "Enter" | "=" => Some(KeypadAction::Equals),
            "Backspace" => Some(KeypadAction::Delete),
            "Escape" => Some(KeypadAction::Clear),
            _ => None,
        }
    }

    /// Creates DOM elements for all keypad buttons. Insert-type buttons
    /// carry the character they insert as `data-value`; command buttons
    /// carry their command as `data-action`.
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                let elem = DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&btn.action.label())
                    .with_class("btn");
                match btn.action.to_char() {
                    Some(ch) => elem.with_attr("data-value", &ch.to_string()),
                    None => elem.with_attr("data-action", action_name(btn.action)),
                }
            })
            .collect()
    }

    /// Builds the button container element with all buttons as children.
    #[must_use]
    pub fn create_container_element(&self) -> DomElement {
        let mut container = DomElement::new("div")
            .with_id("buttons")
            .with_class("buttons");
        for btn in self.create_dom_elements() {
            container = container.with_child(btn);
        }
        container
    }

    /// Registers the button container and every button with a mock DOM.
    pub fn install_into(&self, dom: &mut MockDom) {
        dom.register_element(self.create_container_element());
        for btn in self.create_dom_elements() {
            dom.register_element(btn);
        }
    }
}
