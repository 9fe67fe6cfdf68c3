//! Mock DOM for browser-free testing of the rendering contract.

use std::collections::HashMap;

/// A DOM element as the tests see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element id
    pub id: String,
    /// Tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates an element with the given tag.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: sets the id.
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Builder: sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Builder: adds a class.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Builder: sets an attribute.
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Builder: adds a child.
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the text content.
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Checks for a class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Input events the calculator page sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// Clicked element id
        element_id: String,
    },
    /// Key press
    KeyPress {
        /// The key value (`"5"`, `"Enter"`, `"Backspace"`, …)
        key: String,
        /// Ctrl held
        ctrl: bool,
        /// Meta held
        meta: bool,
    },
}

impl DomEvent {
    /// A click event.
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// A plain key press.
    #[must_use]
    pub fn key_press(key: &str) -> Self {
        Self::KeyPress {
            key: key.to_string(),
            ctrl: false,
            meta: false,
        }
    }

    /// A key press with modifiers.
    #[must_use]
    pub fn key_press_with_modifiers(key: &str, ctrl: bool, meta: bool) -> Self {
        Self::KeyPress {
            key: key.to_string(),
            ctrl,
            meta,
        }
    }
}

/// In-memory DOM: element registry plus an event log.
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator page structure: the main output display and
    /// the history line.
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();
        dom.register_element(
            DomElement::new("div")
                .with_id("history")
                .with_class("history"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id("output")
                .with_class("output")
                .with_text("0"),
        );
        dom
    }

    /// Registers an element for id lookup. Elements without an id are
    /// ignored.
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Looks up an element by id.
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Looks up an element mutably.
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Records an event.
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// The recorded event log.
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears the event log.
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Sets element text by id.
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by id.
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }
}
