//! DOM implementations of the guard seams.

use guard_core::{MessageSurface, SubmitIntent};
use web_sys::{Event, HtmlElement};

/// Message surface backed by a DOM element.
///
/// Uses the element's inline `display` and `color` styles and its text
/// content.
#[derive(Debug, Clone)]
pub struct DomSurface {
    element: HtmlElement,
}

impl DomSurface {
    /// Wrap an element.
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    /// Get the underlying element.
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(err) = self.element.style().set_property(property, value) {
            tracing::warn!(property, value, error = ?err, "style update rejected");
        }
    }
}

impl MessageSurface for DomSurface {
    fn show(&mut self) {
        self.set_style("display", "block");
    }

    fn set_text(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn set_color(&mut self, color: &str) {
        self.set_style("color", color);
    }
}

/// Submit intent carried by a DOM event.
pub struct DomSubmit<'a>(&'a Event);

impl<'a> DomSubmit<'a> {
    /// Wrap an event.
    pub fn new(event: &'a Event) -> Self {
        Self(event)
    }
}

impl SubmitIntent for DomSubmit<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}
