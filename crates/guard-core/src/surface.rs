//! Seams between the guard and the page it runs on.

use serde::{Deserialize, Serialize};

/// A display region for feedback text.
///
/// Implementations mutate only what the guard asks for. In particular the
/// color is never reset, so a success color stays applied if a later submit
/// shows an error.
pub trait MessageSurface {
    /// Make the surface visible.
    fn show(&mut self);

    /// Replace the text content.
    fn set_text(&mut self, text: &str);

    /// Override the text color.
    fn set_color(&mut self, color: &str);
}

impl<S: MessageSurface + ?Sized> MessageSurface for &mut S {
    fn show(&mut self) {
        (**self).show();
    }

    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }

    fn set_color(&mut self, color: &str) {
        (**self).set_color(color);
    }
}

/// The user action that would otherwise submit the form.
pub trait SubmitIntent {
    /// Suppress the default navigation/submission.
    fn prevent_default(&self);
}

/// In-memory message surface.
///
/// Starts hidden with no text and no color override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageState {
    /// Whether the surface is shown.
    pub visible: bool,
    /// Current text content.
    pub text: String,
    /// Color override, if one was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl MessageState {
    /// Create a hidden, empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// CSS `display` value for the current visibility.
    pub fn display(&self) -> &'static str {
        if self.visible {
            "block"
        } else {
            "none"
        }
    }

    /// Inline `style` attribute for the current state.
    pub fn style_attr(&self) -> String {
        match &self.color {
            Some(color) => format!("display: {}; color: {}", self.display(), color),
            None => format!("display: {}", self.display()),
        }
    }
}

impl MessageSurface for MessageState {
    fn show(&mut self) {
        self.visible = true;
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_color(&mut self, color: &str) {
        self.color = Some(color.to_string());
    }
}
