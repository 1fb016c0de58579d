//! Reactive message surface.

use guard_core::{MessageState, MessageSurface};
use leptos::prelude::*;

/// Message surface stored in a signal.
///
/// Copying the handle shares the same signal, so the submit handler and the
/// view observe one state.
#[derive(Debug, Clone, Copy)]
pub struct SignalSurface {
    state: RwSignal<MessageState>,
}

impl SignalSurface {
    /// Create a hidden surface.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(MessageState::new()),
        }
    }

    /// Get the underlying signal.
    pub fn state(&self) -> RwSignal<MessageState> {
        self.state
    }

    /// Tracked CSS `display` value.
    pub fn display(&self) -> &'static str {
        self.state.with(MessageState::display)
    }

    /// Tracked color override, empty when none was applied.
    pub fn color(&self) -> String {
        self.state
            .with(|state| state.color.clone().unwrap_or_default())
    }

    /// Tracked message text.
    pub fn text(&self) -> String {
        self.state.with(|state| state.text.clone())
    }
}

impl Default for SignalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageSurface for SignalSurface {
    fn show(&mut self) {
        self.state.update(|state| state.show());
    }

    fn set_text(&mut self, text: &str) {
        self.state.update(|state| state.set_text(text));
    }

    fn set_color(&mut self, color: &str) {
        self.state.update(|state| state.set_color(color));
    }
}
