//! Submit handling.

use crate::config::GuardConfig;
use crate::feedback::Feedback;
use crate::surface::{MessageSurface, SubmitIntent};

/// Guards a single email form.
///
/// Holds no state between submits: each call is evaluated from the value
/// passed in.
#[derive(Debug, Clone, Default)]
pub struct FormGuard {
    config: GuardConfig,
}

impl FormGuard {
    /// Create a guard with the given configuration.
    pub fn new(config: GuardConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Handle one submit attempt.
    ///
    /// Always suppresses the default submission, then shows the surface and
    /// writes the message for the evaluated state. The success color is the
    /// only style change.
    pub fn handle_submit<I, S>(&self, intent: &I, value: &str, surface: &mut S) -> Feedback
    where
        I: SubmitIntent + ?Sized,
        S: MessageSurface + ?Sized,
    {
        intent.prevent_default();

        let feedback = Feedback::evaluate(value);
        tracing::debug!(
            feedback = feedback.as_str(),
            value_len = value.len(),
            "form submit evaluated"
        );

        surface.show();
        if feedback.is_success() {
            surface.set_color(&self.config.success_color);
        }
        surface.set_text(feedback.message(&self.config.messages));

        feedback
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::config::Messages;
    use crate::surface::MessageState;

    #[derive(Default)]
    struct CountingIntent {
        suppressed: Cell<usize>,
    }

    impl SubmitIntent for CountingIntent {
        fn prevent_default(&self) {
            self.suppressed.set(self.suppressed.get() + 1);
        }
    }

    fn submit(value: &str) -> (Feedback, MessageState, usize) {
        let guard = FormGuard::default();
        let intent = CountingIntent::default();
        let mut state = MessageState::new();
        let feedback = guard.handle_submit(&intent, value, &mut state);
        (feedback, state, intent.suppressed.get())
    }

    #[test]
    fn test_empty_shows_empty_message() {
        let (feedback, state, suppressed) = submit("");

        assert_eq!(feedback, Feedback::Empty);
        assert!(state.visible);
        assert_eq!(state.text, "This field cannot be empty");
        assert!(state.color.is_none());
        assert_eq!(suppressed, 1);
    }

    #[test]
    fn test_invalid_shows_invalid_message() {
        let (feedback, state, suppressed) = submit("not-an-email");

        assert_eq!(feedback, Feedback::Invalid);
        assert!(state.visible);
        assert_eq!(state.text, "Please enter a valid email address");
        assert!(state.color.is_none());
        assert_eq!(suppressed, 1);
    }

    #[test]
    fn test_success_sets_color() {
        let (feedback, state, suppressed) = submit("user@example.com");

        assert_eq!(feedback, Feedback::Success);
        assert!(state.visible);
        assert_eq!(state.text, "Success!");
        assert_eq!(state.color.as_deref(), Some("#38f276"));
        assert_eq!(suppressed, 1);
    }

    #[test]
    fn test_lone_at_is_success() {
        let (feedback, state, _) = submit("@");

        assert_eq!(feedback, Feedback::Success);
        assert_eq!(state.text, "Success!");
    }

    #[test]
    fn test_every_submit_suppresses() {
        let guard = FormGuard::default();
        let intent = CountingIntent::default();
        let mut state = MessageState::new();

        for value in ["", "x", "x@y", "", "x@y"] {
            guard.handle_submit(&intent, value, &mut state);
        }

        assert_eq!(intent.suppressed.get(), 5);
    }

    #[test]
    fn test_color_persists_after_later_error() {
        let guard = FormGuard::default();
        let intent = CountingIntent::default();
        let mut state = MessageState::new();

        guard.handle_submit(&intent, "user@example.com", &mut state);
        guard.handle_submit(&intent, "oops", &mut state);

        assert_eq!(state.text, "Please enter a valid email address");
        assert_eq!(state.color.as_deref(), Some("#38f276"));
    }

    #[test]
    fn test_custom_config() {
        let config = GuardConfig {
            success_color: "green".to_string(),
            messages: Messages {
                empty: "Required".to_string(),
                invalid: "Bad email".to_string(),
                success: "Thanks".to_string(),
            },
            ..Default::default()
        };
        let guard = FormGuard::new(config);
        let intent = CountingIntent::default();
        let mut state = MessageState::new();

        guard.handle_submit(&intent, "", &mut state);
        assert_eq!(state.text, "Required");

        guard.handle_submit(&intent, "a@b", &mut state);
        assert_eq!(state.text, "Thanks");
        assert_eq!(state.color.as_deref(), Some("green"));
    }
}
