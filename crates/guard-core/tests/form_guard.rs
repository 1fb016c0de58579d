//! Behavioral properties of the form guard across arbitrary input.

use std::cell::Cell;

use guard_core::{Feedback, FormGuard, GuardConfig, MessageState, SubmitIntent};
use proptest::prelude::*;

#[derive(Default)]
struct CountingIntent {
    suppressed: Cell<usize>,
}

impl SubmitIntent for CountingIntent {
    fn prevent_default(&self) {
        self.suppressed.set(self.suppressed.get() + 1);
    }
}

fn submit_fresh(value: &str) -> (Feedback, MessageState) {
    let guard = FormGuard::new(GuardConfig::default());
    let mut state = MessageState::new();
    let feedback = guard.handle_submit(&CountingIntent::default(), value, &mut state);
    (feedback, state)
}

#[test]
fn surface_hidden_before_first_submit() {
    let state = MessageState::new();
    assert!(!state.visible);
}

#[test]
fn documented_examples() {
    let cases = [
        ("", Feedback::Empty, "This field cannot be empty"),
        ("not-an-email", Feedback::Invalid, "Please enter a valid email address"),
        ("user@example.com", Feedback::Success, "Success!"),
        ("@", Feedback::Success, "Success!"),
        ("a@", Feedback::Success, "Success!"),
    ];

    for (value, expected, text) in cases {
        let (feedback, state) = submit_fresh(value);
        assert_eq!(feedback, expected, "value {:?}", value);
        assert!(state.visible);
        assert_eq!(state.text, text);
    }
}

proptest! {
    #[test]
    fn any_value_without_at_is_invalid(value in "[^@]+") {
        let (feedback, state) = submit_fresh(&value);
        prop_assert_eq!(feedback, Feedback::Invalid);
        prop_assert!(state.color.is_none());
    }

    #[test]
    fn any_value_with_at_is_success(prefix in ".*", suffix in ".*") {
        let value = format!("{}@{}", prefix, suffix);
        let (feedback, state) = submit_fresh(&value);
        prop_assert_eq!(feedback, Feedback::Success);
        prop_assert_eq!(state.color.as_deref(), Some("#38f276"));
    }

    #[test]
    fn every_submit_suppresses_and_shows(values in proptest::collection::vec(".*", 1..16)) {
        let guard = FormGuard::default();
        let intent = CountingIntent::default();
        let mut state = MessageState::new();

        for value in &values {
            guard.handle_submit(&intent, value, &mut state);
            prop_assert!(state.visible);
        }

        prop_assert_eq!(intent.suppressed.get(), values.len());
    }

    #[test]
    fn resubmitting_same_value_is_idempotent(value in ".*") {
        let guard = FormGuard::default();
        let intent = CountingIntent::default();
        let mut state = MessageState::new();

        let first = guard.handle_submit(&intent, &value, &mut state);
        let after_first = state.clone();
        let second = guard.handle_submit(&intent, &value, &mut state);

        prop_assert_eq!(first, second);
        prop_assert_eq!(after_first, state);
    }

    #[test]
    fn text_matches_exactly_one_message(value in ".*") {
        let config = GuardConfig::default();
        let (feedback, state) = submit_fresh(&value);

        let matches = [
            &config.messages.empty,
            &config.messages.invalid,
            &config.messages.success,
        ]
        .iter()
        .filter(|m| **m == &state.text)
        .count();

        prop_assert_eq!(matches, 1);
        prop_assert_eq!(state.text.as_str(), feedback.message(&config.messages));
    }
}
