//! Feedback taxonomy for a submit attempt.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Messages;

/// The feedback state applied after a submit attempt.
///
/// Exactly one state is active after any submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    /// The field was empty.
    Empty,
    /// The field has no `@`.
    Invalid,
    /// The field contains an `@`.
    Success,
}

impl Feedback {
    /// Classify a raw field value.
    ///
    /// The value is taken as-is: no trimming, so `" "` is `Invalid`, not
    /// `Empty`. Presence of `@` anywhere is the only validity criterion.
    pub fn evaluate(value: &str) -> Self {
        if value.is_empty() {
            Self::Empty
        } else if !value.contains('@') {
            Self::Invalid
        } else {
            Self::Success
        }
    }

    /// Message text for this state.
    pub fn message<'a>(&self, messages: &'a Messages) -> &'a str {
        match self {
            Self::Empty => &messages.empty,
            Self::Invalid => &messages.invalid,
            Self::Success => &messages.success,
        }
    }

    /// Whether this state applies the affirmative color.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Lowercase name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Invalid => "invalid",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
