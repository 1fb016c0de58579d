//! Run field values through the guard.

use anyhow::Result;
use guard_core::{Feedback, FormGuard, MessageState, SubmitIntent};
use serde::Serialize;

use super::CheckArgs;
use crate::context::Context;

/// Submit intent for the command line; there is no page to navigate away from.
struct CliSubmit;

impl SubmitIntent for CliSubmit {
    fn prevent_default(&self) {
        tracing::trace!("default submission suppressed");
    }
}

/// Result of one submit.
#[derive(Debug, Serialize)]
pub struct CheckOutcome {
    pub value: String,
    pub feedback: Feedback,
    pub message: MessageState,
}

/// Run the check command.
pub fn run(args: CheckArgs, ctx: &Context) -> Result<()> {
    ctx.config.ensure_valid()?;

    let outcomes = evaluate(&FormGuard::new(ctx.config.clone()), &args.values, args.sequence);

    if ctx.output.is_json() {
        ctx.output.json(&outcomes);
        return Ok(());
    }

    ctx.output.header("Form guard feedback");
    for outcome in &outcomes {
        ctx.output
            .feedback(&outcome.value, outcome.feedback, &outcome.message.text);
        ctx.output.debug(&format!("style: {}", outcome.message.style_attr()));
    }

    Ok(())
}

/// Submit each value. With `sequence`, all submits share one surface.
pub fn evaluate(guard: &FormGuard, values: &[String], sequence: bool) -> Vec<CheckOutcome> {
    let mut shared = MessageState::new();

    values
        .iter()
        .map(|value| {
            let mut fresh = MessageState::new();
            let surface = if sequence { &mut shared } else { &mut fresh };
            let feedback = guard.handle_submit(&CliSubmit, value, surface);

            CheckOutcome {
                value: value.clone(),
                feedback,
                message: surface.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_evaluate_independent() {
        let guard = FormGuard::default();
        let outcomes = evaluate(&guard, &values(&["user@example.com", "nope", ""]), false);

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].feedback, Feedback::Success);
        assert_eq!(outcomes[1].feedback, Feedback::Invalid);
        assert_eq!(outcomes[2].feedback, Feedback::Empty);

        // Fresh surfaces never inherit the success color.
        assert!(outcomes[1].message.color.is_none());
    }

    #[test]
    fn test_evaluate_sequence_keeps_color() {
        let guard = FormGuard::default();
        let outcomes = evaluate(&guard, &values(&["user@example.com", "nope"]), true);

        assert_eq!(outcomes[1].message.text, "Please enter a valid email address");
        assert_eq!(outcomes[1].message.color.as_deref(), Some("#38f276"));
    }

    #[test]
    fn test_outcome_json_shape() {
        let guard = FormGuard::default();
        let outcomes = evaluate(&guard, &values(&[""]), false);
        let json = serde_json::to_value(&outcomes).unwrap();

        assert_eq!(json[0]["feedback"], "empty");
        assert_eq!(json[0]["message"]["visible"], true);
        assert_eq!(json[0]["message"]["text"], "This field cannot be empty");
    }
}
