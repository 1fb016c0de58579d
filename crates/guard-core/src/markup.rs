//! HTML markup for the guarded form.
//!
//! The rendered class names come from [`GuardConfig`], so a page served with
//! this markup is always bindable by the same config.

use crate::config::GuardConfig;

/// Visible copy of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormCopy {
    /// Placeholder of the email field.
    pub placeholder: String,
    /// Submit button label.
    pub button: String,
}

impl Default for FormCopy {
    fn default() -> Self {
        Self {
            placeholder: "email@example.com".to_string(),
            button: "Get Started For Free".to_string(),
        }
    }
}

/// Render the guarded form.
///
/// The message paragraph starts hidden. Browser validation is disabled with
/// `novalidate` so every submit reaches the guard.
pub fn render_cta_form(config: &GuardConfig, copy: &FormCopy) -> String {
    format!(
        r#"<form class="{form}" novalidate>
    <input class="{input}" type="email" name="email" placeholder="{placeholder}" aria-label="Email address">
    <p class="{message}" style="display: none"></p>
    <button type="submit">{button}</button>
</form>"#,
        form = html_escape(&config.classes.form),
        input = html_escape(&config.classes.email_input),
        placeholder = html_escape(&copy.placeholder),
        message = html_escape(&config.classes.message),
        button = html_escape(&copy.button),
    )
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
