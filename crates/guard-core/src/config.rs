//! Guard configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GuardError, GuardResult};

/// Configuration for a form guard.
///
/// Defaults reproduce the stock landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Color applied to the message on success.
    #[serde(default = "default_success_color")]
    pub success_color: String,

    /// Class names of the guarded elements.
    #[serde(default)]
    pub classes: ClassNames,

    /// Feedback messages.
    #[serde(default)]
    pub messages: Messages,
}

fn default_success_color() -> String {
    "#38f276".to_string()
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            success_color: default_success_color(),
            classes: ClassNames::default(),
            messages: Messages::default(),
        }
    }
}

/// Class names of the form, email field and message surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassNames {
    #[serde(default = "default_form_class")]
    pub form: String,

    #[serde(default = "default_email_input_class")]
    pub email_input: String,

    #[serde(default = "default_message_class")]
    pub message: String,
}

fn default_form_class() -> String {
    "cta__form".to_string()
}

fn default_email_input_class() -> String {
    "email-input".to_string()
}

fn default_message_class() -> String {
    "error-message".to_string()
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            form: default_form_class(),
            email_input: default_email_input_class(),
            message: default_message_class(),
        }
    }
}

impl ClassNames {
    /// CSS selector for the form.
    pub fn form_selector(&self) -> String {
        format!(".{}", self.form)
    }

    /// CSS selector for the email field.
    pub fn email_input_selector(&self) -> String {
        format!(".{}", self.email_input)
    }

    /// CSS selector for the message surface.
    pub fn message_selector(&self) -> String {
        format!(".{}", self.message)
    }
}

/// Feedback message texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default = "default_empty_message")]
    pub empty: String,

    #[serde(default = "default_invalid_message")]
    pub invalid: String,

    #[serde(default = "default_success_message")]
    pub success: String,
}

fn default_empty_message() -> String {
    "This field cannot be empty".to_string()
}

fn default_invalid_message() -> String {
    "Please enter a valid email address".to_string()
}

fn default_success_message() -> String {
    "Success!".to_string()
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            empty: default_empty_message(),
            invalid: default_invalid_message(),
            success: default_success_message(),
        }
    }
}

/// Outcome of [`GuardConfig::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// True when there are no errors. Warnings are allowed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl GuardConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> GuardResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let content = std::fs::read_to_string(path).map_err(|source| GuardError::ConfigRead {
            path: display.clone(),
            source,
        })?;

        if is_json(path) {
            serde_json::from_str(&content).map_err(|e| GuardError::ConfigParse {
                path: display,
                message: e.to_string(),
            })
        } else {
            toml::from_str(&content).map_err(|e| GuardError::ConfigParse {
                path: display,
                message: e.to_string(),
            })
        }
    }

    /// Save config to a file, in the format implied by its extension.
    pub fn save(&self, path: impl AsRef<Path>) -> GuardResult<()> {
        let path = path.as_ref();

        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content).map_err(|source| GuardError::ConfigWrite {
            path: path.display().to_string(),
            source,
        })
    }

    /// Check the config for values that cannot work on a page.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        for (key, class) in [
            ("classes.form", &self.classes.form),
            ("classes.email_input", &self.classes.email_input),
            ("classes.message", &self.classes.message),
        ] {
            if class.is_empty() {
                report.errors.push(format!("{} is required", key));
            } else if class.chars().any(char::is_whitespace) {
                report
                    .errors
                    .push(format!("{} must be a single class name", key));
            } else if class.starts_with('.') {
                report
                    .errors
                    .push(format!("{} must not start with '.'", key));
            }
        }

        for (key, message) in [
            ("messages.empty", &self.messages.empty),
            ("messages.invalid", &self.messages.invalid),
            ("messages.success", &self.messages.success),
        ] {
            if message.is_empty() {
                report.errors.push(format!("{} must not be empty", key));
            }
        }

        let color = &self.success_color;
        if is_color_keyword(color) {
            report.warnings.push(format!(
                "success_color '{}' is not a hex color (e.g., #38f276)",
                color
            ));
        } else if !is_hex_color(color) && !is_color_function(color) {
            report.errors.push(format!(
                "success_color '{}' must be a single CSS color value",
                color
            ));
        }

        report
    }

    /// Fail with [`GuardError::InvalidConfig`] on the first validation error.
    pub fn ensure_valid(&self) -> GuardResult<()> {
        let report = self.validate();
        match report.errors.into_iter().next() {
            Some(error) => Err(GuardError::InvalidConfig(error)),
            None => Ok(()),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// A named color such as `green` or `rebeccapurple`.
fn is_color_keyword(color: &str) -> bool {
    !color.is_empty() && color.chars().all(|c| c.is_ascii_alphabetic())
}

/// `rgb()`, `rgba()`, `hsl()` or `hsla()` with numeric arguments only.
fn is_color_function(color: &str) -> bool {
    let Some((name, rest)) = color.split_once('(') else {
        return false;
    };
    let Some(args) = rest.strip_suffix(')') else {
        return false;
    };

    matches!(name, "rgb" | "rgba" | "hsl" | "hsla")
        && !args.trim().is_empty()
        && args
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | ',' | '.' | '%' | '/' | '-'))
}

/// Generate a default guard.toml config file.
pub fn generate_default_config() -> String {
    r##"# Form guard configuration

# Text color applied to the message on success.
success_color = "#38f276"

[classes]
form = "cta__form"
email_input = "email-input"
message = "error-message"

[messages]
empty = "This field cannot be empty"
invalid = "Please enter a valid email address"
success = "Success!"
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GuardConfig::default();

        assert_eq!(config.success_color, "#38f276");
        assert_eq!(config.classes.form_selector(), ".cta__form");
        assert_eq!(config.classes.email_input_selector(), ".email-input");
        assert_eq!(config.classes.message_selector(), ".error-message");
        assert_eq!(config.messages.success, "Success!");
    }

    #[test]
    fn test_generated_config_parses_to_default() {
        let config: GuardConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, GuardConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: GuardConfig = toml::from_str(
            r#"
[messages]
success = "Thanks!"
"#,
        )
        .unwrap();

        assert_eq!(config.messages.success, "Thanks!");
        assert_eq!(config.messages.empty, "This field cannot be empty");
        assert_eq!(config.classes, ClassNames::default());
        assert_eq!(config.success_color, "#38f276");
    }

    #[test]
    fn test_load_and_save_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guard.toml");

        let mut config = GuardConfig::default();
        config.classes.form = "signup".to_string();
        config.save(&path).unwrap();

        let loaded = GuardConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guard.json");
        std::fs::write(&path, r##"{"success_color": "#00ff00"}"##).unwrap();

        let loaded = GuardConfig::load(&path).unwrap();
        assert_eq!(loaded.success_color, "#00ff00");
        assert_eq!(loaded.messages, Messages::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GuardConfig::load(dir.path().join("nope.toml")).unwrap_err();

        assert!(matches!(err, GuardError::ConfigRead { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guard.toml");
        std::fs::write(&path, "success_color = [").unwrap();

        let err = GuardConfig::load(&path).unwrap_err();
        assert!(matches!(err, GuardError::ConfigParse { .. }));
    }

    #[test]
    fn test_validate_default_is_clean() {
        let report = GuardConfig::default().validate();

        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_validate_errors() {
        let mut config = GuardConfig::default();
        config.classes.form = String::new();
        config.classes.email_input = "email input".to_string();
        config.classes.message = ".error-message".to_string();
        config.messages.invalid = String::new();

        let report = config.validate();
        assert_eq!(report.errors.len(), 4);
        assert!(!report.is_valid());
        assert!(config.ensure_valid().is_err());
    }

    #[test]
    fn test_validate_color_warning() {
        let mut config = GuardConfig::default();
        config.success_color = "green".to_string();

        let report = config.validate();
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_validate_rejects_style_injection() {
        let mut config = GuardConfig::default();
        config.success_color = "red; display: none".to_string();

        let report = config.validate();
        assert!(!report.is_valid());
        assert!(report.errors[0].contains("success_color"));
        assert!(matches!(
            config.ensure_valid(),
            Err(GuardError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_color_forms() {
        for color in ["#38f276", "rgb(56, 242, 118)", "hsla(140 88% 58% / 0.9)"] {
            let mut config = GuardConfig::default();
            config.success_color = color.to_string();
            let report = config.validate();
            assert!(report.is_valid(), "{}", color);
            assert!(report.warnings.is_empty(), "{}", color);
        }

        for color in ["", "url(x)", "rgb(1,2,3);", "red !important", "#38f276;color:red"] {
            let mut config = GuardConfig::default();
            config.success_color = color.to_string();
            assert!(!config.validate().is_valid(), "{:?}", color);
        }
    }

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#38f276"));
        assert!(is_hex_color("#fff"));
        assert!(!is_hex_color("38f276"));
        assert!(!is_hex_color("#38f27"));
        assert!(!is_hex_color("#zzzzzz"));
    }
}
