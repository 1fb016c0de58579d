//! Error types for the form guard.

use thiserror::Error;

/// Errors raised while binding or configuring a form guard.
///
/// The submit path itself never fails: empty and invalid input are feedback
/// states, not errors.
#[derive(Error, Debug)]
pub enum GuardError {
    /// No element matched the selector.
    #[error("Element not found: {selector}")]
    ElementNotFound { selector: String },

    /// An element matched but has the wrong type.
    #[error("Element {selector} is not a {expected}")]
    ElementType { selector: String, expected: String },

    /// The browser rejected a DOM operation.
    #[error("DOM error: {0}")]
    Dom(String),

    /// Config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed.
    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// Config file could not be written.
    #[error("Failed to write config file {path}: {source}")]
    ConfigWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Config failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for GuardError {
    fn from(err: serde_json::Error) -> Self {
        GuardError::Serialize(err.to_string())
    }
}

impl From<toml::ser::Error> for GuardError {
    fn from(err: toml::ser::Error) -> Self {
        GuardError::Serialize(err.to_string())
    }
}

/// Result alias for guard operations.
pub type GuardResult<T> = Result<T, GuardError>;
