// ABOUTME: Error types for selector compilation and configuration handling.
// ABOUTME: The filtering path never returns these; they surface only from validation and loading.

use std::path::PathBuf;

use thiserror::Error;

/// A CSS selector that failed to compile.
///
/// Displays as the message shown to whoever edits the selector list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid CSS Selector: {selector}")]
pub struct SelectorError {
    /// The selector as written in the configuration.
    pub selector: String,
    /// Parser diagnostics, for logs only.
    pub reason: String,
}

impl SelectorError {
    pub fn new(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while loading or validating a filter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON or has the wrong shape.
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The selector list is empty.
    #[error("CSS Selectors field is required")]
    MissingSelectors,

    /// One or more selectors failed to compile.
    #[error("{}", join_messages(.0))]
    InvalidSelectors(Vec<SelectorError>),
}

impl ConfigError {
    /// Returns the per-selector failures, if this is a validation error.
    pub fn selector_errors(&self) -> &[SelectorError] {
        match self {
            ConfigError::InvalidSelectors(errors) => errors,
            _ => &[],
        }
    }
}

// Matches how the admin form stacks multiple messages in one error slot.
fn join_messages(errors: &[SelectorError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_error_display() {
        let err = SelectorError::new("###invalid", "unexpected token");
        assert_eq!(err.to_string(), "Invalid CSS Selector: ###invalid");
    }

    #[test]
    fn invalid_selectors_joins_with_br() {
        let err = ConfigError::InvalidSelectors(vec![
            SelectorError::new("##a", ""),
            SelectorError::new("[[b", ""),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid CSS Selector: ##a<br>Invalid CSS Selector: [[b"
        );
        assert_eq!(err.selector_errors().len(), 2);
    }

    #[test]
    fn missing_selectors_has_no_selector_errors() {
        assert!(ConfigError::MissingSelectors.selector_errors().is_empty());
    }
}
