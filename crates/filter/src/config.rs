// ABOUTME: Filter configuration: the newline-separated selector list, target fields, and stage weights.
// ABOUTME: Loads from JSON and runs the same checks the configuration form applies before saving.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::processor::Stage;
use crate::selectors::split_selectors;
use crate::validate::validation_errors;

/// Persisted configuration for the element filter.
///
/// ```json
/// {
///   "css_selectors": ".sidebar-filters\r\nnav",
///   "fields": ["body", "title"],
///   "weights": { "preprocess_index": -10 }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// One CSS selector per line.
    #[serde(default)]
    pub css_selectors: String,
    /// Fields to filter. `None` means every text field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    /// Per-stage weight overrides.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub weights: BTreeMap<Stage, i32>,
}

impl FilterConfig {
    /// Creates a configuration from a raw selector list.
    pub fn new(css_selectors: impl Into<String>) -> Self {
        Self {
            css_selectors: css_selectors.into(),
            ..Self::default()
        }
    }

    /// Creates a configuration from individual selectors, joined with CRLF.
    pub fn from_selectors<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        for selector in selectors {
            config.push_selector(selector.as_ref());
        }
        config
    }

    /// Parses a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Restricts filtering to the named fields.
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Overrides the weight of one stage.
    pub fn with_weight(mut self, stage: Stage, weight: i32) -> Self {
        self.weights.insert(stage, weight);
        self
    }

    /// Appends a selector to the end of the list.
    pub fn push_selector(&mut self, selector: &str) {
        if !self.css_selectors.is_empty() && !self.css_selectors.ends_with('\n') {
            self.css_selectors.push_str("\r\n");
        }
        self.css_selectors.push_str(selector);
    }

    /// The non-blank selectors, in order.
    pub fn selectors(&self) -> Vec<String> {
        split_selectors(&self.css_selectors)
    }

    /// Checks the configuration before it is saved.
    ///
    /// The selector list is required, and every selector in it must compile.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let selectors = self.selectors();
        if selectors.is_empty() {
            return Err(ConfigError::MissingSelectors);
        }
        let errors = validation_errors(&selectors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::InvalidSelectors(errors))
        }
    }
}
