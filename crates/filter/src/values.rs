// ABOUTME: Field value representations handed over by the indexing pipeline.
// ABOUTME: Unwraps plain strings and structured text values so the stripper only ever sees strings.

use serde::{Deserialize, Serialize};

use crate::stripper::ElementStripper;

/// Read and write access to the text carried by a structured value.
pub trait TextAccess {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: String);
}

/// A structured text value as produced by text-typed fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextValue {
    /// The current, possibly processed, text.
    pub text: String,
    /// The text as it was first indexed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
}

impl TextValue {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            original_text: Some(text.clone()),
            text,
        }
    }
}

impl TextAccess for TextValue {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

/// One value of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A bare string, e.g. a `string` field or a highlighted snippet.
    Plain(String),
    /// A structured text value.
    Text(TextValue),
    /// Anything else (numbers, dates, flags). Never filtered.
    Other(serde_json::Value),
}

impl FieldValue {
    /// Filters the text inside this value in place.
    ///
    /// Returns true if a string was passed through the stripper.
    pub fn filter_with(&mut self, stripper: &ElementStripper) -> bool {
        match self {
            FieldValue::Plain(s) => {
                *s = stripper.strip(s);
                true
            }
            FieldValue::Text(value) => {
                let filtered = stripper.strip(value.text());
                value.set_text(filtered);
                true
            }
            FieldValue::Other(_) => false,
        }
    }

    /// The text carried by this value, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Plain(s) => Some(s),
            FieldValue::Text(value) => Some(value.text()),
            FieldValue::Other(_) => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Plain(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Plain(s.to_string())
    }
}

impl From<TextValue> for FieldValue {
    fn from(value: TextValue) -> Self {
        FieldValue::Text(value)
    }
}
