// ABOUTME: Search pipeline processor that runs the element stripper on indexed fields and search results.
// ABOUTME: Defines the stages it registers for, their weights, and which fields it touches.

//! Pipeline integration.
//!
//! The host indexing pipeline calls the processor at three stages. Before the
//! index configuration is saved, the processor prunes stale field names.
//! Before items are indexed, and after a query returns results, each value of
//! each applicable field is passed through the [`ElementStripper`].

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::FilterConfig;
use crate::stripper::ElementStripper;
use crate::values::FieldValue;

/// A pipeline stage the processor runs at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    PreIndexSave,
    PreprocessIndex,
    PostprocessQuery,
}

impl Stage {
    pub const ALL: [Stage; 3] = [
        Stage::PreIndexSave,
        Stage::PreprocessIndex,
        Stage::PostprocessQuery,
    ];

    /// Weight used when the configuration does not override it. Lower runs earlier.
    pub fn default_weight(self) -> i32 {
        match self {
            Stage::PreIndexSave => 0,
            Stage::PreprocessIndex => -30,
            Stage::PostprocessQuery => -30,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::PreIndexSave => "pre_index_save",
            Stage::PreprocessIndex => "preprocess_index",
            Stage::PostprocessQuery => "postprocess_query",
        };
        write!(f, "{}", s)
    }
}

/// Data type of an indexed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    #[default]
    Text,
    String,
    Integer,
    Decimal,
    Date,
    Boolean,
    Other,
}

impl DataType {
    /// Text and string fields carry markup; nothing else does.
    pub fn is_text(self) -> bool {
        matches!(self, DataType::Text | DataType::String)
    }
}

/// A named field of an item with its values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub data_type: DataType,
    #[serde(default)]
    pub values: Vec<FieldValue>,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.values.push(value.into());
        self
    }
}

/// An item being indexed, or one returned by a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Item {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Items returned by a search query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub items: Vec<Item>,
}

/// The HTML element filter processor.
#[derive(Debug, Clone, Default)]
pub struct ElementFilter {
    config: FilterConfig,
    stripper: ElementStripper,
}

impl ElementFilter {
    pub const ID: &'static str = "html_element_filter";
    pub const LABEL: &'static str = "HTML Element Filter";
    pub const DESCRIPTION: &'static str =
        "Removes HTML elements matching CSS selectors from indexed text";

    /// Creates the processor, compiling the configured selectors once.
    pub fn new(config: FilterConfig) -> Self {
        let stripper = ElementStripper::from_config(&config);
        let skipped = stripper.skipped().count();
        if skipped > 0 {
            debug!(skipped, "some configured selectors will be skipped");
        }
        Self { config, stripper }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn stripper(&self) -> &ElementStripper {
        &self.stripper
    }

    /// Stages this processor registers for.
    pub fn stages(&self) -> &'static [Stage] {
        &Stage::ALL
    }

    /// Effective weight of a stage, honoring configured overrides.
    pub fn weight(&self, stage: Stage) -> i32 {
        self.config
            .weights
            .get(&stage)
            .copied()
            .unwrap_or_else(|| stage.default_weight())
    }

    /// Whether the field is one this processor is configured for.
    pub fn test_field(&self, field: &Field) -> bool {
        match &self.config.fields {
            Some(fields) => fields.iter().any(|f| f == &field.name),
            None => true,
        }
    }

    /// Whether values of this type can carry markup.
    pub fn test_type(&self, data_type: DataType) -> bool {
        data_type.is_text()
    }

    /// Drops configured field names that no longer exist on the index.
    pub fn pre_index_save<I, S>(&mut self, index_fields: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(fields) = self.config.fields.as_mut() else {
            return;
        };
        let available: Vec<S> = index_fields.into_iter().collect();
        let before = fields.len();
        fields.retain(|name| available.iter().any(|f| f.as_ref() == name.as_str()));
        if fields.len() != before {
            debug!(
                removed = before - fields.len(),
                "dropped fields missing from the index"
            );
        }
    }

    /// Filters the fields of items about to be indexed.
    pub fn preprocess_index_items(&self, items: &mut [Item]) {
        for item in items.iter_mut() {
            self.process_item(item);
        }
    }

    /// Filters the fields of search results before they are displayed.
    pub fn postprocess_search_results(&self, results: &mut ResultSet) {
        for item in results.items.iter_mut() {
            self.process_item(item);
        }
    }

    /// Filters a single string in place.
    pub fn process(&self, value: &mut String) {
        *value = self.stripper.strip(value);
    }

    fn process_item(&self, item: &mut Item) {
        for field in item.fields.iter_mut() {
            if !self.test_field(field) || !self.test_type(field.data_type) {
                continue;
            }
            for value in field.values.iter_mut() {
                value.filter_with(&self.stripper);
            }
        }
    }
}
