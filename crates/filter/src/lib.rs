// ABOUTME: Library entry point for the HTML element filter.
// ABOUTME: Re-exports the stripper, selector validation, configuration, and pipeline processor.

//! Element filter - removes markup matching CSS selectors from text before it
//! is indexed, and from search result snippets before they are displayed.
//!
//! # Example
//!
//! ```
//! use element_filter::strip;
//!
//! let html = r#"<div class="sidebar-filters">X</div><p>Y</p>"#;
//! assert_eq!(strip(html, &[".sidebar-filters"]), "<p>Y</p>");
//! ```

pub mod config;
pub mod error;
pub mod processor;
pub mod selectors;
pub mod stripper;
pub mod validate;
pub mod values;

pub use crate::config::FilterConfig;
pub use crate::error::{ConfigError, SelectorError};
pub use crate::processor::{DataType, ElementFilter, Field, Item, ResultSet, Stage};
pub use crate::selectors::split_selectors;
pub use crate::stripper::{strip, ElementStripper};
pub use crate::validate::{validate, validation_errors};
pub use crate::values::{FieldValue, TextAccess, TextValue};
