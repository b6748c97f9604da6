// ABOUTME: Removes elements matching configured CSS selectors from an HTML fragment.
// ABOUTME: Parses the fragment, detaches every match, and serializes the body back out.

//! Selector-driven element removal.
//!
//! Filtering is fail-open: a selector that does not compile, or that matches
//! nothing, is skipped and the rest are still applied. Malformed markup is
//! handled by the HTML5 parser the way a browser would handle it. The only
//! output is a string.

use std::fmt;

use dom_query::{Document, Matcher};
use tracing::{debug, trace};

use crate::config::FilterConfig;
use crate::selectors::compile;

/// A selector as configured, with its compiled form if it compiled.
#[derive(Clone)]
struct CompiledSelector {
    source: String,
    matcher: Option<Matcher>,
}

/// Removes matching elements from HTML fragments.
///
/// Selectors are compiled once when the stripper is built and reused for
/// every call to [`ElementStripper::strip`]. Each call parses its own
/// document, so one stripper can be shared across threads.
#[derive(Clone, Default)]
pub struct ElementStripper {
    selectors: Vec<CompiledSelector>,
}

impl fmt::Debug for ElementStripper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementStripper")
            .field("selectors", &self.selectors().collect::<Vec<_>>())
            .finish()
    }
}

impl ElementStripper {
    /// Builds a stripper from selectors in application order.
    ///
    /// Blank entries are dropped. Entries that fail to compile are logged
    /// once here and kept so they can be reported, but are skipped when
    /// filtering.
    pub fn new<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selectors = selectors
            .into_iter()
            .filter_map(|s| {
                let css = s.as_ref().trim();
                if css.is_empty() {
                    return None;
                }
                let matcher = match compile(css) {
                    Ok(matcher) => Some(matcher),
                    Err(err) => {
                        debug!(
                            selector = %err.selector,
                            reason = %err.reason,
                            "CSS selector failed to compile, it will be skipped"
                        );
                        None
                    }
                };
                Some(CompiledSelector {
                    source: css.to_string(),
                    matcher,
                })
            })
            .collect();
        Self { selectors }
    }

    /// Builds a stripper from the newline-separated list in a configuration.
    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(config.selectors())
    }

    /// The non-blank selectors, in application order.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.selectors.iter().map(|s| s.source.as_str())
    }

    /// The selectors that failed to compile and will be skipped.
    pub fn skipped(&self) -> impl Iterator<Item = &str> {
        self.selectors
            .iter()
            .filter(|s| s.matcher.is_none())
            .map(|s| s.source.as_str())
    }

    /// Returns true when there is nothing to remove.
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Returns `markup` with every element matching a selector removed.
    ///
    /// Selectors run in order against the live tree, so later selectors see
    /// the structure left by earlier ones. The result is the inner HTML of
    /// the parsed body; any `html` or `head` wrapper the parser adds is
    /// dropped.
    pub fn strip(&self, markup: &str) -> String {
        let doc = Document::from(markup);
        // Nested matches are detached along with their ancestor, so this can
        // exceed the number of subtrees actually removed.
        let mut matched_nodes = 0usize;

        for selector in &self.selectors {
            let Some(matcher) = &selector.matcher else {
                continue;
            };

            let matched = doc.select_matcher(matcher);
            if matched.is_empty() {
                continue;
            }
            matched_nodes += matched.length();
            matched.remove();
        }

        trace!(matched = matched_nodes, "removed matching elements");
        doc.select("body").inner_html().to_string()
    }
}

/// Removes elements matching any of `selectors` from `markup`.
///
/// Shorthand for building an [`ElementStripper`] and calling `strip` once.
pub fn strip<S: AsRef<str>>(markup: &str, selectors: &[S]) -> String {
    ElementStripper::new(selectors).strip(markup)
}
