// ABOUTME: Selector list splitting and compilation of individual CSS selectors.
// ABOUTME: Compile failures come back as SelectorError for validation and diagnostics.

//! Selector handling shared by filtering and validation.
//!
//! A selector list arrives as one string with a selector per line. Each
//! stripper compiles its own selectors when it is built; nothing is shared
//! between strippers.

use dom_query::Matcher;

use crate::error::SelectorError;

/// Splits a newline-separated selector list into individual selectors.
///
/// Lines end in CRLF as submitted by the configuration form, but a bare LF
/// is accepted too. Each line is trimmed and blank lines are dropped; order
/// is preserved.
pub fn split_selectors(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Compiles a single CSS selector.
pub fn compile(css: &str) -> Result<Matcher, SelectorError> {
    Matcher::new(css).map_err(|err| SelectorError::new(css, format!("{:?}", err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_blank_lines() {
        assert_eq!(split_selectors("div.a\r\n\r\ndiv.b"), vec!["div.a", "div.b"]);
    }

    #[test]
    fn split_accepts_bare_newlines_and_trims() {
        assert_eq!(
            split_selectors("  .ad \n\n\t#nav\r\n   \r\n"),
            vec![".ad", "#nav"]
        );
    }

    #[test]
    fn split_empty_string() {
        assert!(split_selectors("").is_empty());
        assert!(split_selectors("\r\n\r\n").is_empty());
    }

    #[test]
    fn split_preserves_order() {
        assert_eq!(split_selectors("c\r\nb\r\na"), vec!["c", "b", "a"]);
    }

    #[test]
    fn compile_reports_selector() {
        let err = compile("###invalid").err().unwrap();
        assert_eq!(err.selector, "###invalid");
        assert!(!err.reason.is_empty());
    }

    #[test]
    fn compile_accepts_valid_selector() {
        assert!(compile("div.container > p").is_ok());
        assert!(compile("ul li:nth-child(2)").is_ok());
    }
}
