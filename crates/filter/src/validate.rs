// ABOUTME: Design-time validation of selector lists for configuration editors.
// ABOUTME: Compiles each non-blank selector and collects a message for each one that fails.

use crate::error::SelectorError;
use crate::selectors::compile;

/// Returns a compile error for each non-blank selector that fails.
///
/// Validation never evaluates a selector against real markup. A selector is
/// accepted exactly when it would be accepted while filtering.
pub fn validation_errors<I, S>(selectors: I) -> Vec<SelectorError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    selectors
        .into_iter()
        .filter_map(|s| {
            let css = s.as_ref().trim();
            if css.is_empty() {
                return None;
            }
            compile(css).err()
        })
        .collect()
}

/// Returns a human-readable message for each selector that fails to compile.
pub fn validate<I, S>(selectors: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    validation_errors(selectors)
        .into_iter()
        .map(|err| err.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_selectors_produce_no_messages() {
        let messages = validate([".sidebar-filters", "div > p", "a[href^=\"http\"]", "ul li:nth-child(2)"]);
        assert!(messages.is_empty(), "unexpected: {:?}", messages);
    }

    #[test]
    fn invalid_selectors_are_reported_in_order() {
        let messages = validate(["p", "###invalid", "", "div >", ".ok"]);
        assert_eq!(
            messages,
            vec![
                "Invalid CSS Selector: ###invalid".to_string(),
                "Invalid CSS Selector: div >".to_string(),
            ]
        );
    }

    #[test]
    fn blank_entries_are_skipped() {
        assert!(validate(["", "  ", "\t"]).is_empty());
    }

    #[test]
    fn errors_carry_the_selector() {
        let errors = validation_errors(["[[[x"]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].selector, "[[[x");
    }
}
