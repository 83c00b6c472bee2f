//! CSS selector parsing.

use scraper::Selector;

/// Parses a CSS selector that must succeed.
///
/// Only used for the analyzers' static selectors, so a parse failure is a
/// programming error and panics with the offending selector and its context.
pub(crate) fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_unsafe_valid() {
        let selector = parse_selector_unsafe("meta[property]", "test");
        let html = scraper::Html::parse_document(
            r#"<html><head><meta property="og:title" content="x"></head></html>"#,
        );
        assert_eq!(html.select(&selector).count(), 1);
    }

    #[test]
    #[should_panic(expected = "programming error")]
    fn test_parse_selector_unsafe_invalid_panics() {
        parse_selector_unsafe("[[", "test");
    }
}
