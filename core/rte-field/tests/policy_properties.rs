//! Property-based tests for content policy and capacity validation.

use proptest::prelude::*;
use rte_field::{ColumnType, check_storage_capacity, cleanup_html, storage_limit};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn tag_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "p", "div", "span", "font", "b", "i", "u", "em", "strong", "a", "h1", "h3", "pre",
        "blockquote", "td", "li",
    ])
}

/// Markup fragments in the shapes editors produce.
fn fragment_strategy() -> impl Strategy<Value = String> {
    let leaf = prop::string::string_regex("[a-z ]{0,8}").unwrap();
    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            tag_strategy(),
            prop::option::of(prop::string::string_regex("[a-z:;]{0,10}").unwrap()),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(tag, style, children)| {
                let style = style.map(|s| format!(r#" style="{s}""#)).unwrap_or_default();
                format!("<{tag}{style}>{}</{tag}>", children.concat())
            })
    })
}

// =============================================================================
// CLEANUP PROPERTIES
// =============================================================================

proptest! {
    /// A second cleanup pass changes nothing.
    #[test]
    fn cleanup_is_idempotent(html in fragment_strategy()) {
        let once = cleanup_html(&html);
        prop_assert_eq!(cleanup_html(&once), once);
    }

    /// Cleaned markup has no span or font tags left.
    #[test]
    fn cleanup_removes_span_and_font(html in fragment_strategy()) {
        let cleaned = cleanup_html(&html);
        prop_assert!(!cleaned.contains("<span"));
        prop_assert!(!cleaned.contains("</font>"));
    }

    /// Text content is never lost by cleanup.
    #[test]
    fn cleanup_keeps_text(html in fragment_strategy()) {
        let text = |s: &str| {
            let mut out = String::new();
            let mut in_tag = false;
            for c in s.chars() {
                match c {
                    '<' => in_tag = true,
                    '>' => in_tag = false,
                    _ if !in_tag => out.push(c),
                    _ => {}
                }
            }
            out
        };
        prop_assert_eq!(text(&cleanup_html(&html)), text(&html));
    }
}

// =============================================================================
// CAPACITY PROPERTIES
// =============================================================================

proptest! {
    /// Values up to the limit pass, anything longer fails.
    #[test]
    fn capacity_boundary(extra in 0usize..64, under in 0usize..64) {
        let limit = storage_limit(ColumnType::TinyText) as usize;
        let fits = "x".repeat(limit - under.min(limit));
        prop_assert!(check_storage_capacity(&fits, ColumnType::TinyText, "f").is_ok());

        let over = "x".repeat(limit + 1 + extra);
        prop_assert!(check_storage_capacity(&over, ColumnType::TinyText, "f").is_err());
    }
}

#[test]
fn capacity_exact_boundary_on_every_column_that_fits_in_memory() {
    for column in [ColumnType::TinyText, ColumnType::Text] {
        let limit = storage_limit(column) as usize;
        assert!(check_storage_capacity(&"a".repeat(limit), column, "f").is_ok());
        assert!(check_storage_capacity(&"a".repeat(limit + 1), column, "f").is_err());
    }
}
