//! Content policy applied to posted HTML.
//!
//! Two independent toggles: sanitization (untrusted markup in, safe markup out)
//! and structural cleanup of formatting that editors tend to paste in. When
//! both are on, sanitization runs first since the cleanup rules expect
//! normalized markup.

use crate::error::FieldResult;
use crate::settings::FieldSettings;
use regex_lite::{Captures, Regex};
use std::sync::LazyLock;
use tracing::debug;

static SPAN_FONT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(?:span|font)\b[^>]*>").expect("span/font open regex"));

static SPAN_FONT_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</(?:span|font)>").expect("span/font close regex"));

static INLINE_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(<(?:h1|h2|h3|h4|h5|h6|p|div|blockquote|pre|strong|em|b|i|u|a)\b[^>]*)\s+style="[^"]*""#,
    )
    .expect("inline style regex")
});

// regex-lite has no backreferences; the closing name is compared in the replacer.
static EMPTY_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"<(h1|h2|h3|h4|h5|h6|p|div|blockquote|pre|strong|em|a|b|i|u)\s*></(h1|h2|h3|h4|h5|h6|p|div|blockquote|pre|strong|em|a|b|i|u)>",
    )
    .expect("empty pair regex")
});

/// Sanitizes untrusted HTML.
///
/// Implementations must return structurally well-formed markup with anything
/// able to run script removed.
pub trait HtmlSanitizer: Send + Sync {
    fn sanitize(&self, html: &str) -> FieldResult<String>;
}

/// Sanitizer backed by `ammonia`, allowing `target="_blank"` on links.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmmoniaSanitizer;

impl HtmlSanitizer for AmmoniaSanitizer {
    fn sanitize(&self, html: &str) -> FieldResult<String> {
        let mut builder = ammonia::Builder::default();
        builder.add_tag_attribute_values("a", "target", &["_blank"]);
        Ok(builder.clean(html).to_string())
    }
}

/// Applies the field's content policy to a posted value.
pub fn apply_content_policy(
    value: &str,
    settings: &FieldSettings,
    sanitizer: &dyn HtmlSanitizer,
) -> FieldResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    let mut value = value.to_string();
    if settings.purify_html {
        value = sanitizer.sanitize(&value)?;
    }
    if settings.cleanup_html {
        value = cleanup_html(&value);
    }
    Ok(value)
}

/// Removes span/font tags, inline styles on common block and inline tags, and
/// empty tag pairs.
///
/// Rules are reapplied until nothing changes, so removing `<b></b>` from
/// `<p><b></b></p>` also removes the now empty paragraph.
pub fn cleanup_html(value: &str) -> String {
    let mut current = value.to_string();
    let mut passes = 0u32;
    loop {
        let next = cleanup_pass(&current);
        passes += 1;
        if next == current {
            break;
        }
        current = next;
    }
    if passes > 2 {
        debug!("HTML cleanup settled after {} passes", passes);
    }
    current
}

fn cleanup_pass(value: &str) -> String {
    let value = SPAN_FONT_OPEN.replace_all(value, "");
    let value = SPAN_FONT_CLOSE.replace_all(&value, "");
    let value = INLINE_STYLE.replace_all(&value, "${1}");
    EMPTY_PAIR
        .replace_all(&value, |caps: &Captures<'_>| {
            if caps[1] == caps[2] {
                String::new()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
