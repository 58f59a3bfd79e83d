//! Storage ⇄ editor conversion of reference-tagged attribute values.

use crate::scan::{Grammar, Segment, scan};
use tracing::debug;

/// Prepares stored content for the editor.
///
/// `href="{asset:42:thumb}#top"` becomes `href="{asset:42:thumb}#top#asset:42"`:
/// the tag stays in place for the host to resolve and the `#type:id` suffix
/// survives the resolution so [`encode_for_storage`] can find it again.
/// Content without `{` is returned as is without being scanned.
pub fn decode_for_display(value: &str) -> String {
    if !value.contains('{') {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len() + 32);
    let mut decoded = 0usize;
    for segment in scan(value, Grammar::ReferenceTag) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Reference {
                attribute,
                tag,
                fragment,
            } => {
                decoded += 1;
                let q = attribute.quote;
                out.push_str(attribute.name);
                out.push('=');
                out.push(q);
                out.push_str(&tag.to_string());
                if let Some(fragment) = fragment {
                    out.push('#');
                    out.push_str(fragment);
                }
                out.push('#');
                out.push_str(&tag.hash_suffix());
                out.push(q);
            }
            other => out.push_str(&other.to_string()),
        }
    }

    if decoded > 0 {
        debug!("Decoded {} reference tag(s) for display", decoded);
    }
    out
}

/// Collapses editor URLs carrying a `#type:id[:handle]` suffix back into
/// reference tags.
///
/// `href="/blog/hello#intro#entry:12"` becomes `href="{entry:12}#intro"`. The
/// resolved URL is dropped; only the tag and any unrelated fragment are kept.
/// Everything else, including reference tags the host never resolved, is left
/// untouched.
pub fn encode_for_storage(value: &str) -> String {
    if !value.contains('#') {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len());
    let mut encoded = 0usize;
    for segment in scan(value, Grammar::HashedUrl) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::HashedUrl { attribute, token } => {
                encoded += 1;
                let q = attribute.quote;
                out.push_str(attribute.name);
                out.push('=');
                out.push(q);
                out.push_str(&token.tag.to_string());
                if let Some(fragment) = &token.fragment {
                    out.push('#');
                    out.push_str(fragment);
                }
                out.push(q);
            }
            other => out.push_str(&other.to_string()),
        }
    }

    if encoded > 0 {
        debug!("Encoded {} hashed url(s) for storage", encoded);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_appends_type_and_id() {
        assert_eq!(
            decode_for_display(r#"<a href="{entry:12}">x</a>"#),
            r#"<a href="{entry:12}#entry:12">x</a>"#
        );
    }

    #[test]
    fn decode_keeps_fragment_before_suffix() {
        assert_eq!(
            decode_for_display(r#"<img src='{asset:42:thumb}#top'>"#),
            r#"<img src='{asset:42:thumb}#top#asset:42'>"#
        );
    }

    #[test]
    fn encode_restores_tag_and_fragment() {
        assert_eq!(
            encode_for_storage(r#"<a href="/blog/hello#intro#entry:12">x</a>"#),
            r#"<a href="{entry:12}#intro">x</a>"#
        );
    }

    #[test]
    fn encode_keeps_explicit_handle() {
        assert_eq!(
            encode_for_storage(r#"<img src="/a.jpg#asset:4:thumb">"#),
            r#"<img src="{asset:4:thumb}">"#
        );
    }

    #[test]
    fn encode_leaves_plain_anchors() {
        let input = r##"<a href="#top">top</a> <a href="/page#section">s</a>"##;
        assert_eq!(encode_for_storage(input), input);
    }
}
