//! Attribute scanner.
//!
//! Splits HTML into literal runs and recognised `href=`/`src=` attribute
//! values. The scanner knows nothing about HTML structure beyond the
//! `name=<quote>value<quote>` shape; every byte it does not recognise ends up
//! in a [`Segment::Literal`], so concatenating the segments of an unmatched
//! input reproduces it exactly.

use crate::tag::{HashedUrlToken, ReferenceTag};
use std::fmt;

const URL_ATTRIBUTES: [&str; 2] = ["href", "src"];

/// Which value grammar the scanner should recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// Storage form: `{type:id[:handle]}[#fragment]`.
    ReferenceTag,
    /// Editor form: `url[#fragment]#type:id[:handle]`.
    HashedUrl,
}

/// A URL-bearing attribute as it appeared in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    /// `href` or `src`.
    pub name: &'static str,
    /// The quote character delimiting the value.
    pub quote: char,
}

/// One piece of scanned input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Reference {
        attribute: Attribute,
        tag: ReferenceTag,
        /// Fragment following the tag, without the `#`.
        fragment: Option<&'a str>,
    },
    HashedUrl {
        attribute: Attribute,
        token: HashedUrlToken,
    },
}

impl fmt::Display for Segment<'_> {
    /// Writes the segment back in the form it was scanned from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Reference {
                attribute,
                tag,
                fragment,
            } => {
                let q = attribute.quote;
                write!(f, "{}={q}{tag}", attribute.name)?;
                if let Some(fragment) = fragment {
                    write!(f, "#{fragment}")?;
                }
                write!(f, "{q}")
            }
            Self::HashedUrl { attribute, token } => {
                let q = attribute.quote;
                write!(f, "{}={q}{token}{q}", attribute.name)
            }
        }
    }
}

/// Tokenizes `input`, recognising attribute values in `grammar`.
pub fn scan(input: &str, grammar: Grammar) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while let Some((attr_start, name, eq)) = next_attribute(input, pos) {
        pos = eq + 1;

        let Some(quote) = input[pos..].chars().next().filter(|c| matches!(c, '"' | '\'')) else {
            continue;
        };
        let value_start = pos + 1;
        let Some(len) = input[value_start..].find(quote) else {
            continue;
        };
        let value = &input[value_start..value_start + len];
        let attribute = Attribute { name, quote };

        let segment = match grammar {
            Grammar::ReferenceTag => {
                parse_reference_value(value).map(|(tag, fragment)| Segment::Reference {
                    attribute,
                    tag,
                    fragment,
                })
            }
            Grammar::HashedUrl => HashedUrlToken::parse_value(value)
                .map(|token| Segment::HashedUrl { attribute, token }),
        };

        if let Some(segment) = segment {
            if attr_start > literal_start {
                segments.push(Segment::Literal(&input[literal_start..attr_start]));
            }
            segments.push(segment);
            pos = value_start + len + 1;
            literal_start = pos;
        }
    }

    if literal_start < input.len() {
        segments.push(Segment::Literal(&input[literal_start..]));
    }
    segments
}

/// Finds the next `href=` or `src=` whose name starts at or after `from`.
///
/// Returns the start of the attribute name, the name, and the offset of `=`.
fn next_attribute(input: &str, from: usize) -> Option<(usize, &'static str, usize)> {
    input[from..].match_indices('=').find_map(|(offset, _)| {
        let eq = from + offset;
        URL_ATTRIBUTES.iter().find_map(|name| {
            let start = eq.checked_sub(name.len())?;
            (start >= from && input[..eq].ends_with(name)).then_some((start, *name, eq))
        })
    })
}

/// `{type:id[:handle]}` optionally followed by `#fragment`.
fn parse_reference_value(value: &str) -> Option<(ReferenceTag, Option<&str>)> {
    let rest = value.strip_prefix('{')?;
    let close = rest.find('}')?;
    let tag = ReferenceTag::parse_inner(&rest[..close])?;

    let trailer = &rest[close + 1..];
    if trailer.is_empty() {
        return Some((tag, None));
    }
    let fragment = trailer.strip_prefix('#')?;
    if fragment.is_empty() || fragment.contains(['#', '"', '\'']) {
        return None;
    }
    Some((tag, Some(fragment)))
}
