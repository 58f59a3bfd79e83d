//! Reference tag value types.
//!
//! A reference tag names another content element by kind and numeric id,
//! optionally narrowed to one of its properties by a handle:
//! `{asset:42}`, `{asset:42:thumbnail}`.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier naming a property of the target element (a transform, a field).
///
/// Letters, digits and underscores, not starting with a digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Handle(String);

impl Handle {
    /// Parses a handle, rejecting anything outside the identifier grammar.
    pub fn parse(s: &str) -> Result<Self, Error> {
        if is_handle(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(Error::InvalidHandle(s.to_string()))
        }
    }

    /// Returns the handle text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Handle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Handle {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if is_handle(&s) {
            Ok(Self(s))
        } else {
            Err(Error::InvalidHandle(s))
        }
    }
}

impl From<Handle> for String {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

/// Inline pointer to another content element.
///
/// Displays in storage form, braces included: `{entry:12}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceTag {
    element_type: String,
    /// Decimal digits, kept as written. Ids are opaque to the transcoder and
    /// may exceed any fixed-width integer.
    element_id: String,
    handle: Option<Handle>,
}

impl ReferenceTag {
    /// Creates a tag without a handle.
    pub fn new(element_type: impl Into<String>, element_id: u64) -> Result<Self, Error> {
        let element_type = element_type.into();
        if !is_word(&element_type) {
            return Err(Error::InvalidTag(element_type));
        }
        Ok(Self {
            element_type,
            element_id: element_id.to_string(),
            handle: None,
        })
    }

    /// Returns a copy of this tag narrowed to `handle`.
    #[must_use]
    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Parses the inside of a tag (`type:id` or `type:id:handle`), without braces.
    pub(crate) fn parse_inner(s: &str) -> Option<Self> {
        let mut parts = s.split(':');
        let element_type = parts.next()?;
        let element_id = parts.next()?;
        let handle = parts.next();
        if parts.next().is_some() || !is_word(element_type) || !is_digits(element_id) {
            return None;
        }
        let handle = match handle {
            Some(h) => Some(Handle::parse(h).ok()?),
            None => None,
        };
        Some(Self {
            element_type: element_type.to_string(),
            element_id: element_id.to_string(),
            handle,
        })
    }

    /// Element kind, e.g. `entry`, `category`, `asset`.
    #[must_use]
    pub fn element_type(&self) -> &str {
        &self.element_type
    }

    /// Element id as written in the tag.
    #[must_use]
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    #[must_use]
    pub fn handle(&self) -> Option<&Handle> {
        self.handle.as_ref()
    }

    /// The `type:id` pair appended to URLs handed to the editor.
    #[must_use]
    pub fn hash_suffix(&self) -> String {
        format!("{}:{}", self.element_type, self.element_id)
    }
}

impl fmt::Display for ReferenceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}:{}", self.element_type, self.element_id)?;
        if let Some(handle) = &self.handle {
            write!(f, ":{handle}")?;
        }
        f.write_str("}")
    }
}

impl FromStr for ReferenceTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .and_then(Self::parse_inner)
            .ok_or_else(|| Error::InvalidTag(s.to_string()))
    }
}

/// Editor-form encoding of a reference tag: `base_url[#fragment]#type:id[:handle]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashedUrlToken {
    /// URL the editor can follow or preview. Never empty.
    pub base_url: String,
    /// Pre-existing fragment unrelated to the reference, without the `#`.
    pub fragment: Option<String>,
    pub tag: ReferenceTag,
}

impl HashedUrlToken {
    /// Parses an attribute value. Quotes are never part of a hashed URL.
    pub(crate) fn parse_value(value: &str) -> Option<Self> {
        if value.contains(['"', '\'']) {
            return None;
        }
        let parts: Vec<&str> = value.splitn(4, '#').collect();
        let (base_url, fragment, tag) = match parts.as_slice() {
            [base, tag] => (*base, None, *tag),
            [base, fragment, tag] if !fragment.is_empty() => (*base, Some(*fragment), *tag),
            _ => return None,
        };
        if base_url.is_empty() {
            return None;
        }
        Some(Self {
            base_url: base_url.to_string(),
            fragment: fragment.map(str::to_string),
            tag: ReferenceTag::parse_inner(tag)?,
        })
    }
}

impl fmt::Display for HashedUrlToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_url)?;
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        write!(f, "#{}", self.tag.hash_suffix())?;
        if let Some(handle) = self.tag.handle() {
            write!(f, ":{handle}")?;
        }
        Ok(())
    }
}

impl FromStr for HashedUrlToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_value(s).ok_or_else(|| Error::InvalidHashedUrl(s.to_string()))
    }
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_handle(s: &str) -> bool {
    s.bytes().next().is_some_and(|b| !b.is_ascii_digit()) && is_word(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_inner_accepts_both_arities() {
        let tag = ReferenceTag::parse_inner("entry:12").unwrap();
        assert_eq!(tag.element_type(), "entry");
        assert_eq!(tag.element_id(), "12");
        assert!(tag.handle().is_none());

        let tag = ReferenceTag::parse_inner("asset:42:thumb_2x").unwrap();
        assert_eq!(tag.handle().map(Handle::as_str), Some("thumb_2x"));
    }

    #[test]
    fn parse_inner_rejects_bad_parts() {
        assert!(ReferenceTag::parse_inner("entry").is_none());
        assert!(ReferenceTag::parse_inner("entry:").is_none());
        assert!(ReferenceTag::parse_inner("entry:abc").is_none());
        assert!(ReferenceTag::parse_inner("en-try:1").is_none());
        assert!(ReferenceTag::parse_inner("asset:1:2x").is_none());
        assert!(ReferenceTag::parse_inner("asset:1:a:b").is_none());
    }

    #[test]
    fn parse_inner_keeps_ids_wider_than_u64() {
        let tag = ReferenceTag::parse_inner("entry:18446744073709551616").unwrap();
        assert_eq!(tag.element_id(), "18446744073709551616");
        assert_eq!(tag.hash_suffix(), "entry:18446744073709551616");
    }

    #[test]
    fn handle_must_not_start_with_digit() {
        assert!(Handle::parse("_private").is_ok());
        assert!(Handle::parse("a1").is_ok());
        assert!(Handle::parse("1a").is_err());
        assert!(Handle::parse("").is_err());
    }

    #[test]
    fn hashed_url_needs_base() {
        assert!(HashedUrlToken::parse_value("#entry:1").is_none());
        assert!(HashedUrlToken::parse_value("/a##entry:1").is_none());
        assert!(HashedUrlToken::parse_value("/a#b#c#entry:1").is_none());
    }
}
