//! Stored rich text content.

use serde::Serialize;
use std::fmt;

/// Content of a rich text field as read back from storage.
///
/// Displays as the raw markup so templates can output it without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichTextValue {
    raw_content: String,
    charset: String,
}

impl RichTextValue {
    /// Wraps stored markup. The charset is the one templates render with.
    #[must_use]
    pub fn new(raw_content: impl Into<String>, charset: impl Into<String>) -> Self {
        Self {
            raw_content: raw_content.into(),
            charset: charset.into(),
        }
    }

    #[must_use]
    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    #[must_use]
    pub fn charset(&self) -> &str {
        &self.charset
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw_content.is_empty()
    }
}

impl fmt::Display for RichTextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_content)
    }
}

impl AsRef<str> for RichTextValue {
    fn as_ref(&self) -> &str {
        &self.raw_content
    }
}
