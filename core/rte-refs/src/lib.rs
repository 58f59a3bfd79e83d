//! Reference tags and the transcoder that moves them between storage and
//! editor form.
//!
//! Stored rich-text content points at other content elements with reference
//! tags such as `{entry:12}` or `{asset:42:thumb}`. Editors cannot follow those,
//! so before content is handed to an editor each tagged `href`/`src` value gets a
//! `#type:id` suffix the editor carries around untouched ("hashed URL"). When
//! the edited content comes back, hashed URLs are collapsed into reference tags
//! again:
//!
//! - [`decode_for_display`]: `href="{entry:12}"` → `href="{entry:12}#entry:12"`
//! - [`encode_for_storage`]: `href="/blog/hello#entry:12"` → `href="{entry:12}"`
//!
//! Matching is strictly opt-in. Anything that does not fit the grammar is
//! passed through byte for byte, so foreign or broken markup never errors.

mod scan;
mod tag;
mod transcode;

pub use scan::{Attribute, Grammar, Segment, scan};
pub use tag::{Handle, HashedUrlToken, ReferenceTag};
pub use transcode::{decode_for_display, encode_for_storage};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when parsing reference tags from standalone strings.
///
/// The transcoder never returns these; they only surface through the
/// `FromStr` implementations and constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid reference tag: {0}")]
    InvalidTag(String),

    #[error("invalid handle: {0}")]
    InvalidHandle(String),

    #[error("invalid hashed url: {0}")]
    InvalidHashedUrl(String),
}
