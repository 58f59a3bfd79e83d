//! Rich text field type for editor-backed content.
//!
//! Covers everything a field does to its value between the browser and the
//! database:
//! - [`FieldSettings`]: per-field configuration (column size, cleanup, purify)
//! - [`apply_content_policy`]: sanitization and structural cleanup of posted HTML
//! - [`check_storage_capacity`]: rejects content that would not fit the column
//! - [`RichTextValue`]: stored content handed back to templates
//! - [`ConfigLoader`]: editor configuration documents from the config directory
//! - [`RichTextField`]: ties the above together and builds the input context
//!
//! The host CMS is reached only through [`CmsHost`]; reference tags are
//! handled by [`rte_refs`].

mod capacity;
mod config;
mod error;
mod field;
mod host;
mod policy;
mod settings;
mod value;

pub use capacity::{CAPACITY_MARGIN_PERCENT, check_storage_capacity, storage_limit};
pub use config::{ConfigLoader, DEFAULT_EDITOR_LANGUAGE, EditorConfig, strip_json_comments};
pub use error::{FieldError, FieldResult};
pub use field::{
    InputContext, RichTextField, SelectOption, SettingsOptions, TransformOption, format_input_id,
    html_encode,
};
pub use host::{
    AssetFolder, AssetSource, AssetTransform, CategoryGroup, CmsHost, LinkOption, Orientation,
    Section, SectionKind,
};
pub use policy::{AmmoniaSanitizer, HtmlSanitizer, apply_content_policy, cleanup_html};
pub use settings::{ColumnType, FieldSettings};
pub use value::RichTextValue;
