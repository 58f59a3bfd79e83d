//! Per-field settings.

use serde::{Deserialize, Serialize};

/// Storage capacity class of the content column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    TinyText,
    #[default]
    Text,
    MediumText,
    LongText,
}

impl ColumnType {
    /// Column types offered when configuring a field.
    pub const SELECTABLE: [ColumnType; 2] = [ColumnType::Text, ColumnType::MediumText];

    /// Maximum number of bytes the column can hold.
    #[must_use]
    pub const fn capacity(self) -> u64 {
        match self {
            Self::TinyText => 255,
            Self::Text => 65_535,
            Self::MediumText => 16_777_215,
            Self::LongText => 4_294_967_295,
        }
    }

    /// Column name as the database knows it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TinyText => "tinytext",
            Self::Text => "text",
            Self::MediumText => "mediumtext",
            Self::LongText => "longtext",
        }
    }

    /// Label shown in the settings form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TinyText => "TinyText (stores about 255B)",
            Self::Text => "Text (stores about 64K)",
            Self::MediumText => "MediumText (stores about 4GB)",
            Self::LongText => "LongText (stores about 4GB)",
        }
    }
}

/// Settings of one rich text field.
///
/// Deserializes from the host's stored settings; any missing key takes its
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSettings {
    /// Editor config file name inside the editor's config directory.
    /// `None` uses the editor defaults.
    pub config_file: Option<String>,
    /// Strip span/font tags, inline styles and empty tags from posted content.
    pub cleanup_html: bool,
    /// Run posted content through the HTML sanitizer.
    pub purify_html: bool,
    pub column_type: ColumnType,
    /// Asset source ids offered in the editor. Empty means all public sources.
    pub available_asset_sources: Vec<u64>,
    /// Transform ids offered in the editor. Empty means all transforms.
    pub available_transforms: Vec<u64>,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            config_file: None,
            cleanup_html: true,
            purify_html: false,
            column_type: ColumnType::Text,
            available_asset_sources: Vec::new(),
            available_transforms: Vec::new(),
        }
    }
}
