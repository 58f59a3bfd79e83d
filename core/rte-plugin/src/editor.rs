//! Supported editors.

use crate::error::PluginError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A WYSIWYG editor integrated as a rich text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorKind {
    CkEditor,
    TinyMce,
}

impl EditorKind {
    pub const ALL: [EditorKind; 2] = [EditorKind::CkEditor, EditorKind::TinyMce];

    /// Plugin handle, also used in action URLs (`/actions/<handle>/...`).
    pub const fn handle(self) -> &'static str {
        match self {
            Self::CkEditor => "ckeditor",
            Self::TinyMce => "tinymce",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::CkEditor => "CKEditor",
            Self::TinyMce => "TinyMCE",
        }
    }

    /// Name of the field type the plugin registers.
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::CkEditor => "Rich Text (CKEditor)",
            Self::TinyMce => "Rich Text (TinyMCE)",
        }
    }

    /// Directory under the host config path holding this editor's configs.
    pub const fn config_dir(self) -> &'static str {
        self.handle()
    }

    /// Whether `.json` configs are served as a script assigning `tinymce.config`.
    pub const fn wraps_json_config(self) -> bool {
        matches!(self, Self::TinyMce)
    }

    /// Script body served for config `file_name` with the given contents.
    pub fn config_script(self, file_name: &str, contents: &str) -> String {
        let is_json = Path::new(file_name)
            .extension()
            .is_some_and(|ext| ext == "json");
        if is_json && self.wraps_json_config() {
            format!("tinymce.config = {contents}")
        } else {
            contents.to_string()
        }
    }
}

impl fmt::Display for EditorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.handle())
    }
}

impl FromStr for EditorKind {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.handle() == s)
            .ok_or_else(|| PluginError::UnknownEditor(s.to_string()))
    }
}
