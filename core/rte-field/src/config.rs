//! Editor configuration documents.
//!
//! Each editor reads optional config files from its own directory under the
//! host's config path (`<config>/ckeditor/`, `<config>/tinymce/`). JSON files
//! are inlined into the input context; `.js` files are referenced by path so
//! the editor can load them itself.

use crate::error::{FieldError, FieldResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Language the editor UI uses when nothing else is configured.
pub const DEFAULT_EDITOR_LANGUAGE: &str = "en";

/// Editor-wide options passed into every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// UI language code handed to the editor.
    pub language: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_EDITOR_LANGUAGE.to_string(),
        }
    }
}

/// Loads config documents from one editor's config directory.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    dir: PathBuf,
}

impl ConfigLoader {
    /// Loader for `<config_root>/<editor_dir>/`.
    pub fn new(config_root: impl AsRef<Path>, editor_dir: &str) -> Self {
        Self {
            dir: config_root.as_ref().join(editor_dir),
        }
    }

    /// The directory config files are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the raw JSON document for `config_file`.
    ///
    /// Unset names and missing or empty files yield `{}`. A `.js` file yields
    /// `{"customConfig": "<path>"}` without being read.
    pub fn load_json(&self, config_file: Option<&str>) -> FieldResult<String> {
        let Some(name) = config_file.filter(|name| !name.is_empty()) else {
            return Ok("{}".to_string());
        };

        let path = self.dir.join(name);
        if path.extension().is_some_and(|ext| ext == "js") {
            let wrapper = serde_json::json!({ "customConfig": path.display().to_string() });
            return Ok(wrapper.to_string());
        }

        match fs::read_to_string(&path) {
            Ok(contents) if !contents.trim().is_empty() => Ok(contents),
            Ok(_) => {
                debug!("Editor config {:?} is empty, using defaults", path);
                Ok("{}".to_string())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Editor config {:?} not found, using defaults", path);
                Ok("{}".to_string())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Loads and parses `config_file`, allowing `//` and `/* */` comments.
    ///
    /// A document that does not parse is logged and replaced by `{}` so the
    /// editor still renders with its defaults.
    pub fn load(&self, config_file: Option<&str>) -> FieldResult<serde_json::Value> {
        match self.try_load(config_file) {
            Err(FieldError::InvalidConfig { file, source }) => {
                warn!("Editor config {:?} is not valid JSON, using defaults: {}", file, source);
                Ok(serde_json::Value::Object(Default::default()))
            }
            other => other,
        }
    }

    /// Like [`load`](Self::load), but reports unparsable documents as
    /// [`FieldError::InvalidConfig`].
    pub fn try_load(&self, config_file: Option<&str>) -> FieldResult<serde_json::Value> {
        let json = self.load_json(config_file)?;
        serde_json::from_str(&strip_json_comments(&json)).map_err(|source| {
            FieldError::InvalidConfig {
                file: config_file.unwrap_or_default().to_string(),
                source,
            }
        })
    }

    /// File names of the `.js` and `.json` configs available, sorted.
    ///
    /// A missing directory has no configs.
    pub fn list_config_files(&self) -> FieldResult<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".js") || name.ends_with(".json") {
                files.push(name);
            }
        }
        files.sort();
        Ok(files)
    }
}

/// Removes `//` line comments and `/* */` block comments outside of strings.
pub fn strip_json_comments(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut chars = json.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (c, chars.peek()) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => out.push(c),
        }
    }
    out
}
