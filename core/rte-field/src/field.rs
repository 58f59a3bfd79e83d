//! The rich text field type.

use crate::capacity::check_storage_capacity;
use crate::config::{ConfigLoader, EditorConfig};
use crate::error::FieldResult;
use crate::host::{CmsHost, LinkOption, Orientation, SectionKind};
use crate::policy::{AmmoniaSanitizer, HtmlSanitizer, apply_content_policy};
use crate::settings::{ColumnType, FieldSettings};
use crate::value::RichTextValue;
use rte_plugin::EditorKind;
use rte_refs::{decode_for_display, encode_for_storage};
use serde::Serialize;
use std::path::Path;

/// Everything the host template needs to render the editor input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputContext {
    /// Namespaced DOM id of the input.
    pub id: String,
    /// Form field name.
    pub name: String,
    pub link_options: Vec<LinkOption>,
    /// `folder:{id}` sources for the asset picker.
    pub asset_sources: Vec<String>,
    pub transforms: Vec<TransformOption>,
    pub element_locale: String,
    /// Parsed editor configuration document.
    pub editor_config: serde_json::Value,
    pub editor_lang: String,
    /// Explicit text direction, only set for translatable fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Orientation>,
    /// Content with reference tags prepared for the editor.
    pub value: String,
}

impl InputContext {
    /// JSON handed to the input template.
    pub fn to_json(&self) -> FieldResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Image transform offered in the editor, HTML-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformOption {
    pub handle: String,
    pub name: String,
}

/// A `<select>` option in the settings form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Data for the field's settings form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsOptions {
    pub settings: FieldSettings,
    pub config_options: Vec<SelectOption>,
    pub asset_source_options: Vec<SelectOption>,
    pub transform_options: Vec<SelectOption>,
    pub columns: Vec<SelectOption>,
    /// Whether the field already exists (its column type is then fixed).
    pub existing: bool,
}

/// Rich text field backed by a WYSIWYG editor.
pub struct RichTextField {
    settings: FieldSettings,
    editor: EditorConfig,
    loader: ConfigLoader,
    sanitizer: Box<dyn HtmlSanitizer>,
    translatable: bool,
}

impl RichTextField {
    /// Display name of the field type.
    pub const NAME: &'static str = EditorKind::CkEditor.field_name();

    /// Editor config directory name under the host config path.
    pub const CONFIG_DIR: &'static str = EditorKind::CkEditor.config_dir();

    /// Creates a field reading editor configs from `<config_root>/ckeditor/`.
    pub fn new(
        settings: FieldSettings,
        editor: EditorConfig,
        config_root: impl AsRef<Path>,
    ) -> Self {
        Self {
            settings,
            editor,
            loader: ConfigLoader::new(config_root, Self::CONFIG_DIR),
            sanitizer: Box::new(AmmoniaSanitizer),
            translatable: false,
        }
    }

    /// Replaces the default sanitizer.
    #[must_use]
    pub fn with_sanitizer(mut self, sanitizer: Box<dyn HtmlSanitizer>) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    /// Marks the field as translatable; its input then carries a text direction.
    #[must_use]
    pub fn translatable(mut self, translatable: bool) -> Self {
        self.translatable = translatable;
        self
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    /// Wraps a stored value for templates. Empty values have no content.
    pub fn prep_value(&self, stored: Option<&str>, charset: &str) -> Option<RichTextValue> {
        stored
            .filter(|value| !value.is_empty())
            .map(|value| RichTextValue::new(value, charset))
    }

    /// Turns posted editor content into its storage form.
    pub fn prep_value_from_post(&self, posted: &str) -> FieldResult<String> {
        let value = apply_content_policy(posted, &self.settings, self.sanitizer.as_ref())?;
        Ok(encode_for_storage(&value))
    }

    /// Validates a storage-ready value. `attribute` is the field's display name.
    pub fn validate(&self, value: &str, attribute: &str) -> FieldResult<()> {
        check_storage_capacity(value, self.settings.column_type, attribute)
    }

    /// Builds the render context for the editor input.
    ///
    /// `element_locale` is the locale of the element being edited, if any.
    pub fn input_context(
        &self,
        host: &dyn CmsHost,
        name: &str,
        value: &str,
        element_locale: Option<&str>,
    ) -> FieldResult<InputContext> {
        let editor_config = self.loader.load(self.settings.config_file.as_deref())?;
        let element_locale = element_locale
            .map(str::to_string)
            .unwrap_or_else(|| host.current_language());
        let direction = self
            .translatable
            .then(|| host.locale_orientation(&element_locale));

        let value = if value.contains('{') {
            host.parse_refs(&decode_for_display(value))
        } else {
            value.to_string()
        };

        Ok(InputContext {
            id: host.namespace_input_id(&format_input_id(name)),
            name: name.to_string(),
            link_options: self.link_options(host),
            asset_sources: self.asset_sources(host),
            transforms: self.transforms(host),
            element_locale,
            editor_config,
            editor_lang: self.editor.language.clone(),
            direction,
            value,
        })
    }

    /// Read-only rendering of a value.
    pub fn static_html(&self, value: &str) -> String {
        let body = if value.is_empty() { "&nbsp;" } else { value };
        format!("<div class=\"text\">{body}</div>")
    }

    /// Options for the settings form. `existing` is true once the field has been saved.
    pub fn settings_options(
        &self,
        host: &dyn CmsHost,
        existing: bool,
    ) -> FieldResult<SettingsOptions> {
        let mut config_options = vec![SelectOption::new("Default", "")];
        for file in self.loader.list_config_files()? {
            let label = Path::new(&file)
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.clone());
            config_options.push(SelectOption::new(label, file));
        }

        let asset_source_options = host
            .public_asset_sources()
            .into_iter()
            .map(|source| SelectOption::new(source.name, source.id.to_string()))
            .collect();

        let transform_options = host
            .transforms()
            .into_iter()
            .map(|transform| SelectOption::new(transform.name, transform.id.to_string()))
            .collect();

        let columns = ColumnType::SELECTABLE
            .iter()
            .map(|column| SelectOption::new(column.label(), column.as_str()))
            .collect();

        Ok(SettingsOptions {
            settings: self.settings.clone(),
            config_options,
            asset_source_options,
            transform_options,
            columns,
            existing,
        })
    }

    fn link_options(&self, host: &dyn CmsHost) -> Vec<LinkOption> {
        let mut options = Vec::new();

        let section_sources = section_sources(host);
        if !section_sources.is_empty() {
            options.push(LinkOption::new("Link to an entry", "Entry", section_sources));
        }

        let category_sources: Vec<String> = host
            .category_groups()
            .into_iter()
            .filter(|group| group.has_urls)
            .map(|group| format!("group:{}", group.id))
            .collect();
        if !category_sources.is_empty() {
            options.push(LinkOption::new("Link to a category", "Category", category_sources));
        }

        options.extend(host.extra_link_options());
        options
    }

    fn asset_sources(&self, host: &dyn CmsHost) -> Vec<String> {
        let source_ids = if self.settings.available_asset_sources.is_empty() {
            host.public_asset_sources().into_iter().map(|s| s.id).collect()
        } else {
            self.settings.available_asset_sources.clone()
        };

        host.top_level_folders(&source_ids)
            .into_iter()
            .map(|folder| format!("folder:{}", folder.id))
            .collect()
    }

    fn transforms(&self, host: &dyn CmsHost) -> Vec<TransformOption> {
        let allowed = &self.settings.available_transforms;
        host.transforms()
            .into_iter()
            .filter(|transform| allowed.is_empty() || allowed.contains(&transform.id))
            .map(|transform| TransformOption {
                handle: html_encode(&transform.handle),
                name: html_encode(&transform.name),
            })
            .collect()
    }
}

/// Entry sources with URLs; `singles` leads when any single section exists.
fn section_sources(host: &dyn CmsHost) -> Vec<String> {
    let mut show_singles = false;
    let mut sources = Vec::new();
    for section in host.sections() {
        if section.kind == SectionKind::Single {
            show_singles = true;
        } else if section.has_urls {
            sources.push(format!("section:{}", section.id));
        }
    }
    if show_singles {
        sources.insert(0, "singles".to_string());
    }
    sources
}

/// Turns a form field name into a DOM id: `fields[body]` → `fields-body`.
pub fn format_input_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars() {
        if matches!(c, '[' | ']' | '\\') {
            if !in_run {
                id.push('-');
                in_run = true;
            }
        } else {
            id.push(c);
            in_run = false;
        }
    }
    id.trim_end_matches('-').to_string()
}

/// Escapes the five HTML special characters.
pub fn html_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
