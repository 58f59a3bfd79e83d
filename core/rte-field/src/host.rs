//! Collaborator interface to the host CMS.
//!
//! The field never talks to the element registry, asset subsystem or
//! localization directly; whatever it needs from them comes through
//! [`CmsHost`].

use serde::Serialize;

/// How a section publishes its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Single,
    Channel,
    Structure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: u64,
    pub kind: SectionKind,
    pub has_urls: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub id: u64,
    pub has_urls: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSource {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFolder {
    pub id: u64,
    pub source_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTransform {
    pub id: u64,
    pub handle: String,
    pub name: String,
}

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Ltr,
    Rtl,
}

/// An entry in the editor's link menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkOption {
    /// User-facing title in the link dropdown.
    pub option_title: String,
    /// Element type the option links to.
    pub element_type: String,
    /// Sources elements can be picked from.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    /// Element criteria limiting the selectable elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<serde_json::Value>,
    /// Storage key for the element selector modal state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_key: Option<String>,
}

impl LinkOption {
    /// Link option over `sources` without criteria or storage key.
    pub fn new(option_title: &str, element_type: &str, sources: Vec<String>) -> Self {
        Self {
            option_title: option_title.to_string(),
            element_type: element_type.to_string(),
            sources,
            criteria: None,
            storage_key: None,
        }
    }
}

/// Services the field needs from the host CMS.
pub trait CmsHost {
    /// Replaces reference tags in `html` with the URLs they resolve to.
    fn parse_refs(&self, html: &str) -> String;

    /// Prefixes an input id with the current form namespace.
    fn namespace_input_id(&self, id: &str) -> String {
        id.to_string()
    }

    /// Locale of the current request, used when no element is being edited.
    fn current_language(&self) -> String;

    fn locale_orientation(&self, _locale: &str) -> Orientation {
        Orientation::Ltr
    }

    fn sections(&self) -> Vec<Section>;

    fn category_groups(&self) -> Vec<CategoryGroup>;

    fn public_asset_sources(&self) -> Vec<AssetSource>;

    /// Root folders of the given asset sources.
    fn top_level_folders(&self, source_ids: &[u64]) -> Vec<AssetFolder>;

    fn transforms(&self) -> Vec<AssetTransform>;

    /// Link options contributed by other plugins.
    fn extra_link_options(&self) -> Vec<LinkOption> {
        Vec::new()
    }
}
