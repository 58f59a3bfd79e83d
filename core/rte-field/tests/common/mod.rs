//! Shared test helpers for field tests.

#![allow(dead_code)]

use rte_field::{
    AssetFolder, AssetSource, AssetTransform, CategoryGroup, CmsHost, LinkOption, Orientation,
    Section, SectionKind,
};
use std::collections::HashMap;

/// In-memory host with a small fixed site structure.
pub struct MockHost {
    pub refs: HashMap<String, String>,
    pub sections: Vec<Section>,
    pub category_groups: Vec<CategoryGroup>,
    pub asset_sources: Vec<AssetSource>,
    pub folders: Vec<AssetFolder>,
    pub transforms: Vec<AssetTransform>,
    pub extra_links: Vec<LinkOption>,
    pub rtl_locales: Vec<String>,
}

impl MockHost {
    pub fn new() -> Self {
        let refs = [
            ("{entry:3}", "/blog/hello"),
            ("{asset:42:thumb}", "/uploads/_thumb/photo.jpg"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            refs,
            sections: vec![
                Section { id: 1, kind: SectionKind::Channel, has_urls: true },
                Section { id: 2, kind: SectionKind::Single, has_urls: true },
                Section { id: 3, kind: SectionKind::Structure, has_urls: false },
                Section { id: 4, kind: SectionKind::Structure, has_urls: true },
            ],
            category_groups: vec![
                CategoryGroup { id: 7, has_urls: true },
                CategoryGroup { id: 8, has_urls: false },
            ],
            asset_sources: vec![
                AssetSource { id: 10, name: "Images".into() },
                AssetSource { id: 11, name: "Documents".into() },
            ],
            folders: vec![
                AssetFolder { id: 100, source_id: 10 },
                AssetFolder { id: 101, source_id: 11 },
                AssetFolder { id: 102, source_id: 12 },
            ],
            transforms: vec![
                AssetTransform { id: 1, handle: "thumb".into(), name: "Thumb".into() },
                AssetTransform { id: 2, handle: "hero".into(), name: "Hero <wide>".into() },
            ],
            extra_links: Vec::new(),
            rtl_locales: vec!["ar".into(), "he".into()],
        }
    }
}

impl CmsHost for MockHost {
    fn parse_refs(&self, html: &str) -> String {
        self.refs
            .iter()
            .fold(html.to_string(), |acc, (tag, url)| acc.replace(tag.as_str(), url))
    }

    fn namespace_input_id(&self, id: &str) -> String {
        format!("ns-{id}")
    }

    fn current_language(&self) -> String {
        "en_us".into()
    }

    fn locale_orientation(&self, locale: &str) -> Orientation {
        if self.rtl_locales.iter().any(|l| l == locale) {
            Orientation::Rtl
        } else {
            Orientation::Ltr
        }
    }

    fn sections(&self) -> Vec<Section> {
        self.sections.clone()
    }

    fn category_groups(&self) -> Vec<CategoryGroup> {
        self.category_groups.clone()
    }

    fn public_asset_sources(&self) -> Vec<AssetSource> {
        self.asset_sources.clone()
    }

    fn top_level_folders(&self, source_ids: &[u64]) -> Vec<AssetFolder> {
        self.folders
            .iter()
            .filter(|f| source_ids.contains(&f.source_id))
            .cloned()
            .collect()
    }

    fn transforms(&self) -> Vec<AssetTransform> {
        self.transforms.clone()
    }

    fn extra_link_options(&self) -> Vec<LinkOption> {
        self.extra_links.clone()
    }
}
