//! `[sidebar]` path-keyed sidebar sections.
//!
//! # Example
//!
//! ```toml
//! [[sidebar."/guide/"]]
//! text = "Getting Started"
//! items = [
//!     { text = "Overview", link = "/guide/" },
//!     { text = "Prerequisites", link = "/guide/prerequisites" },
//! ]
//!
//! [[sidebar."/appendix/"]]
//! text = "Appendix"
//! items = [{ text = "FAQ", link = "/appendix/faq" }]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::validate_page_link;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::UrlPath;

/// A single sidebar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    pub text: String,
    pub link: String,
}

/// A named, ordered group of sidebar links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSection {
    pub text: String,
    #[serde(default)]
    pub items: Vec<SidebarItem>,
}

/// Path prefix -> sidebar sections.
///
/// Keys are expected to be mutually exclusive prefixes; [`SidebarMap::resolve`]
/// still picks the longest matching key so an overlapping config degrades
/// predictably instead of depending on iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SidebarMap(BTreeMap<String, Vec<SidebarSection>>);

impl SidebarMap {
    pub const FIELD: FieldPath = FieldPath::new("sidebar");

    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn insert(&mut self, prefix: impl Into<String>, sections: Vec<SidebarSection>) {
        self.0.insert(prefix.into(), sections);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarSection])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Select the sidebar for a page by longest-prefix match.
    ///
    /// Returns `None` when no key prefixes the page path; the page is then
    /// rendered without a sidebar.
    pub fn resolve(&self, page: &UrlPath) -> Option<(&str, &[SidebarSection])> {
        self.iter()
            .filter(|(prefix, _)| page.starts_with(prefix))
            .max_by_key(|(prefix, _)| prefix.len())
    }

    /// Pairs of keys where the first is a prefix of the second.
    pub fn overlapping_keys(&self) -> Vec<(&str, &str)> {
        let keys: Vec<&str> = self.keys().collect();
        let mut overlaps = Vec::new();
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                if b.starts_with(a) {
                    overlaps.push((*a, *b));
                } else if a.starts_with(b) {
                    overlaps.push((*b, *a));
                }
            }
        }
        overlaps
    }

    pub(crate) fn validate(&self, base: &str, diag: &mut ConfigDiagnostics) {
        for (prefix, sections) in self.iter() {
            let key_field = Self::FIELD.key(prefix);

            if !prefix.starts_with('/') || !prefix.ends_with('/') {
                diag.error_with_hint(
                    key_field.clone(),
                    format!("sidebar key '{prefix}' must start and end with '/'"),
                    format!("use \"/{}/\"", prefix.trim_matches('/')),
                );
            }

            if sections.is_empty() {
                diag.error(key_field.clone(), "sidebar has no sections");
            }

            for (i, section) in sections.iter().enumerate() {
                let section_field = key_field.index(i);
                if section.items.is_empty() {
                    diag.error(
                        section_field.field("items"),
                        format!("section '{}' has no links", section.text),
                    );
                }
                let items_field = section_field.field("items");
                for (j, item) in section.items.iter().enumerate() {
                    validate_page_link(&item.link, base, items_field.index(j).field("link"), diag);
                }
            }
        }

        for (outer, inner) in self.overlapping_keys() {
            diag.error_with_hint(
                Self::FIELD.key(inner),
                format!("sidebar key '{inner}' overlaps '{outer}'"),
                "sidebar keys must not be prefixes of each other",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn section(text: &str, links: &[&str]) -> SidebarSection {
        SidebarSection {
            text: text.into(),
            items: links
                .iter()
                .map(|l| SidebarItem {
                    text: l.to_string(),
                    link: l.to_string(),
                })
                .collect(),
        }
    }

    fn guide_map() -> SidebarMap {
        let mut map = SidebarMap::new();
        map.insert("/guide/", vec![section("Guide", &["/guide/"])]);
        map.insert("/templates/", vec![section("Templates", &["/templates/"])]);
        map.insert("/reference/", vec![section("Reference", &["/reference/architecture"])]);
        map.insert("/appendix/", vec![section("Appendix", &["/appendix/faq"])]);
        map
    }

    #[test]
    fn test_parse_quoted_keys() {
        let config = test_parse_config(
            r#"
[[sidebar."/guide/"]]
text = "Getting Started"
items = [{ text = "Overview", link = "/guide/" }]

[[sidebar."/guide/"]]
text = "Milestones"
items = [{ text = "Overview", link = "/guide/milestones" }]
"#,
        );
        let (prefix, sections) = config
            .sidebar
            .resolve(&UrlPath::from_page("/guide/milestones"))
            .unwrap();
        assert_eq!(prefix, "/guide/");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].text, "Milestones");
    }

    #[test]
    fn test_keys_partition() {
        assert!(guide_map().overlapping_keys().is_empty());
    }

    #[test]
    fn test_resolve_guide_page() {
        let map = guide_map();
        let (prefix, _) = map
            .resolve(&UrlPath::from_page("/guide/milestone-1-detailed"))
            .unwrap();
        assert_eq!(prefix, "/guide/");
    }

    #[test]
    fn test_resolve_longest_prefix_wins() {
        let mut map = guide_map();
        map.insert("/", vec![section("Home", &["/"])]);
        map.insert("/guide/advanced/", vec![section("Advanced", &["/guide/advanced/"])]);

        let page = UrlPath::from_page("/guide/milestone-1-detailed");
        assert_eq!(map.resolve(&page).unwrap().0, "/guide/");

        let page = UrlPath::from_page("/guide/advanced/net");
        assert_eq!(map.resolve(&page).unwrap().0, "/guide/advanced/");
    }

    #[test]
    fn test_resolve_no_match() {
        let map = guide_map();
        assert!(map.resolve(&UrlPath::from_page("/")).is_none());
        assert!(map.resolve(&UrlPath::from_page("/blog/post")).is_none());
        // `/guide` without slash is not under `/guide/`
        assert!(map.resolve(&UrlPath::from_page("/guide")).is_none());
    }

    #[test]
    fn test_validate_overlap_reported() {
        let mut map = guide_map();
        map.insert("/guide/extra/", vec![section("Extra", &["/guide/extra/"])]);
        let mut diag = ConfigDiagnostics::new();
        map.validate("/", &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "sidebar.\"/guide/extra/\"");
    }

    #[test]
    fn test_validate_key_shape_and_links() {
        let mut map = SidebarMap::new();
        map.insert("guide", vec![section("Guide", &["guide/intro"])]);
        let mut diag = ConfigDiagnostics::new();
        map.validate("/", &mut diag);
        assert_eq!(diag.len(), 2);
        assert_eq!(
            diag.errors()[1].field.as_str(),
            "sidebar.\"guide\"[0].items[0].link"
        );
    }
}
