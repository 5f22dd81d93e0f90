//! `<head>` content injection.
//!
//! Injected in order: charset, viewport, title, description meta, then every
//! `[[site.head]]` entry exactly as listed. Entries are never deduplicated:
//! a `[[site.head]]` description meta is emitted next to the one generated
//! from `site.description`, and two icon links stay two icon links.

use crate::config::{HeadTag, SiteConfig};

use super::PageContext;
use super::family::{RawElement, element, raw, text};

/// Elements whose inline content is emitted unescaped.
const RAW_CONTENT: &[&str] = &["script", "style", "noscript"];

/// Populates a `<head>` element from site configuration.
pub struct HeadInjector<'a> {
    config: &'a SiteConfig,
}

impl<'a> HeadInjector<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Build a complete `<head>` for the page.
    pub fn build(&self, page: &PageContext<'_>) -> RawElement {
        let mut head = element("head");
        self.populate(&mut head, page);
        head
    }

    /// Append site-wide head content to `head`.
    fn populate(&self, head: &mut RawElement, page: &PageContext<'_>) {
        let site = &self.config.site;

        let mut charset = element("meta");
        charset.set_attr("charset", "utf-8");
        head.push_elem(charset);

        let mut viewport = element("meta");
        viewport.set_attr("name", "viewport");
        viewport.set_attr("content", "width=device-width,initial-scale=1");
        head.push_elem(viewport);

        let mut title = element("title");
        title.push_text(&page.document_title());
        head.push_elem(title);

        if !site.description.is_empty() {
            let mut meta = element("meta");
            meta.set_attr("name", "description");
            meta.set_attr("content", &site.description);
            head.push_elem(meta);
        }

        for tag in &site.head {
            head.push_elem(self.head_element(tag));
        }
    }

    /// Convert one configured head tag. `href`/`src` go through base
    /// resolution, so URLs written with or without the base both work.
    fn head_element(&self, tag: &HeadTag) -> RawElement {
        let mut elem = element(&tag.tag);
        for (name, value) in tag.rendered_attrs() {
            if HeadTag::is_url_attr(name) {
                elem.set_attr(name, self.config.site.asset_url(&value));
            } else {
                elem.set_attr(name, value.as_ref());
            }
        }

        if let Some(content) = &tag.content {
            if RAW_CONTENT.contains(&tag.tag.as_str()) {
                elem.push(raw(content));
            } else {
                elem.push(text(content));
            }
        }
        elem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_reference_config;
    use crate::theme::family::{attr, child_elements, find_tag, render};

    fn head_for(config: &SiteConfig) -> RawElement {
        let page = PageContext::new(config, "/guide/");
        HeadInjector::new(config).build(&page)
    }

    #[test]
    fn test_head_tags_in_listed_order() {
        let config = test_reference_config();
        let head = head_for(&config);

        let icons: Vec<_> = child_elements(&head)
            .into_iter()
            .filter(|e| attr(e, "rel").as_deref() == Some("icon"))
            .filter_map(|e| attr(e, "href"))
            .collect();
        assert_eq!(
            icons,
            [
                "/how-to-make-a-game-cpp-ue/favicon.svg",
                "/how-to-make-a-game-cpp-ue/logo.svg",
            ]
        );

        let names: Vec<_> = child_elements(&head)
            .into_iter()
            .filter_map(|e| attr(e, "name"))
            .collect();
        assert_eq!(
            names,
            ["viewport", "description", "theme-color", "description", "twitter:card"]
        );
    }

    #[test]
    fn test_description_meta_is_not_deduplicated() {
        let config = test_reference_config();
        let head = head_for(&config);
        let contents: Vec<_> = child_elements(&head)
            .into_iter()
            .filter(|e| attr(e, "name").as_deref() == Some("description"))
            .filter_map(|e| attr(e, "content"))
            .collect();
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0], config.site.description);
        assert!(contents[1].starts_with("Learn to build a UE 5.6+ platformer"));
    }

    #[test]
    fn test_head_resolves_unprefixed_urls() {
        let mut config = test_reference_config();
        config.site.head = vec![
            HeadTag::new("link")
                .attr("rel", "icon")
                .attr("href", "/favicon.svg"),
        ];
        let head = head_for(&config);
        let icon = find_tag(&head, "link").unwrap();
        assert_eq!(
            attr(icon, "href").as_deref(),
            Some("/how-to-make-a-game-cpp-ue/favicon.svg")
        );
    }

    #[test]
    fn test_inline_script_is_raw() {
        let mut config = test_reference_config();
        let mut tag = HeadTag::new("script");
        tag.content = Some("if (a < b) {}".into());
        config.site.head = vec![tag];
        let html = render(head_for(&config));
        assert!(html.contains("if (a < b) {}"));
    }

    #[test]
    fn test_title_text() {
        let config = test_reference_config();
        let head = head_for(&config);
        assert_eq!(
            find_tag(&head, "title").unwrap().text_content(),
            "UE Platformer in C++"
        );
    }
}
