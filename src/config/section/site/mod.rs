//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "UE Platformer in C++"
//! description = "Modern, concise guidance for building a UE 5.6+ platformer in C++"
//! base = "/how-to-make-a-game-cpp-ue/"
//! clean_urls = true
//! last_updated = true
//!
//! [[site.head]]
//! tag = "link"
//! attrs = { rel = "icon", href = "/how-to-make-a-game-cpp-ue/favicon.svg", type = "image/svg+xml" }
//! ```

mod head;

pub use head::HeadTag;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::{page_href, with_base};

/// Global site metadata. `title` and `base` have no serde default: a config
/// without them fails to parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfoConfig {
    /// Site title, used in `<title>` and the nav bar.
    pub title: String,

    /// Site description for `<meta name="description">`.
    #[serde(default)]
    pub description: String,

    /// URL prefix the whole site is served under (e.g. "/docs/").
    pub base: String,

    /// Language code for `<html lang>`.
    #[serde(default = "default_language")]
    pub language: String,

    /// Render page links without `.html`.
    #[serde(default = "default_true")]
    pub clean_urls: bool,

    /// Show the "Last updated" stamp when a page provides one.
    #[serde(default)]
    pub last_updated: bool,

    /// Extra `<head>` elements, emitted in order.
    #[serde(default)]
    pub head: Vec<HeadTag>,
}

fn default_language() -> String {
    "en-US".into()
}

const fn default_true() -> bool {
    true
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            base: "/".into(),
            language: default_language(),
            clean_urls: true,
            last_updated: false,
            head: Vec::new(),
        }
    }
}

impl SiteInfoConfig {
    pub const TITLE: FieldPath = FieldPath::new("site.title");
    pub const BASE: FieldPath = FieldPath::new("site.base");
    pub const HEAD: FieldPath = FieldPath::new("site.head");

    /// Final `href` for a nav or sidebar page link.
    #[inline]
    pub fn href(&self, link: &str) -> String {
        page_href(&self.base, self.clean_urls, link)
    }

    /// Final URL for a static asset (favicon, logo). Never doubles the base.
    #[inline]
    pub fn asset_url(&self, path: &str) -> String {
        with_base(&self.base, path)
    }

    /// Validate title, base and head tags.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::TITLE, "site title must not be empty");
        }

        if !self.base.starts_with('/') || !self.base.ends_with('/') {
            let trimmed = self.base.trim_matches('/');
            let suggestion = if trimmed.is_empty() {
                "/".to_string()
            } else {
                format!("/{trimmed}/")
            };
            diag.error_with_hint(
                Self::BASE,
                format!("base '{}' must start and end with '/'", self.base),
                format!("use \"{suggestion}\""),
            );
        }

        for (i, tag) in self.head.iter().enumerate() {
            tag.validate(&self.base, Self::HEAD.index(i), diag);
        }
    }
}
