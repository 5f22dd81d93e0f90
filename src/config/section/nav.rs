//! `[[nav]]` top navigation entries.
//!
//! # Example
//!
//! ```toml
//! [[nav]]
//! text = "Guide"
//! items = [
//!     { text = "Overview", link = "/guide/" },
//!     { text = "Prerequisites", link = "/guide/prerequisites" },
//! ]
//!
//! [[nav]]
//! text = "FAQ"
//! link = "/appendix/faq"
//! ```

use serde::{Deserialize, Serialize};

use super::validate_page_link;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::UrlPath;

/// A nav bar entry: either a link or a group header with nested entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<NavEntry>>,
}

impl NavEntry {
    #[cfg(test)]
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            items: None,
        }
    }

    #[cfg(test)]
    pub fn group(text: impl Into<String>, items: Vec<NavEntry>) -> Self {
        Self {
            text: text.into(),
            link: None,
            items: Some(items),
        }
    }

    /// Group headers are not navigable themselves.
    #[inline]
    pub fn is_group(&self) -> bool {
        self.items.is_some()
    }

    /// The link to navigate to, `None` for group headers.
    #[inline]
    pub fn navigable_link(&self) -> Option<&str> {
        if self.is_group() {
            None
        } else {
            self.link.as_deref()
        }
    }

    /// Nested entries (empty for plain links).
    #[inline]
    pub fn children(&self) -> &[NavEntry] {
        self.items.as_deref().unwrap_or_default()
    }

    /// True if this entry, or any nested entry, links to `page`.
    pub fn is_active(&self, page: &UrlPath) -> bool {
        match self.navigable_link() {
            Some(link) => page.matches_link(link),
            None => self.children().iter().any(|child| child.is_active(page)),
        }
    }

    /// Depth-first walk over every navigable link.
    pub fn links(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_links(&mut out);
        out
    }

    fn collect_links<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Some(link) = self.navigable_link() {
            out.push(link);
        }
        for child in self.children() {
            child.collect_links(out);
        }
    }

    pub(crate) fn validate(&self, base: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(field.field("text"), "nav entry text must not be empty");
        }

        match (&self.link, &self.items) {
            (Some(_), Some(_)) => diag.error_with_hint(
                field.clone(),
                format!("'{}' sets both `link` and `items`", self.text),
                "group headers are not navigable; move the link into `items`",
            ),
            (None, None) => diag.error(
                field.clone(),
                format!("'{}' needs either `link` or `items`", self.text),
            ),
            (Some(link), None) => validate_page_link(link, base, field.field("link"), diag),
            (None, Some(items)) => {
                if items.is_empty() {
                    diag.error(
                        field.field("items"),
                        format!("group '{}' has no entries", self.text),
                    );
                }
                let items_field = field.field("items");
                for (i, item) in items.iter().enumerate() {
                    item.validate(base, items_field.index(i), diag);
                }
            }
        }
    }
}
