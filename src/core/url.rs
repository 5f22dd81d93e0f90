//! URL path type for page paths.
//!
//! - Internal representation: Always decoded (human-readable)
//! - Browser boundary: Decode on input

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decoded, root-relative page path.
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - No query string or fragment
/// - A trailing slash is kept as written: `/guide/` is a directory index,
///   `/guide/testing` is a page
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create from browser URL (decode percent-encoding, strip query string).
    pub fn from_browser(encoded: &str) -> Self {
        use percent_encoding::percent_decode_str;
        let path = encoded.split(['?', '#']).next().unwrap_or(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        Self::from_page(&decoded)
    }

    /// Create page path from decoded input. Adds a leading slash if missing
    /// and strips query string and fragment.
    pub fn from_page(decoded: &str) -> Self {
        let trimmed = decoded.trim();
        let path = trimmed.split(['?', '#']).next().unwrap_or(trimmed);

        if path.is_empty() || path == "/" {
            return Self(Arc::from("/"));
        }

        if path.starts_with('/') {
            Self(Arc::from(path))
        } else {
            Self(Arc::from(format!("/{path}")))
        }
    }

    /// Get the decoded URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if path starts with the given prefix.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Check if this path names a directory index (ends with `/`).
    #[inline]
    pub fn is_index(&self) -> bool {
        self.0.ends_with('/')
    }

    /// Markdown source path relative to the docs directory.
    ///
    /// `/guide/` -> `guide/index.md`, `/guide/testing` -> `guide/testing.md`,
    /// `/guide/testing.html` -> `guide/testing.md`
    pub fn source_path(&self) -> String {
        let relative = self.0.trim_start_matches('/');
        if self.is_index() {
            return format!("{relative}index.md");
        }
        let stem = relative.strip_suffix(".html").unwrap_or(relative);
        format!("{stem}.md")
    }

    /// Compare ignoring trailing slash and a `.html` suffix.
    pub fn matches_link(&self, link: &str) -> bool {
        fn canonical(s: &str) -> &str {
            let s = s.split('#').next().unwrap_or(s);
            let s = s.strip_suffix(".html").unwrap_or(s);
            s.trim_end_matches('/')
        }
        canonical(&self.0) == canonical(link)
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self::from_page("/")
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UrlPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::from_page(s)
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UrlPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_page(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_browser_space() {
        let url = UrlPath::from_browser("/guide/hello%20world");
        assert_eq!(url.as_str(), "/guide/hello world");
    }

    #[test]
    fn test_from_browser_strips_query() {
        let url = UrlPath::from_browser("/guide/testing?tab=2");
        assert_eq!(url.as_str(), "/guide/testing");
    }

    #[test]
    fn test_from_browser_invalid_utf8() {
        let url = UrlPath::from_browser("/guide/%FF");
        assert_eq!(url.as_str(), "/guide/%FF");
    }

    #[test]
    fn test_from_page_adds_leading_slash() {
        assert_eq!(UrlPath::from_page("guide/").as_str(), "/guide/");
        assert_eq!(UrlPath::from_page("").as_str(), "/");
    }

    #[test]
    fn test_from_page_keeps_trailing_slash_as_written() {
        assert_eq!(
            UrlPath::from_page("/guide/milestone-1-detailed").as_str(),
            "/guide/milestone-1-detailed"
        );
        assert_eq!(UrlPath::from_page("/templates/").as_str(), "/templates/");
    }

    #[test]
    fn test_from_page_strips_fragment() {
        let url = UrlPath::from_page("/templates/#how-to-choose");
        assert_eq!(url.as_str(), "/templates/");
    }

    #[test]
    fn test_source_path() {
        assert_eq!(UrlPath::from_page("/").source_path(), "index.md");
        assert_eq!(UrlPath::from_page("/guide/").source_path(), "guide/index.md");
        assert_eq!(
            UrlPath::from_page("/guide/testing").source_path(),
            "guide/testing.md"
        );
        assert_eq!(
            UrlPath::from_page("/guide/testing.html").source_path(),
            "guide/testing.md"
        );
    }

    #[test]
    fn test_matches_link() {
        let page = UrlPath::from_page("/guide/testing");
        assert!(page.matches_link("/guide/testing"));
        assert!(page.matches_link("/guide/testing.html"));
        assert!(page.matches_link("/guide/testing/"));
        assert!(!page.matches_link("/guide/"));

        let index = UrlPath::from_page("/templates/");
        assert!(index.matches_link("/templates/#how-to-choose"));
    }
}
