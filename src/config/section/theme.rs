//! Theme-level settings: search, edit link, footer, social links, credit.
//!
//! # Example
//!
//! ```toml
//! [search]
//! provider = "local"
//!
//! [edit_link]
//! pattern = "https://github.com/owner/repo/edit/main/docs/:path"
//! text = "Edit this page on GitHub"
//!
//! [footer]
//! message = "Released under the MIT License."
//!
//! [[social_links]]
//! icon = "github"
//! link = "https://github.com/owner/repo"
//!
//! [theme.credit]
//! name = "@grzott"
//! url = "https://github.com/grzott"
//! avatar = "https://github.com/grzott.png"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::UrlPath;

// ============================================================================
// search
// ============================================================================

/// Search mode. Indexing and querying belong to the site's front-end;
/// this only records which mode the rendered pages advertise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// No search box.
    #[default]
    None,
    /// In-browser search over a locally built index.
    Local,
}

impl SearchProvider {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Local => "local",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub provider: SearchProvider,
}

// ============================================================================
// edit link
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditLinkConfig {
    /// URL with a `:path` placeholder for the page's markdown source.
    pub pattern: String,

    #[serde(default = "default_edit_text")]
    pub text: String,
}

fn default_edit_text() -> String {
    "Edit this page".into()
}

impl EditLinkConfig {
    pub const PATTERN: FieldPath = FieldPath::new("edit_link.pattern");

    /// `pattern` with `:path` replaced by the page's source path.
    pub fn url_for(&self, page: &UrlPath) -> String {
        self.pattern.replace(":path", &page.source_path())
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.pattern.contains(":path") {
            diag.error_with_hint(
                Self::PATTERN,
                "edit link pattern has no `:path` placeholder",
                "e.g. \"https://github.com/owner/repo/edit/main/docs/:path\"",
            );
        }
    }
}

// ============================================================================
// footer
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub message: String,
    pub copyright: String,
}

impl FooterConfig {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.message.is_empty() && self.copyright.is_empty()
    }
}

// ============================================================================
// social links
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name (`github`, `discord`, ...), rendered as a class.
    pub icon: String,
    pub link: String,
}

// ============================================================================
// [theme]
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// Footer credit block placed in the `layout-bottom` slot.
    pub credit: Option<CreditConfig>,
}

/// Maintainer credit: avatar, label and a link to the maintainer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditConfig {
    /// Link text, e.g. `@grzott`. Also the avatar's `alt`.
    pub name: String,

    /// Profile URL.
    pub url: String,

    /// Avatar image URL.
    pub avatar: String,

    /// Avatar width and height in pixels.
    #[serde(default = "default_avatar_size")]
    pub size: u32,

    /// Text before the link.
    #[serde(default = "default_credit_label")]
    pub label: String,
}

const fn default_avatar_size() -> u32 {
    56
}

fn default_credit_label() -> String {
    "Maintained by ".into()
}

impl CreditConfig {
    pub const FIELD: FieldPath = FieldPath::new("theme.credit");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_http_url(&self.url, Self::FIELD.field("url"), diag);
        if self.name.trim().is_empty() {
            diag.error(Self::FIELD.field("name"), "credit name must not be empty");
        }
        if self.size == 0 {
            diag.error(Self::FIELD.field("size"), "avatar size must be positive");
        }
    }
}

/// Absolute http(s) URL check, shared by social links and credit.
pub(crate) fn validate_http_url(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some() => {}
        Ok(parsed) => diag.error_with_hint(
            field,
            format!("scheme '{}' not supported, must be http or https", parsed.scheme()),
            "use format like https://github.com/owner",
        ),
        Err(e) => diag.error_with_hint(
            field,
            format!("invalid URL '{value}': {e}"),
            "use format like https://github.com/owner",
        ),
    }
}
