//! Site configuration management for `signpost.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site/      # [site] and [[site.head]]
//! │   ├── nav        # [[nav]]
//! │   ├── sidebar    # [sidebar."/prefix/"]
//! │   └── theme      # [search] [edit_link] [footer] [[social_links]] [theme]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The configuration is parsed once, validated as a whole, and then treated
//! as immutable for every page render.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    CreditConfig, EditLinkConfig, FooterConfig, HeadTag, NavEntry, SearchConfig, SearchProvider,
    SidebarMap, SidebarSection, SiteInfoConfig, SocialLink, ThemeSectionConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing signpost.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata and head tags. Required.
    pub site: SiteInfoConfig,

    /// Top navigation bar.
    #[serde(default)]
    pub nav: Vec<NavEntry>,

    /// Sidebars keyed by path prefix.
    #[serde(default)]
    pub sidebar: SidebarMap,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLinkConfig>,

    #[serde(default)]
    pub footer: FooterConfig,

    #[serde(default)]
    pub social_links: Vec<SocialLink>,

    #[serde(default)]
    pub theme: ThemeSectionConfig,
}

impl SiteConfig {
    pub const NAV: FieldPath = FieldPath::new("nav");
    pub const SOCIAL_LINKS: FieldPath = FieldPath::new("social_links");

    /// Load configuration by searching upward from cwd for `config_name`.
    ///
    /// The project root is the config file's parent directory.
    pub fn load(config_name: &Path) -> Result<Self> {
        let config_path = find_config_file(config_name).ok_or_else(|| {
            ConfigError::Validation(format!(
                "config file '{}' not found in this directory or any parent",
                config_name.display()
            ))
        })?;

        let mut config = Self::from_path(&config_path)?;
        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;
        debug!("config"; "loaded {}", config.config_path.display());

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Unknown fields are ignored, but listed so typos don't go unnoticed.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration.
    ///
    /// Collects all authoring errors and returns them at once; hints are
    /// printed but never fail the load.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnose();
        diag.print_hints();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every check without printing anything.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        let base = self.site.base.as_str();

        self.site.validate(&mut diag);

        for (i, entry) in self.nav.iter().enumerate() {
            entry.validate(base, Self::NAV.index(i), &mut diag);
        }

        self.sidebar.validate(base, &mut diag);

        if let Some(edit_link) = &self.edit_link {
            edit_link.validate(&mut diag);
        }

        for (i, social) in self.social_links.iter().enumerate() {
            section::validate_http_url(
                &social.link,
                Self::SOCIAL_LINKS.index(i).field("link"),
                &mut diag,
            );
        }

        if let Some(credit) = &self.theme.credit {
            credit.validate(&mut diag);
        }

        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields prepended.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\nbase = \"/\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// The reference configuration shipped with the repository.
#[cfg(test)]
pub fn test_reference_config() -> SiteConfig {
    SiteConfig::from_str(include_str!("../../signpost.toml")).unwrap()
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UrlPath;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\ntitle = \"Guide\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_required_fields() {
        // No [site] at all
        assert!(SiteConfig::from_str("[search]\nprovider = \"local\"").is_err());
        // [site] without base
        assert!(SiteConfig::from_str("[site]\ntitle = \"Guide\"").is_err());
        // [site] without title
        assert!(SiteConfig::from_str("[site]\nbase = \"/\"").is_err());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"T\"\nbase = \"/\"\nlogo = \"x.svg\"\n[unknown_section]\nfield = 1";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "T");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
        assert!(ignored.iter().any(|f| f.contains("logo")));
    }

    #[test]
    fn test_reference_config_is_valid() {
        let config = test_reference_config();
        let diag = config.diagnose();
        assert!(diag.is_empty(), "{diag}");
        assert_eq!(config.site.base, "/how-to-make-a-game-cpp-ue/");
        assert_eq!(config.search.provider, SearchProvider::Local);
    }

    #[test]
    fn test_reference_groups_are_not_navigable() {
        let config = test_reference_config();
        for entry in &config.nav {
            if entry.is_group() {
                assert!(entry.link.is_none(), "group '{}' has a link", entry.text);
            }
        }
    }

    #[test]
    fn test_reference_sidebar_partition() {
        let config = test_reference_config();
        let keys: Vec<_> = config.sidebar.keys().collect();
        assert_eq!(keys, ["/appendix/", "/guide/", "/reference/", "/templates/"]);
        for a in &keys {
            for b in &keys {
                if a != b {
                    assert!(!b.starts_with(a), "'{a}' is a prefix of '{b}'");
                }
            }
        }
        let page = UrlPath::from_page("/guide/milestone-1-detailed");
        assert_eq!(config.sidebar.resolve(&page).unwrap().0, "/guide/");
    }

    #[test]
    fn test_reference_favicon_not_doubled() {
        let config = test_reference_config();
        let icon = config
            .site
            .head
            .iter()
            .find(|t| t.attr_str("rel") == Some("icon"))
            .and_then(|t| t.attr_str("href"))
            .unwrap();
        assert_eq!(
            config.site.asset_url(icon),
            "/how-to-make-a-game-cpp-ue/favicon.svg"
        );
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = test_parse_config(
            r#"
[[nav]]
text = "Broken"
link = "guide/"

[[nav]]
text = "Empty"

[edit_link]
pattern = "https://example.com/edit"

[[social_links]]
icon = "github"
link = "not a url"
"#,
        );
        let diag = config.diagnose();
        assert_eq!(diag.len(), 4, "{diag}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signpost.toml");
        fs::write(
            &path,
            "[site]\ntitle = \"Docs\"\nbase = \"/docs/\"\n\n[[nav]]\ntext = \"Guide\"\nlink = \"/guide/\"\n",
        )
        .unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.site.title, "Docs");
        assert_eq!(config.root, dir.path());
        assert_eq!(config.config_path, path);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signpost.toml");
        fs::write(&path, "[site]\ntitle = \"\"\nbase = \"docs\"\n").unwrap();

        let err = SiteConfig::load(&path).unwrap_err();
        let diag = match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Diagnostics(diag)) => diag,
            other => panic!("unexpected error: {other:?}"),
        };
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_serialize_round_trip_keeps_structure() {
        let config = test_reference_config();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["site"]["title"], "UE Platformer in C++");
        assert!(json["sidebar"]["/guide/"].is_array());
        assert!(json.get("config_path").is_none());
    }
}
