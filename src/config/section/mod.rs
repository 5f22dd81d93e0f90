//! Configuration section definitions.
//!
//! | Section            | Type                 |
//! |--------------------|----------------------|
//! | `[site]`           | `SiteInfoConfig`     |
//! | `[[site.head]]`    | `HeadTag`            |
//! | `[[nav]]`          | `NavEntry`           |
//! | `[sidebar]`        | `SidebarMap`         |
//! | `[search]`, `[edit_link]`, `[footer]`, `[[social_links]]`, `[theme]` | `theme` |

mod nav;
mod sidebar;
mod site;
mod theme;

pub use nav::NavEntry;
pub use sidebar::{SidebarItem, SidebarMap, SidebarSection};
pub use site::{HeadTag, SiteInfoConfig};
pub use theme::{
    CreditConfig, EditLinkConfig, FooterConfig, SearchConfig, SearchProvider, SocialLink,
    ThemeSectionConfig,
};

pub(crate) use theme::validate_http_url;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::{LinkKind, has_base_prefix};

/// Check a nav/sidebar link: external, or root-relative without the base.
///
/// Links are authored relative to the site root and the base is applied at
/// render time, so a link that already carries it would end up doubled.
pub(crate) fn validate_page_link(
    link: &str,
    base: &str,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    match LinkKind::parse(link) {
        LinkKind::External(url) => {
            if LinkKind::is_http(url) && url::Url::parse(url).is_err() {
                diag.error(field, format!("invalid URL '{url}'"));
            }
        }
        LinkKind::SiteRoot(path) if has_base_prefix(base, path) => {
            let stripped = &path[base.trim_end_matches('/').len()..];
            diag.error_with_hint(
                field,
                format!("link '{path}' already includes the base path '{base}'"),
                format!("write it relative to the site root: '{stripped}'"),
            );
        }
        LinkKind::SiteRoot(_) => {}
        LinkKind::Fragment(_) | LinkKind::Relative(_) => {
            diag.error_with_hint(
                field,
                format!("link '{link}' is not root-relative"),
                format!("start it with a slash: '/{}'", link.trim_start_matches("./")),
            );
        }
    }
}
