//! Themes: page chrome rendering with named extension slots.
//!
//! A [`Theme`] turns a [`PageContext`] into a `tola_vdom` element tree. Its
//! layout exposes named [`Slot`]s; callers hand content for those slots in a
//! [`Slots`] value and the layout places it at the matching position.
//!
//! Extending a theme means wrapping it: the wrapper adds its own slot
//! content and delegates the rest to the base layout (see [`CreditTheme`]).
//!
//! ```text
//! CreditTheme<DefaultTheme>::layout(page, slots)
//!   └─ slots + { layout-bottom: credit fragment }
//!        └─ DefaultTheme::layout(page, slots)
//! ```

mod credit;
mod default;
mod family;
mod head;

pub use credit::CreditTheme;
pub use default::DefaultTheme;
use family::{RawElement, RawNode};
pub use head::HeadInjector;

use rustc_hash::FxHashMap;

use crate::config::{SidebarSection, SiteConfig};
use crate::core::UrlPath;

// ============================================================================
// slots
// ============================================================================

/// Named insertion points of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    LayoutTop,
    NavBarTitleAfter,
    SidebarNavBefore,
    DocBefore,
    DocAfter,
    DocFooterBefore,
    LayoutBottom,
}

impl Slot {
    pub const ALL: &'static [Slot] = &[
        Slot::LayoutTop,
        Slot::NavBarTitleAfter,
        Slot::SidebarNavBefore,
        Slot::DocBefore,
        Slot::DocAfter,
        Slot::DocFooterBefore,
        Slot::LayoutBottom,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::LayoutTop => "layout-top",
            Self::NavBarTitleAfter => "nav-bar-title-after",
            Self::SidebarNavBefore => "sidebar-nav-before",
            Self::DocBefore => "doc-before",
            Self::DocAfter => "doc-after",
            Self::DocFooterBefore => "doc-footer-before",
            Self::LayoutBottom => "layout-bottom",
        }
    }
}

/// Content for named slots. Filling a slot twice appends.
#[derive(Default)]
pub struct Slots(FxHashMap<Slot, Vec<RawNode>>);

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node to a slot.
    pub fn fill(&mut self, slot: Slot, node: RawNode) {
        self.0.entry(slot).or_default().push(node);
    }

    /// Builder form of [`Slots::fill`].
    #[cfg(test)]
    pub fn with(mut self, slot: Slot, node: RawNode) -> Self {
        self.fill(slot, node);
        self
    }

    /// Remove and return a slot's content (empty if unfilled).
    pub fn take(&mut self, slot: Slot) -> Vec<RawNode> {
        self.0.remove(&slot).unwrap_or_default()
    }
}

// ============================================================================
// page context
// ============================================================================

/// Everything a layout needs to render one page.
pub struct PageContext<'a> {
    pub config: &'a SiteConfig,
    /// Page path relative to the base (`/guide/testing`).
    pub path: UrlPath,
    pub title: Option<String>,
    /// Pre-rendered page body, trusted HTML.
    pub content: String,
    /// Display string for the "Last updated" stamp.
    pub last_updated: Option<String>,
}

impl<'a> PageContext<'a> {
    pub fn new(config: &'a SiteConfig, path: impl Into<UrlPath>) -> Self {
        Self {
            config,
            path: path.into(),
            title: None,
            content: String::new(),
            last_updated: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[cfg(test)]
    pub fn with_content(mut self, html: impl Into<String>) -> Self {
        self.content = html.into();
        self
    }

    pub fn with_last_updated(mut self, stamp: impl Into<String>) -> Self {
        self.last_updated = Some(stamp.into());
        self
    }

    /// Sidebar for this page, if any key prefixes its path.
    pub fn sidebar(&self) -> Option<(&'a str, &'a [SidebarSection])> {
        self.config.sidebar.resolve(&self.path)
    }

    /// `<title>` text: "Page | Site", or just the site title.
    pub fn document_title(&self) -> String {
        match &self.title {
            Some(title) if !title.is_empty() => format!("{title} | {}", self.config.site.title),
            _ => self.config.site.title.clone(),
        }
    }
}

// ============================================================================
// theme
// ============================================================================

/// A page layout with named extension slots.
///
/// Layouts must be pure: the same page and slots always produce the same
/// tree, and rendering holds no mutable state, so one theme value can be
/// shared across threads.
pub trait Theme: Send + Sync {
    /// Theme name, for logs.
    fn name(&self) -> &str;

    /// Slots the layout places content into.
    fn slots(&self) -> &[Slot];

    /// Build the page tree, placing slot content at the matching positions.
    fn layout(&self, page: &PageContext<'_>, slots: Slots) -> RawElement;
}

/// Theme for a site: the default theme, wrapped with the credit block when
/// `[theme.credit]` is configured.
pub fn site_theme(config: &SiteConfig) -> Box<dyn Theme> {
    match &config.theme.credit {
        Some(credit) => Box::new(CreditTheme::new(DefaultTheme, credit.clone())),
        None => Box::new(DefaultTheme),
    }
}

/// Render a complete HTML document for a page.
pub fn render_page(theme: &dyn Theme, page: &PageContext<'_>) -> String {
    let html = family::render(theme.layout(page, Slots::new()));
    let has_doctype = html
        .get(..9)
        .is_some_and(|head| head.eq_ignore_ascii_case("<!doctype"));
    if has_doctype {
        html
    } else {
        format!("<!DOCTYPE html>{html}")
    }
}
