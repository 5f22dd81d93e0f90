//! The default documentation layout.
//!
//! ```text
//! html[lang]
//! ├── head                         (HeadInjector)
//! └── body
//!     └── div.layout
//!         ├── <layout-top>
//!         ├── header.nav-bar       title, <nav-bar-title-after>, search, nav menu, social links
//!         ├── aside.sidebar        <sidebar-nav-before>, sections for the matched prefix
//!         ├── main.doc             <doc-before>, content, <doc-after>,
//!         │                        footer.doc-footer (<doc-footer-before>, edit link, last updated)
//!         ├── footer.site-footer   message, copyright
//!         └── <layout-bottom>
//! ```

use crate::config::{NavEntry, SearchProvider, SidebarSection};
use crate::core::LinkKind;

use super::family::{RawElement, RawNode, classed, element, raw};
use super::{HeadInjector, PageContext, Slot, Slots, Theme};

/// Base theme every site starts from.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTheme;

impl Theme for DefaultTheme {
    fn name(&self) -> &str {
        "default"
    }

    fn slots(&self) -> &[Slot] {
        Slot::ALL
    }

    fn layout(&self, page: &PageContext<'_>, mut slots: Slots) -> RawElement {
        let config = page.config;

        let mut layout = classed("div", "layout");
        layout.children.extend(slots.take(Slot::LayoutTop));
        layout.push_elem(nav_bar(page, slots.take(Slot::NavBarTitleAfter)));
        if let Some(sidebar) = sidebar(page, slots.take(Slot::SidebarNavBefore)) {
            layout.push_elem(sidebar);
        }
        layout.push_elem(doc(page, &mut slots));
        if !config.footer.is_empty() {
            layout.push_elem(site_footer(page));
        }
        layout.children.extend(slots.take(Slot::LayoutBottom));

        let mut body = element("body");
        body.push_elem(layout);

        let mut html = element("html");
        html.set_attr("lang", &config.site.language);
        html.push_elem(HeadInjector::new(config).build(page));
        html.push_elem(body);
        html
    }
}

fn class_list(base: &str, active: bool) -> String {
    if active {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

/// `<a class href>text</a>`
fn anchor(class: &str, href: &str, text: &str) -> RawElement {
    let mut a = classed("a", class);
    a.set_attr("href", href);
    a.push_text(text);
    a
}

/// `<a>` for a nav or sidebar link. External links open in a new tab.
fn page_link(page: &PageContext<'_>, class: &str, text: &str, link: &str) -> RawElement {
    let active = page.path.matches_link(link);
    let mut a = anchor(&class_list(class, active), &page.config.site.href(link), text);
    if let LinkKind::External(_) = LinkKind::parse(link) {
        a.set_attr("target", "_blank");
        a.set_attr("rel", "noreferrer");
    }
    a
}

// ============================================================================
// nav bar
// ============================================================================

fn nav_bar(page: &PageContext<'_>, title_after: Vec<RawNode>) -> RawElement {
    let config = page.config;

    let mut bar = classed("header", "nav-bar");
    bar.push_elem(anchor(
        "nav-bar-title",
        &config.site.asset_url("/"),
        &config.site.title,
    ));
    bar.children.extend(title_after);

    if config.search.provider != SearchProvider::None {
        let mut button = classed("button", "search-button");
        button.set_attr("type", "button");
        button.push_text("Search");

        let mut search = classed("div", "nav-search");
        search.set_attr("data-provider", config.search.provider.as_str());
        search.push_elem(button);
        bar.push_elem(search);
    }

    if !config.nav.is_empty() {
        let mut menu = classed("nav", "nav-menu");
        for entry in &config.nav {
            menu.push_elem(nav_entry(page, entry));
        }
        bar.push_elem(menu);
    }

    if !config.social_links.is_empty() {
        let mut links = classed("div", "social-links");
        for social in &config.social_links {
            let class = format!("social-link social-link--{}", social.icon);
            let mut a = anchor(&class, &social.link, "");
            a.set_attr("aria-label", &social.icon);
            a.set_attr("target", "_blank");
            a.set_attr("rel", "noopener");
            links.push_elem(a);
        }
        bar.push_elem(links);
    }

    bar
}

fn nav_entry(page: &PageContext<'_>, entry: &NavEntry) -> RawElement {
    if let Some(link) = entry.navigable_link() {
        return page_link(page, "nav-link", &entry.text, link);
    }

    let mut title = classed("span", "nav-group-title");
    title.push_text(&entry.text);

    let mut items = classed("div", "nav-group-items");
    for child in entry.children() {
        items.push_elem(nav_entry(page, child));
    }

    let mut group = classed("div", &class_list("nav-group", entry.is_active(&page.path)));
    group.push_elem(title);
    group.push_elem(items);
    group
}

// ============================================================================
// sidebar
// ============================================================================

/// `None` when no sidebar key matches the page.
fn sidebar(page: &PageContext<'_>, before: Vec<RawNode>) -> Option<RawElement> {
    let (prefix, sections) = page.sidebar()?;

    let mut nav = element("nav");
    for section in sections {
        nav.push_elem(sidebar_section(page, section));
    }

    let mut aside = classed("aside", "sidebar");
    aside.set_attr("data-prefix", prefix);
    aside.children.extend(before);
    aside.push_elem(nav);
    Some(aside)
}

fn sidebar_section(page: &PageContext<'_>, section: &SidebarSection) -> RawElement {
    let mut title = classed("p", "sidebar-group-title");
    title.push_text(&section.text);

    let mut list = element("ul");
    for item in &section.items {
        let mut li = element("li");
        li.push_elem(page_link(page, "sidebar-link", &item.text, &item.link));
        list.push_elem(li);
    }

    let mut group = classed("section", "sidebar-group");
    group.push_elem(title);
    group.push_elem(list);
    group
}

// ============================================================================
// doc
// ============================================================================

fn doc(page: &PageContext<'_>, slots: &mut Slots) -> RawElement {
    let config = page.config;

    let mut content = classed("div", "doc-content");
    if !page.content.is_empty() {
        content.push(raw(&page.content));
    }

    let mut main = classed("main", "doc");
    main.children.extend(slots.take(Slot::DocBefore));
    main.push_elem(content);
    main.children.extend(slots.take(Slot::DocAfter));

    let mut footer = classed("footer", "doc-footer");
    footer.children.extend(slots.take(Slot::DocFooterBefore));

    if let Some(edit) = &config.edit_link {
        let mut a = element("a");
        a.set_attr("href", edit.url_for(&page.path));
        a.set_attr("target", "_blank");
        a.set_attr("rel", "noopener");
        a.push_text(&edit.text);

        let mut wrapper = classed("div", "edit-link");
        wrapper.push_elem(a);
        footer.push_elem(wrapper);
    }

    if config.site.last_updated
        && let Some(stamp) = &page.last_updated
    {
        let mut time = element("time");
        time.set_attr("datetime", stamp);
        time.push_text(stamp);

        let mut updated = classed("p", "last-updated");
        updated.push_text("Last updated: ");
        updated.push_elem(time);
        footer.push_elem(updated);
    }

    main.push_elem(footer);
    main
}

// ============================================================================
// site footer
// ============================================================================

/// Footer message and copyright are trusted HTML.
fn site_footer(page: &PageContext<'_>) -> RawElement {
    let footer = &page.config.footer;
    let mut elem = classed("footer", "site-footer");
    for (class, html) in [("message", &footer.message), ("copyright", &footer.copyright)] {
        if !html.is_empty() {
            let mut p = classed("p", class);
            p.push(raw(html));
            elem.push_elem(p);
        }
    }
    elem
}
