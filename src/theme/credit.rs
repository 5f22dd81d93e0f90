//! Maintainer credit in the `layout-bottom` slot.

use crate::config::{CreditConfig, SiteInfoConfig};

use super::family::{RawElement, classed, element, node};
use super::{PageContext, Slot, Slots, Theme};

/// The credit block: avatar, then label and a single name link.
///
/// ```html
/// <div class="footer-avatar">
///   <img src="{avatar}" alt="{name}" width="{size}" height="{size}" class="footer-avatar__img">
///   <div class="footer-avatar__text">{label}<a href="{url}" target="_blank" rel="noopener">{name}</a></div>
/// </div>
/// ```
///
/// Root-relative `avatar` and `url` values get the site base; absolute URLs
/// are kept as written.
fn footer_fragment(credit: &CreditConfig, site: &SiteInfoConfig) -> RawElement {
    let size = credit.size.to_string();

    let mut img = classed("img", "footer-avatar__img");
    img.set_attr("src", site.asset_url(&credit.avatar));
    img.set_attr("alt", &credit.name);
    img.set_attr("width", &size);
    img.set_attr("height", &size);

    let mut link = element("a");
    link.set_attr("href", site.asset_url(&credit.url));
    link.set_attr("target", "_blank");
    link.set_attr("rel", "noopener");
    link.push_text(&credit.name);

    let mut text = classed("div", "footer-avatar__text");
    text.push_text(&credit.label);
    text.push_elem(link);

    let mut block = classed("div", "footer-avatar");
    block.push_elem(img);
    block.push_elem(text);
    block
}

/// Wraps a theme and adds the credit block to `layout-bottom`.
///
/// Everything else is delegated: the wrapper exposes the base's slots and
/// content the caller put in any slot (`layout-bottom` included) is kept.
/// The credit goes after caller content.
pub struct CreditTheme<T> {
    base: T,
    credit: CreditConfig,
    name: String,
}

impl<T: Theme> CreditTheme<T> {
    pub fn new(base: T, credit: CreditConfig) -> Self {
        let name = format!("{}+credit", base.name());
        Self { base, credit, name }
    }
}

impl<T: Theme> Theme for CreditTheme<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn slots(&self) -> &[Slot] {
        self.base.slots()
    }

    fn layout(&self, page: &PageContext<'_>, mut slots: Slots) -> RawElement {
        let fragment = footer_fragment(&self.credit, &page.config.site);
        slots.fill(Slot::LayoutBottom, node(fragment));
        self.base.layout(page, slots)
    }
}
