//! VDOM family for page chrome.
//!
//! Chrome trees are built in the `Raw` phase and pushed through the indexer
//! and processor before rendering, like any other `tola_vdom` document.

use tola_vdom::families::{LinkFamily, MediaFamily};
use tola_vdom::prelude::*;
use tola_vdom::vdom::families;

/// Phase set for chrome documents.
///
/// Generates `Chrome::Raw`, `Chrome::Indexed`, `Chrome::Processed` and the
/// `Chrome::element()`, `Chrome::indexer()`, `Chrome::processor()` helpers.
#[families]
pub struct Chrome {
    link: LinkFamily,
    media: MediaFamily,
}

/// Raw phase type alias for convenience
pub type Raw = Chrome::Raw;

/// Raw element type
pub type RawElement = Element<Raw>;

/// Raw node type
pub type RawNode = Node<Raw>;

/// Empty element.
#[inline]
pub fn element(tag: &str) -> RawElement {
    Chrome::element(tag, Attrs::new())
}

/// Element with a `class` attribute.
#[inline]
pub fn classed(tag: &str, class: &str) -> RawElement {
    Chrome::element(tag, Attrs::from([("class", class)]))
}

#[inline]
pub fn node(elem: RawElement) -> RawNode {
    Node::Element(Box::new(elem))
}

/// Escaped text node.
#[inline]
pub fn text(content: &str) -> RawNode {
    Node::Text(Text::new(content.to_string()))
}

/// Trusted markup, emitted unescaped.
#[inline]
pub fn raw(html: &str) -> RawNode {
    Node::Text(Text::raw(html))
}

/// Index, process and serialise a chrome tree.
pub fn render(root: RawElement) -> String {
    let indexed = Pipeline::new(Document::new(root))
        .pipe(Chrome::indexer())
        .into_inner();
    let processed = Pipeline::new(indexed)
        .pipe(Chrome::processor())
        .into_inner();

    let bytes = render_document_bytes(&processed, &RenderConfig::new(false, false));
    String::from_utf8_lossy(&bytes).into_owned()
}

// ============================================================================
// Test helpers (tree queries)
// ============================================================================

#[cfg(test)]
pub fn descendants(elem: &RawElement) -> Vec<&RawElement> {
    let mut out = vec![elem];
    for child in &elem.children {
        if let Node::Element(child) = child {
            out.extend(descendants(child));
        }
    }
    out
}

#[cfg(test)]
pub fn child_elements(elem: &RawElement) -> Vec<&RawElement> {
    elem.children
        .iter()
        .filter_map(|n| match n {
            Node::Element(e) => Some(e.as_ref()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
pub fn find_tag<'a>(elem: &'a RawElement, tag: &str) -> Option<&'a RawElement> {
    descendants(elem).into_iter().find(|e| e.tag == tag)
}

#[cfg(test)]
pub fn find_class<'a>(elem: &'a RawElement, class: &str) -> Option<&'a RawElement> {
    descendants(elem).into_iter().find(|e| e.has_class(class))
}

#[cfg(test)]
pub fn count_tag(elem: &RawElement, tag: &str) -> usize {
    descendants(elem).iter().filter(|e| e.tag == tag).count()
}

#[cfg(test)]
pub fn attr(elem: &RawElement, name: &str) -> Option<String> {
    elem.get_attr(name).map(|s| s.to_string())
}
