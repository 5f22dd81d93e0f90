//! Core types - pure abstractions shared across the codebase.

mod link;
mod url;

pub use link::{LinkKind, has_base_prefix, page_href, with_base};
pub use url::UrlPath;
