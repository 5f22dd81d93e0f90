//! Link classification and base-path resolution.

/// Syntactic classification of links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// External link with URL scheme (https://, mailto:, tel:, etc.)
    External(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/guide/, /reference/architecture).
    SiteRoot(&'a str),
    /// Anything else (`guide/`, `./page`). Authoring error in nav/sidebar.
    Relative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) {
            Self::External(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::Relative(link)
        }
    }

    /// Check if link is HTTP/HTTPS.
    #[inline]
    pub fn is_http(link: &str) -> bool {
        link.starts_with("http://") || link.starts_with("https://")
    }
}

/// A scheme is `[A-Za-z0-9+.-]+` followed by `:`.
fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a link into path and fragment (`/templates/#how` -> (`/templates/`, `Some("how")`)).
#[inline]
pub fn split_fragment(link: &str) -> (&str, Option<&str>) {
    match link.split_once('#') {
        Some((path, fragment)) => (path, Some(fragment)),
        None => (link, None),
    }
}

/// Check whether a root-relative link already carries the base prefix.
///
/// Always false for base `/`.
pub fn has_base_prefix(base: &str, link: &str) -> bool {
    let base = base.trim_end_matches('/');
    !base.is_empty() && (link == base || link.starts_with(&format!("{base}/")))
}

/// Prepend `base` to a root-relative link, exactly once.
///
/// Links already under the base, external links and fragments pass through.
///
/// ```ignore
/// with_base("/docs/", "/guide/")         -> "/docs/guide/"
/// with_base("/docs/", "/docs/logo.svg")  -> "/docs/logo.svg"
/// with_base("/", "/guide/")              -> "/guide/"
/// ```
pub fn with_base(base: &str, link: &str) -> String {
    match LinkKind::parse(link) {
        LinkKind::SiteRoot(path) if !has_base_prefix(base, path) => {
            format!("{}{}", base.trim_end_matches('/'), path)
        }
        _ => link.to_string(),
    }
}

/// Resolve a nav/sidebar page link to its final `href`.
///
/// Without clean URLs, extensionless page links get `.html`; directory links
/// and links with an extension are left alone. The base is applied last.
pub fn page_href(base: &str, clean_urls: bool, link: &str) -> String {
    let LinkKind::SiteRoot(_) = LinkKind::parse(link) else {
        return link.to_string();
    };

    if clean_urls {
        return with_base(base, link);
    }

    let (path, fragment) = split_fragment(link);
    let last = path.rsplit('/').next().unwrap_or_default();
    let path = if path.ends_with('/') || last.contains('.') {
        path.to_string()
    } else {
        format!("{path}.html")
    };

    let link = match fragment {
        Some(fragment) => format!("{path}#{fragment}"),
        None => path,
    };
    with_base(base, &link)
}
