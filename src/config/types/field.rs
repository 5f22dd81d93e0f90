//! Config field paths for diagnostics.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Dotted path to a config field, e.g. `site.base` or `nav[1].items[0].link`.
///
/// Static sections use [`FieldPath::new`]; entries inside arrays and tables
/// are addressed with [`FieldPath::index`] and [`FieldPath::key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// `nav` + 2 -> `nav[2]`
    pub fn index(&self, i: usize) -> Self {
        Self(Cow::Owned(format!("{}[{i}]", self.0)))
    }

    /// `nav[2]` + `items` -> `nav[2].items`
    pub fn field(&self, name: &str) -> Self {
        Self(Cow::Owned(format!("{}.{name}", self.0)))
    }

    /// `sidebar` + `/guide/` -> `sidebar."/guide/"`
    pub fn key(&self, key: &str) -> Self {
        Self(Cow::Owned(format!("{}.\"{key}\"", self.0)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_paths() {
        let nav = FieldPath::new("nav");
        assert_eq!(nav.index(1).field("items").index(0).as_str(), "nav[1].items[0]");
        assert_eq!(
            FieldPath::new("sidebar").key("/guide/").as_str(),
            "sidebar.\"/guide/\""
        );
    }
}
