//! `[[site.head]]` tag entries.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::{LinkKind, has_base_prefix};

/// Elements that may be injected into `<head>`.
const HEAD_ELEMENTS: &[&str] = &["meta", "link", "script", "style", "base", "noscript"];

/// Attributes holding a URL that goes through base resolution.
const URL_ATTRS: &[&str] = &["href", "src"];

/// One element emitted into `<head>`.
///
/// ```toml
/// [[site.head]]
/// tag = "meta"
/// attrs = { name = "theme-color", content = "#0F1B2D" }
/// ```
///
/// Attribute order is preserved (`toml` is built with `preserve_order`).
/// Duplicate tags are kept: two `rel = "icon"` links are both emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadTag {
    /// Element name (`meta`, `link`, `script`, ...).
    pub tag: String,

    /// Attributes; strings, integers and booleans.
    #[serde(default)]
    pub attrs: toml::Table,

    /// Inline content for `script`/`style`/`noscript`, emitted unescaped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl HeadTag {
    #[cfg(test)]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: toml::Table::new(),
            content: None,
        }
    }

    /// Add a string attribute.
    #[cfg(test)]
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs
            .insert(name.to_string(), toml::Value::String(value.into()));
        self
    }

    /// Attributes as rendered strings, in declaration order.
    ///
    /// `true` renders as an empty (boolean) attribute, `false` is dropped.
    pub fn rendered_attrs(&self) -> impl Iterator<Item = (&str, Cow<'_, str>)> {
        self.attrs.iter().filter_map(|(name, value)| {
            let value = match value {
                toml::Value::String(s) => Cow::Borrowed(s.as_str()),
                toml::Value::Integer(i) => Cow::Owned(i.to_string()),
                toml::Value::Float(f) => Cow::Owned(f.to_string()),
                toml::Value::Boolean(true) => Cow::Borrowed(""),
                _ => return None,
            };
            Some((name.as_str(), value))
        })
    }

    /// Check the value of the given attribute (string attributes only).
    #[cfg(test)]
    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).and_then(toml::Value::as_str)
    }

    /// Whether this attribute carries a URL resolved against the base.
    #[inline]
    pub fn is_url_attr(name: &str) -> bool {
        URL_ATTRS.contains(&name)
    }

    pub(crate) fn validate(&self, base: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if !HEAD_ELEMENTS.contains(&self.tag.as_str()) {
            diag.error_with_hint(
                field.field("tag"),
                format!("'{}' is not allowed in <head>", self.tag),
                format!("use one of: {}", HEAD_ELEMENTS.join(", ")),
            );
        }

        for (name, value) in &self.attrs {
            let attr_field = field.field("attrs").field(name);
            match value {
                toml::Value::String(_)
                | toml::Value::Integer(_)
                | toml::Value::Float(_)
                | toml::Value::Boolean(_) => {}
                other => diag.error(
                    attr_field.clone(),
                    format!("unsupported attribute value type '{}'", other.type_str()),
                ),
            }

            if Self::is_url_attr(name)
                && let Some(url) = value.as_str()
                && let LinkKind::SiteRoot(path) = LinkKind::parse(url)
                && base != "/"
                && !has_base_prefix(base, path)
            {
                diag.hint(
                    attr_field,
                    format!("'{path}' has no base prefix; it will be served from '{base}'"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_parse_ordered_tags_and_attrs() {
        let config = test_parse_config(
            r##"
[[site.head]]
tag = "meta"
attrs = { name = "theme-color", content = "#0F1B2D" }

[[site.head]]
tag = "link"
attrs = { rel = "icon", href = "/favicon.svg", type = "image/svg+xml" }

[[site.head]]
tag = "link"
attrs = { rel = "icon", href = "/logo.svg", type = "image/svg+xml" }
"##,
        );
        let head = &config.site.head;
        assert_eq!(head.len(), 3);
        assert_eq!(head[0].attr_str("content"), Some("#0F1B2D"));
        // Duplicate icon links are both kept, in order
        assert_eq!(head[1].attr_str("href"), Some("/favicon.svg"));
        assert_eq!(head[2].attr_str("href"), Some("/logo.svg"));

        let names: Vec<_> = head[1].rendered_attrs().map(|(n, _)| n).collect();
        assert_eq!(names, ["rel", "href", "type"]);
    }

    #[test]
    fn test_rendered_attr_values() {
        let config = test_parse_config(
            r#"
[[site.head]]
tag = "script"
attrs = { src = "/a.js", defer = true, async = false, "data-n" = 3 }
"#,
        );
        let rendered: Vec<_> = config.site.head[0]
            .rendered_attrs()
            .map(|(n, v)| (n.to_string(), v.into_owned()))
            .collect();
        assert_eq!(
            rendered,
            [
                ("src".to_string(), "/a.js".to_string()),
                ("defer".to_string(), String::new()),
                ("data-n".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_validate_unknown_element() {
        let mut diag = ConfigDiagnostics::new();
        HeadTag::new("div").validate("/", FieldPath::new("site.head[0]"), &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.head[0].tag");
    }

    #[test]
    fn test_validate_hints_missing_base() {
        let mut diag = ConfigDiagnostics::new();
        HeadTag::new("link")
            .attr("rel", "icon")
            .attr("href", "/favicon.svg")
            .validate("/docs/", FieldPath::new("site.head[0]"), &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.hints().len(), 1);

        let mut diag = ConfigDiagnostics::new();
        HeadTag::new("link")
            .attr("href", "/docs/favicon.svg")
            .validate("/docs/", FieldPath::new("site.head[0]"), &mut diag);
        assert!(diag.hints().is_empty());
    }
}
