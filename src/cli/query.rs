//! `query` command: resolved navigation data as JSON.
//!
//! Links are printed as the final `href`s pages will use (base applied,
//! `.html` added without clean URLs), so the output can be checked against
//! a deployed site.

use anyhow::Result;
use serde_json::{Map, Value as JsonValue, json};

use crate::cli::args::{QueryArgs, QueryTarget};
use crate::config::{NavEntry, SiteConfig};
use crate::core::UrlPath;
use crate::log;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let output = query(&args.target, config)?;

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", formatted);
    Ok(())
}

fn query(target: &QueryTarget, config: &SiteConfig) -> Result<JsonValue> {
    Ok(match target {
        QueryTarget::Nav => JsonValue::Array(
            config
                .nav
                .iter()
                .map(|entry| format_nav(entry, config))
                .collect(),
        ),
        QueryTarget::Sidebar { path } => format_sidebar(&UrlPath::from_browser(path), config),
        QueryTarget::Config => serde_json::to_value(config)?,
    })
}

/// Nav entry with `href` for links and nested `items` for groups.
fn format_nav(entry: &NavEntry, config: &SiteConfig) -> JsonValue {
    let mut obj = Map::new();
    obj.insert("text".to_string(), JsonValue::String(entry.text.clone()));

    match entry.navigable_link() {
        Some(link) => {
            obj.insert("href".to_string(), config.site.href(link).into());
        }
        None => {
            let items = entry
                .children()
                .iter()
                .map(|child| format_nav(child, config))
                .collect();
            obj.insert("items".to_string(), JsonValue::Array(items));
        }
    }

    JsonValue::Object(obj)
}

/// Sidebar selected for `page`, or `null` when no prefix matches.
fn format_sidebar(page: &UrlPath, config: &SiteConfig) -> JsonValue {
    let Some((prefix, sections)) = config.sidebar.resolve(page) else {
        log!("query"; "no sidebar for {}", page);
        return JsonValue::Null;
    };

    let sections: Vec<JsonValue> = sections
        .iter()
        .map(|section| {
            let items: Vec<JsonValue> = section
                .items
                .iter()
                .map(|item| {
                    json!({
                        "text": item.text,
                        "href": config.site.href(&item.link),
                        "active": page.matches_link(&item.link),
                    })
                })
                .collect();
            json!({ "text": section.text, "items": items })
        })
        .collect();

    json!({
        "path": page.as_str(),
        "prefix": prefix,
        "sections": sections,
    })
}
