//! `render` command: page chrome for one path.

use std::fs;

use anyhow::{Context, Result};

use crate::cli::args::RenderArgs;
use crate::config::SiteConfig;
use crate::core::UrlPath;
use crate::theme::{PageContext, render_page, site_theme};
use crate::{debug, log};

/// Render the chrome for `args.path` to a file or stdout.
pub fn render_path(args: &RenderArgs, config: &SiteConfig) -> Result<()> {
    let theme = site_theme(config);
    debug!("render"; "theme {} with {} slots", theme.name(), theme.slots().len());

    let html = render_page(&*theme, &page_context(args, config));

    match &args.output {
        Some(output) => {
            fs::write(output, &html)
                .with_context(|| format!("failed to write {}", output.display()))?;
            log!("render"; "wrote {} to {}", args.path, output.display());
        }
        None => println!("{}", html),
    }
    Ok(())
}

/// Page context for the requested path. The path is taken as typed in a
/// browser, so percent-encoded segments are decoded.
fn page_context<'a>(args: &RenderArgs, config: &'a SiteConfig) -> PageContext<'a> {
    let mut page = PageContext::new(config, UrlPath::from_browser(&args.path));
    if let Some(title) = &args.title {
        page = page.with_title(title.as_str());
    }
    if let Some(stamp) = &args.last_updated {
        page = page.with_last_updated(stamp.as_str());
    }
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_reference_config;
    use tempfile::TempDir;

    fn render_to_string(args: &RenderArgs, config: &SiteConfig) -> String {
        render_page(&*site_theme(config), &page_context(args, config))
    }

    fn args(path: &str) -> RenderArgs {
        RenderArgs {
            path: path.into(),
            output: None,
            title: Some("Testing".into()),
            last_updated: Some("2025-06-01".into()),
        }
    }

    #[test]
    fn test_render_contains_chrome_and_credit() {
        let config = test_reference_config();
        let html = render_to_string(&args("/guide/testing"), &config);
        assert!(html.to_ascii_lowercase().starts_with("<!doctype html>"));
        assert!(html.contains("lang=\"en-US\""));
        assert!(html.contains("Testing | UE Platformer in C++"));
        assert!(html.contains("datetime=\"2025-06-01\""));
        assert_eq!(html.matches("class=\"footer-avatar\"").count(), 1);
        assert!(html.contains("href=\"/how-to-make-a-game-cpp-ue/favicon.svg\""));
        assert!(!html.contains("/how-to-make-a-game-cpp-ue/how-to-make-a-game-cpp-ue/"));
    }

    #[test]
    fn test_render_decodes_browser_path() {
        let config = test_reference_config();
        let encoded = render_to_string(&args("/guide/milestone%2D1-detailed?tab=1"), &config);
        let plain = render_to_string(&args("/guide/milestone-1-detailed"), &config);
        assert_eq!(encoded, plain);
        assert!(encoded.contains("sidebar-link active"));
        assert!(encoded.contains("docs/guide/milestone-1-detailed.md"));
    }

    #[test]
    fn test_render_writes_file() {
        let config = test_reference_config();
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("testing.html");
        let mut args = args("/guide/testing");
        args.output = Some(output.clone());

        render_path(&args, &config).unwrap();
        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written, render_to_string(&args, &config));
    }
}
