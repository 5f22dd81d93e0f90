//! `check` command: load, validate and summarise the configuration.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::log;
use crate::theme::site_theme;
use crate::utils::plural_count;

/// Print a one-screen summary of a configuration that passed validation.
pub fn check_config(config: &SiteConfig) -> Result<()> {
    for line in summary(config) {
        log!("check"; "{}", line);
    }
    log!("check"; "{} is valid", config.config_path.display());
    Ok(())
}

fn summary(config: &SiteConfig) -> Vec<String> {
    let site = &config.site;
    let nav_links: usize = config.nav.iter().map(|entry| entry.links().len()).sum();
    let sidebar_links: usize = config
        .sidebar
        .iter()
        .flat_map(|(_, sections)| sections)
        .map(|section| section.items.len())
        .sum();

    vec![
        format!("site `{}` at base `{}`", site.title, site.base),
        format!(
            "{}, {}",
            plural_count(config.nav.len(), "nav item"),
            plural_count(nav_links, "nav link")
        ),
        format!(
            "{} ({}), {}",
            plural_count(config.sidebar.len(), "sidebar"),
            config.sidebar.keys().collect::<Vec<_>>().join(", "),
            plural_count(sidebar_links, "sidebar link")
        ),
        plural_count(site.head.len(), "head tag"),
        format!("search: {}", config.search.provider.as_str()),
        format!("theme: {}", site_theme(config).name()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_reference_config;

    #[test]
    fn test_summary_of_reference_config() {
        let config = test_reference_config();
        let lines = summary(&config);
        assert_eq!(lines[0], "site `UE Platformer in C++` at base `/how-to-make-a-game-cpp-ue/`");
        assert_eq!(lines[1], "5 nav items, 31 nav links");
        assert_eq!(
            lines[2],
            "4 sidebars (/appendix/, /guide/, /reference/, /templates/), 32 sidebar links"
        );
        assert_eq!(lines[3], "6 head tags");
        assert_eq!(lines[4], "search: local");
        assert_eq!(lines[5], "theme: default+credit");
    }
}
