//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Signpost documentation site chrome CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: signpost.toml)
    #[arg(short = 'C', long, global = true, default_value = "signpost.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load and validate the site configuration
    #[command(visible_alias = "c")]
    Check,

    /// Print resolved configuration as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// Render the page chrome for a path
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },
}

/// What `query` prints.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum QueryTarget {
    /// Top navigation entries with resolved hrefs
    Nav,
    /// Sidebar selected for a page path
    Sidebar {
        /// Page path relative to the base (e.g. /guide/testing)
        path: String,
    },
    /// The whole parsed configuration
    Config,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    #[command(subcommand)]
    pub target: QueryTarget,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Page path relative to the base (e.g. /guide/testing)
    pub path: String,

    /// Write HTML to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Page title, shown as "Title | Site"
    #[arg(short, long)]
    pub title: Option<String>,

    /// "Last updated" stamp (shown when `site.last_updated` is enabled)
    #[arg(short = 'u', long)]
    pub last_updated: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["signpost", "check"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("signpost.toml"));
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn test_query_sidebar() {
        let cli =
            Cli::try_parse_from(["signpost", "-C", "docs/site.toml", "query", "sidebar", "/guide/", "--pretty"])
                .unwrap();
        assert_eq!(cli.config, PathBuf::from("docs/site.toml"));
        let Commands::Query { args } = cli.command else {
            panic!("expected query");
        };
        assert!(args.pretty);
        assert_eq!(
            args.target,
            QueryTarget::Sidebar {
                path: "/guide/".into()
            }
        );
    }

    #[test]
    fn test_render_args() {
        let cli = Cli::try_parse_from([
            "signpost", "render", "/guide/testing", "-o", "out.html", "--title", "Testing", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Commands::Render { args } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.path, "/guide/testing");
        assert_eq!(args.output, Some(PathBuf::from("out.html")));
        assert_eq!(args.title.as_deref(), Some("Testing"));
        assert_eq!(args.last_updated, None);
    }
}
