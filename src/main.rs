//! Signpost - configuration and page chrome for a documentation site.

mod cli;
mod config;
mod core;
mod logger;
mod theme;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, cfg, init_config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    init_config(SiteConfig::load(&cli.config)?);
    let config = cfg();

    match &cli.command {
        Commands::Check => cli::check::check_config(&config),
        Commands::Query { args } => cli::query::run_query(args, &config),
        Commands::Render { args } => cli::render::render_path(args, &config),
    }
}
