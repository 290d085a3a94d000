//! Chronica - a static blog archive and feed generator.

#![allow(dead_code)]

mod archive;
mod cli;
mod config;
mod core;
mod generator;
mod logger;
mod post;
mod store;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    // One cooperative single-threaded runtime per invocation; suspension
    // points are store reads and generator writes only.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match &cli.command {
        Commands::Build { .. } => runtime.block_on(cli::build::build_site(&config)),
        Commands::Query { args } => runtime.block_on(cli::query::run_query(args, &config)),
    }
}
