//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config_path = Config::path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;

    // Flag/env first, then config file, then the local default
    let api_url =
        blockid::resolve_base_url_from(cli.api_url.or_else(|| config.api_url.clone()));

    let ctx = commands::Context {
        api_url,
        config_path,
        output_format: cli.output.or(config.output_format).unwrap_or_default(),
        timeout_secs: config.timeout_secs,
    };

    match cli.command {
        Commands::Score(args) => commands::score::execute(ctx, args).await,
        Commands::Config(args) => commands::config::execute(ctx, args),
    }
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "blockid=debug,blockid_client=debug,blockid_cli=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}
