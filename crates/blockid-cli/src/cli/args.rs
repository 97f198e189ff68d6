//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Wallet trust-score lookup for blockID
///
/// Sends a wallet address to the trust-score backend and shows the
/// score, risk level and metrics it reports.
#[derive(Parser, Debug)]
#[command(name = "blockid")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Trust API base URL (default http://localhost:8000)
    #[arg(short = 'u', long, env = "BLOCKID_TRUST_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Config file to use instead of the platform default
    #[arg(long, env = "BLOCKID_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up the trust score of a wallet
    Score(ScoreArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Score command
// ============================================================================

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Wallet address to look up
    pub wallet: String,

    /// Request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (api_url, output_format, timeout_secs)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show configuration file path
    Path,
}
