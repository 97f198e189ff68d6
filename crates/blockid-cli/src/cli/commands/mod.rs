//! Command implementations.

pub mod config;
pub mod score;

use std::path::PathBuf;
use std::time::Duration;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved trust API base URL
    pub api_url: String,

    /// Config file in use
    pub config_path: PathBuf,

    /// Output format
    pub output_format: OutputFormat,

    /// Request timeout from the config file
    pub timeout_secs: Option<u64>,
}

impl Context {
    /// Create a trust client for the resolved base URL.
    pub fn client(&self, timeout_secs: Option<u64>) -> anyhow::Result<blockid::TrustClient> {
        let mut builder = blockid::TrustClient::builder().base_url(&self.api_url);
        if let Some(secs) = timeout_secs.or(self.timeout_secs) {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(builder.build()?)
    }
}
