//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Trust API base URL.
    pub api_url: Option<String>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("io", "blockid", "blockid")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolve the config path, preferring an explicit override.
    pub fn path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        if config.timeout_secs == Some(0) {
            anyhow::bail!("{}: timeout_secs must be at least 1", path.display());
        }

        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Apply a `config set` assignment.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_url" | "url" => {
                self.api_url = Some(value.trim().to_string());
            }
            "output_format" | "output" => {
                self.output_format = Some(value.parse()?);
            }
            "timeout_secs" | "timeout" => {
                let secs: u64 = value.parse()?;
                if secs == 0 {
                    anyhow::bail!("timeout_secs must be at least 1");
                }
                self.timeout_secs = Some(secs);
            }
            _ => {
                anyhow::bail!(
                    "Unknown config key: {}\n\n\
                     Available keys:\n  \
                     api_url        - Trust API base URL\n  \
                     output_format  - Default output format (pretty/json/csv/yaml)\n  \
                     timeout_secs   - Request timeout in seconds",
                    key
                );
            }
        }
        Ok(())
    }
}
