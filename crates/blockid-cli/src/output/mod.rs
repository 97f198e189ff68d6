//! Output formatting for different formats.

use blockid_core::{RiskStyle, ScoreColor};
use clap::ValueEnum;
use colored::Color;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed report with colors
    #[default]
    Pretty,
    /// JSON output (the backend's report as-is)
    Json,
    /// CSV output, one row per wallet
    Csv,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "table" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Terminal color for the score ring band.
#[must_use]
pub const fn score_color(color: ScoreColor) -> Color {
    match color {
        ScoreColor::Green => Color::Green,
        ScoreColor::Amber => Color::Yellow,
        ScoreColor::Red => Color::Red,
    }
}

/// Terminal color for a risk badge.
#[must_use]
pub const fn risk_color(style: RiskStyle) -> Color {
    match style {
        RiskStyle::Success => Color::Green,
        RiskStyle::Warning => Color::Yellow,
        RiskStyle::Destructive => Color::Red,
    }
}

/// Quote a CSV field when it contains a separator, quote or newline.
#[must_use]
pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', ';']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
