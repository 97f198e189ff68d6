//! # blockid-cli
//!
//! Command-line interface for the blockID wallet trust-score backend.
//!
//! ## Features
//!
//! - **Trust lookup**: `blockid score <WALLET>` fetches and renders a trust report
//! - **Configuration**: persistent API URL, output format and timeout
//! - **Multiple output formats**: Pretty tables, JSON, CSV, YAML

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
