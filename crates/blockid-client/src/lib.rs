//! HTTP client for the blockID trust-score API.
//!
//! This crate provides [`TrustClient`], which sends a wallet address to
//! `POST <base>/trust-score` and returns the decoded, validated trust report.

#![doc(html_root_url = "https://docs.rs/blockid-client/0.1.0")]

mod client;
mod config;
pub mod api;

pub use blockid_core::{Result, TrustError};
pub use client::{TrustClient, TrustClientBuilder};
pub use config::*;
