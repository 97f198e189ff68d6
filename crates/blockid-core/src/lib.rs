//! Core types and errors for the blockID trust-score API.
//!
//! This crate provides the foundational types shared by the client and CLI:
//!
//! - **Types**: The trust report returned by `POST /trust-score`, with
//!   validation and the fixed presentation bands
//! - **Errors**: A single [`TrustError`] covering failed requests, transport
//!   failures and malformed reports
//!
//! # Example
//!
//! ```rust,ignore
//! use blockid_core::{ScoreBand, TrustScoreResult, Result};
//!
//! fn summarize(report: &TrustScoreResult) -> Result<()> {
//!     println!("{}: {} ({})", report.wallet, report.trust_score, ScoreBand::of(report.trust_score));
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/blockid-core/0.1.0")]

mod error;
pub mod types;

pub use error::{Result, TrustError, FALLBACK_DETAIL};
pub use types::*;
