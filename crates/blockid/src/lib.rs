//! Rust client for the blockID wallet trust-score API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use blockid::{ScoreBand, TrustClient};
//!
//! #[tokio::main]
//! async fn main() -> blockid::Result<()> {
//!     // Uses BLOCKID_TRUST_API_URL, or http://localhost:8000 when unset
//!     let client = TrustClient::from_env()?;
//!
//!     let report = client.fetch_trust_score("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU").await?;
//!     println!("Score: {} ({})", report.trust_score, ScoreBand::of(report.trust_score));
//!     println!("Risk: {}", report.risk_level);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/blockid/0.1.0")]

// Re-export core types
pub use blockid_core::*;

// Re-export client
pub use blockid_client::{
    resolve_base_url, resolve_base_url_from, TrustClient, TrustClientBuilder, DEFAULT_BASE_URL,
    TRUST_API_URL_ENV,
};

// Re-export runtime for convenience
pub use tokio;
pub use serde;
pub use serde_json;
