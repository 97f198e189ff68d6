//! blockid - wallet trust-score lookup
//!
//! A command-line front end for the blockID trust-score backend.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    blockid_cli::run().await
}
