//! Trust-score API endpoints.

use crate::TrustClient;
use blockid_core::{Result, TrustScoreRequest, TrustScoreResult};

/// Trust-score API endpoints
pub struct TrustScoreApi<'a> {
    client: &'a TrustClient,
}

impl<'a> TrustScoreApi<'a> {
    pub(crate) const fn new(client: &'a TrustClient) -> Self {
        Self { client }
    }

    /// Fetch the trust report for a wallet.
    ///
    /// Surrounding whitespace is trimmed; callers must not pass an empty address.
    pub async fn fetch(&self, wallet: &str) -> Result<TrustScoreResult> {
        self.client.post_trust_score(&TrustScoreRequest::new(wallet)).await
    }
}
