//! Main trust-score client implementation.

use crate::api::TrustScoreApi;
use crate::config::{resolve_base_url, trust_score_endpoint};
use blockid_core::{Result, TrustError, TrustScoreRequest, TrustScoreResult, FALLBACK_DETAIL};
use reqwest::{Client as HttpClient, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the blockID trust-score backend
#[derive(Clone)]
pub struct TrustClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: String,
    endpoint: String,
}

impl TrustClient {
    /// Create a client for the base URL found in the environment (or the local default)
    pub fn from_env() -> Result<Self> {
        TrustClientBuilder::new().build()
    }

    /// Create a client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        TrustClientBuilder::new().base_url(base_url).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> TrustClientBuilder {
        TrustClientBuilder::new()
    }

    /// Base URL this client was built with
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Full URL of the scoring endpoint
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Access trust-score endpoints
    #[must_use]
    pub fn scores(&self) -> TrustScoreApi<'_> {
        TrustScoreApi::new(self)
    }

    /// Look up the trust report for a wallet
    pub async fn fetch_trust_score(&self, wallet: &str) -> Result<TrustScoreResult> {
        self.scores().fetch(wallet).await
    }

    /// POST a lookup request and decode the report
    pub(crate) async fn post_trust_score(
        &self,
        request: &TrustScoreRequest,
    ) -> Result<TrustScoreResult> {
        let url = self.endpoint();
        debug!(url = %url, wallet = %request.wallet, "POST request");

        let response = self
            .inner
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| TrustError::Transport(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Turn a response into a report or a `RequestFailed` error
    async fn handle_response(&self, response: reqwest::Response) -> Result<TrustScoreResult> {
        let status = response.status();
        debug!(status = status.as_u16(), "response received");

        if status.is_success() {
            let body = response
                .bytes()
                .await
                .map_err(|e| TrustError::Transport(e.to_string()))?;
            TrustScoreResult::from_slice(&body).map_err(|e| {
                warn!(error = %e, "trust API returned a malformed report");
                e
            })
        } else {
            let body = response.bytes().await.unwrap_or_default();
            let detail = error_detail(status, &body);
            warn!(status = status.as_u16(), detail = %detail, "trust API request failed");
            Err(TrustError::RequestFailed {
                status: status.as_u16(),
                detail,
            })
        }
    }
}

impl std::fmt::Debug for TrustClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustClient")
            .field("endpoint", &self.inner.endpoint)
            .finish_non_exhaustive()
    }
}

/// Pick the failure detail: body `detail` string, then status text, then a fixed fallback.
///
/// A body that is not JSON is treated like one without a `detail` field.
pub(crate) fn error_detail(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
        .or_else(|| {
            status
                .canonical_reason()
                .filter(|reason| !reason.is_empty())
                .map(String::from)
        })
        .unwrap_or_else(|| FALLBACK_DETAIL.to_string())
}

/// Builder for configuring a [`TrustClient`]
#[derive(Debug, Clone)]
pub struct TrustClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for TrustClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrustClientBuilder {
    /// Create a builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
            user_agent: format!("blockid-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL; otherwise it is resolved from the environment
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a request timeout (unset means the transport default)
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<TrustClient> {
        let base_url = self.base_url.unwrap_or_else(resolve_base_url);
        let endpoint = trust_score_endpoint(&base_url)?;

        let mut http = HttpClient::builder().user_agent(&self.user_agent).gzip(true);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http
            .build()
            .map_err(|e| TrustError::Config(format!("failed to build HTTP client: {e}")))?;

        debug!(endpoint = %endpoint, "trust client ready");

        Ok(TrustClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                endpoint,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_from_body() {
        let detail = error_detail(StatusCode::NOT_FOUND, br#"{"detail": "wallet not found"}"#);
        assert_eq!(detail, "wallet not found");
    }

    #[test]
    fn test_detail_falls_back_to_status_text() {
        assert_eq!(error_detail(StatusCode::SERVICE_UNAVAILABLE, b""), "Service Unavailable");
        assert_eq!(error_detail(StatusCode::BAD_GATEWAY, b"<html>oops</html>"), "Bad Gateway");
    }

    #[test]
    fn test_non_string_detail_ignored() {
        let body = br#"{"detail": [{"loc": ["body", "wallet"], "msg": "field required"}]}"#;
        assert_eq!(error_detail(StatusCode::UNPROCESSABLE_ENTITY, body), "Unprocessable Entity");
    }

    #[test]
    fn test_detail_generic_fallback() {
        let status = StatusCode::from_u16(599).unwrap();
        assert_eq!(error_detail(status, b"{}"), "Request failed");
    }

    #[test]
    fn test_builder_normalizes_endpoint() {
        let client = TrustClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000/trust-score");
        assert_eq!(client.base_url(), "http://localhost:8000/");
    }

    #[test]
    fn test_builder_rejects_invalid_url() {
        let err = TrustClient::new("::not-a-url").unwrap_err();
        assert!(matches!(err, TrustError::InvalidUrl(_)));
    }
}
