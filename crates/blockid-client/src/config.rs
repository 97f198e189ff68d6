//! Client configuration: base URL resolution.

use blockid_core::{Result, TrustError};
use url::Url;

/// Environment variable holding the trust API base URL
pub const TRUST_API_URL_ENV: &str = "BLOCKID_TRUST_API_URL";

/// Local development backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path of the scoring endpoint, relative to the base URL
pub const TRUST_SCORE_PATH: &str = "/trust-score";

/// Resolve the base URL from the environment, falling back to the local default.
#[must_use]
pub fn resolve_base_url() -> String {
    resolve_base_url_from(std::env::var(TRUST_API_URL_ENV).ok())
}

/// Resolve the base URL from an optional configured value.
#[must_use]
pub fn resolve_base_url_from(configured: Option<String>) -> String {
    configured.unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Drop a single trailing slash so paths can be appended verbatim.
#[must_use]
pub fn normalize_base_url(base: &str) -> &str {
    base.strip_suffix('/').unwrap_or(base)
}

/// Full URL of the scoring endpoint for a base URL.
pub fn trust_score_endpoint(base: &str) -> Result<String> {
    let base = normalize_base_url(base);
    Url::parse(base).map_err(|e| TrustError::InvalidUrl(format!("{base}: {e}")))?;
    Ok(format!("{base}{TRUST_SCORE_PATH}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset() {
        assert_eq!(resolve_base_url_from(None), "http://localhost:8000");
    }

    #[test]
    fn test_configured_value_wins() {
        let base = resolve_base_url_from(Some("https://trust.blockid.io".into()));
        assert_eq!(base, "https://trust.blockid.io");
    }

    #[test]
    fn test_normalize_strips_one_slash() {
        assert_eq!(normalize_base_url("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(normalize_base_url("http://localhost:8000"), "http://localhost:8000");
        assert_eq!(normalize_base_url("http://host/api//"), "http://host/api/");
    }

    #[test]
    fn test_endpoint_single_slash() {
        assert_eq!(
            trust_score_endpoint("http://localhost:8000/").unwrap(),
            "http://localhost:8000/trust-score"
        );
        assert_eq!(
            trust_score_endpoint("https://api.blockid.io/v1").unwrap(),
            "https://api.blockid.io/v1/trust-score"
        );
    }

    #[test]
    fn test_endpoint_rejects_garbage() {
        let err = trust_score_endpoint("not a url").unwrap_err();
        assert!(matches!(err, TrustError::InvalidUrl(_)));
    }
}
