use thiserror::Error;

/// Result type alias for trust-score operations
pub type Result<T> = std::result::Result<T, TrustError>;

/// Detail used when neither the response body nor the status line carries one
pub const FALLBACK_DETAIL: &str = "Request failed";

/// Errors that can occur when talking to the trust-score backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrustError {
    /// The backend answered with a non-2xx status
    #[error("trust API request failed ({status}): {detail}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Human-readable detail from the body or status line
        detail: String,
    },

    /// No response was received (connect, DNS, timeout)
    #[error("could not reach trust API: {0}")]
    Transport(String),

    /// A 2xx response whose body does not match the trust report schema
    #[error("malformed trust report: {0}")]
    MalformedResponse(String),

    /// Invalid base URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl TrustError {
    /// Build a `RequestFailed` error
    pub fn request_failed(status: u16, detail: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            detail: detail.into(),
        }
    }

    /// Returns the HTTP status code if a response was received
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the backend-provided detail for a failed request
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::RequestFailed { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Returns true when the backend reported 503 (typically not running)
    #[must_use]
    pub const fn is_service_unavailable(&self) -> bool {
        matches!(self, Self::RequestFailed { status: 503, .. })
    }

    /// Returns true if the error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::RequestFailed { status: 429 | 503, .. }
        )
    }
}

impl From<serde_json::Error> for TrustError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_only_for_request_failed() {
        assert_eq!(TrustError::request_failed(404, "wallet not found").status_code(), Some(404));
        assert_eq!(TrustError::Transport("refused".into()).status_code(), None);
        assert_eq!(TrustError::MalformedResponse("bad".into()).status_code(), None);
    }

    #[test]
    fn test_service_unavailable() {
        assert!(TrustError::request_failed(503, FALLBACK_DETAIL).is_service_unavailable());
        assert!(!TrustError::request_failed(500, FALLBACK_DETAIL).is_service_unavailable());
        assert!(!TrustError::Transport("refused".into()).is_service_unavailable());
    }

    #[test]
    fn test_retryable() {
        assert!(TrustError::Transport("timed out".into()).is_retryable());
        assert!(TrustError::request_failed(429, "slow down").is_retryable());
        assert!(!TrustError::request_failed(400, "bad wallet").is_retryable());
        assert!(!TrustError::MalformedResponse("x".into()).is_retryable());
    }

    #[test]
    fn test_display_carries_detail() {
        let err = TrustError::request_failed(404, "wallet not found");
        assert_eq!(err.to_string(), "trust API request failed (404): wallet not found");
        assert_eq!(err.detail(), Some("wallet not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(TrustError::from(json_err), TrustError::MalformedResponse(_)));
    }
}
