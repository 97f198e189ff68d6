use serde::{Deserialize, Serialize};

/// Request body for `POST /trust-score`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustScoreRequest {
    /// Wallet address, trimmed of surrounding whitespace
    pub wallet: String,
}

impl TrustScoreRequest {
    /// Build a request for the given wallet address.
    ///
    /// The address is not validated; only surrounding whitespace is removed.
    #[must_use]
    pub fn new(wallet: &str) -> Self {
        Self {
            wallet: wallet.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_surrounding_whitespace() {
        let req = TrustScoreRequest::new("  ABC123  ");
        assert_eq!(req.wallet, "ABC123");
    }

    #[test]
    fn test_inner_whitespace_kept() {
        let req = TrustScoreRequest::new("\tAB C\n");
        assert_eq!(req.wallet, "AB C");
    }

    #[test]
    fn test_wire_shape() {
        let req = TrustScoreRequest::new("  ABC123  ");
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"wallet":"ABC123"}"#);
    }
}
