//! Trust report returned by the scoring backend.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrustError};

/// Upper bound of the 0-100 scales used by the backend
pub const SCORE_MAX: f64 = 100.0;

/// Coarse risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Low risk
    Low,
    /// Medium risk
    Medium,
    /// High risk
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Activity band reported by newer backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little on-chain activity
    Low,
    /// Moderate on-chain activity
    Medium,
    /// Heavy on-chain activity
    High,
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Which generation of the metrics payload the backend sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    /// No `activity_level` / `suspicious_behavior_count`
    Legacy,
    /// At least one of the newer fields is present
    Extended,
}

/// Per-wallet metrics backing the trust score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustMetrics {
    /// Recent on-chain transaction count
    pub tx_count: u64,

    /// Wallet age in months, from the oldest transaction
    pub wallet_age_months: u64,

    /// Activity score (0-100) derived from transaction volume; re-serialises as a float
    pub activity_score: f64,

    /// Activity band; `None` means unknown, not low
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,

    /// Number of suspicious behaviours; `None` means unknown, not zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspicious_behavior_count: Option<u64>,

    /// Identifiers of detected risk signals
    pub risk_flags: Vec<String>,
}

impl TrustMetrics {
    /// Payload generation, based on which optional fields are present
    #[must_use]
    pub const fn schema_version(&self) -> SchemaVersion {
        if self.activity_level.is_some() || self.suspicious_behavior_count.is_some() {
            SchemaVersion::Extended
        } else {
            SchemaVersion::Legacy
        }
    }

    /// Returns true if any risk flag was raised
    #[must_use]
    pub fn has_risk_flags(&self) -> bool {
        !self.risk_flags.is_empty()
    }

    /// Risk flags formatted for display (`mixer_interaction` -> `mixer interaction`)
    pub fn risk_flag_labels(&self) -> impl Iterator<Item = String> + '_ {
        self.risk_flags.iter().map(|flag| flag.replace('_', " "))
    }

    /// Activity score with one decimal place
    #[must_use]
    pub fn activity_score_display(&self) -> String {
        format!("{:.1}", self.activity_score)
    }

    /// Wallet age as shown to users
    #[must_use]
    pub fn wallet_age_display(&self) -> String {
        format!("{} months", self.wallet_age_months)
    }

    fn validate(&self) -> Result<()> {
        check_scale("metrics.activity_score", self.activity_score)
    }
}

/// Trust report for one wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustScoreResult {
    /// The queried wallet, echoed by the backend
    pub wallet: String,

    /// Trust score (0-100).
    ///
    /// Held as `f64`, so an integer on the wire (`42`) re-serialises as `42.0`.
    pub trust_score: f64,

    /// Risk classification
    pub risk_level: RiskLevel,

    /// Detailed metrics
    pub metrics: TrustMetrics,
}

impl TrustScoreResult {
    /// Decode and validate a report from a 2xx response body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let report: Self = serde_json::from_slice(body)?;
        report.validate()?;
        Ok(report)
    }

    /// Check the numeric ranges serde cannot express.
    pub fn validate(&self) -> Result<()> {
        check_scale("trust_score", self.trust_score)?;
        self.metrics.validate()
    }
}

fn check_scale(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=SCORE_MAX).contains(&value) {
        Ok(())
    } else {
        Err(TrustError::MalformedResponse(format!(
            "{field} out of range 0-100: {value}"
        )))
    }
}
