//! Fixed presentation tables for trust reports.

use super::trust::RiskLevel;

/// Label band for a trust score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreBand {
    /// Below 40
    Poor,
    /// 40 to below 60
    Fair,
    /// 60 to below 80
    Good,
    /// 80 and above
    Excellent,
}

impl ScoreBand {
    /// Classify a score
    #[must_use]
    pub fn of(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    /// Only the top band gets success styling
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Excellent)
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Colour of the score ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreColor {
    /// 80 and above
    Green,
    /// 50 to below 80
    Amber,
    /// Below 50
    Red,
}

impl ScoreColor {
    /// Pick the ring colour for a score
    #[must_use]
    pub fn of(score: f64) -> Self {
        if score >= 80.0 {
            Self::Green
        } else if score >= 50.0 {
            Self::Amber
        } else {
            Self::Red
        }
    }
}

/// Styling applied to a risk level badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskStyle {
    /// Positive styling
    Success,
    /// Cautionary styling
    Warning,
    /// Alarming styling
    Destructive,
}

impl RiskLevel {
    /// Badge style for this level
    #[must_use]
    pub const fn style(self) -> RiskStyle {
        match self {
            Self::Low => RiskStyle::Success,
            Self::Medium => RiskStyle::Warning,
            Self::High => RiskStyle::Destructive,
        }
    }
}
