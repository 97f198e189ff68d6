//! API endpoint modules.

mod trust_score;

pub use trust_score::TrustScoreApi;
