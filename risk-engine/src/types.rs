//! Core types for risk screening

use serde::{Deserialize, Serialize};

/// Coarse risk classification of a recipient country.
///
/// High-tier recipients are subject to a stricter transaction ceiling in the
/// compliance rule chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CountryRiskTier {
    /// No classification available
    #[default]
    Unknown,
    /// Low risk
    Low,
    /// High risk
    High,
}

impl CountryRiskTier {
    /// Check if high risk
    pub fn is_high(&self) -> bool {
        matches!(self, CountryRiskTier::High)
    }
}
