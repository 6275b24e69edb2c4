use fx_converter::Currency;
use risk_engine::CountryRiskTier;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One cross-border transfer attempt as entered by the sender.
///
/// The amount is kept exactly as entered and is not validated until the
/// engine runs; parsing it is the conversion step's job. Immutable once
/// submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub source_currency: Currency,
    pub target_currency: Currency,

    /// Amount as entered by the sender
    pub amount: String,

    /// Risk classification of the recipient country
    pub recipient_risk_tier: CountryRiskTier,
}

/// Outcome of one compliance evaluation.
///
/// Exactly one variant per attempt. All reason strings are user-facing and
/// stable; consumers display them without further interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    /// Cleared every rule; the caller commits the transfer.
    Approved {
        converted_amount: Decimal,
        currency: Currency,
    },

    /// Rejected by compliance policy (restricted target currency).
    BlockedCompliance { reason: String },

    /// Rejected by the high-risk country ceiling.
    ///
    /// The risk warning and the compliance message are distinct observable
    /// fields, rendered and tested independently.
    BlockedRisk {
        risk_warning: String,
        compliance_message: String,
    },

    /// Rejected by the velocity check.
    BlockedSuspicious { reason: String },

    /// Rejected by the funds ceiling.
    BlockedInsufficientFunds { reason: String },
}

impl Decision {
    pub fn is_approved(&self) -> bool {
        matches!(self, Decision::Approved { .. })
    }
}
