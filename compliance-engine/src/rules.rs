use crate::types::{Decision, TransferRequest};
use chrono::{DateTime, Utc};
use fx_converter::{Conversion, Currency};
use risk_engine::{VelocityConfig, VelocityState};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{info, warn};

/// Rejection text for restricted target currencies.
pub const MSG_RESTRICTED_CURRENCY: &str =
    "Transactions involving restricted currencies are not allowed";

/// Risk warning for the high-risk country ceiling.
pub const MSG_HIGH_RISK_LIMIT: &str = "Transaction exceeds allowed limit for high-risk countries";

/// Compliance message accompanying the high-risk country ceiling.
pub const MSG_COMPLIANCE_BLOCKED: &str = "Transaction blocked due to compliance policy";

/// Rejection text for the velocity check.
pub const MSG_SUSPICIOUS_ACTIVITY: &str =
    "Suspicious activity detected. Please verify your identity.";

/// Rejection text for the funds ceiling.
pub const MSG_INSUFFICIENT_FUNDS: &str = "Insufficient funds";

/// Rule thresholds and restricted-currency data.
///
/// Supplied as data so the lists and ceilings can be swapped without
/// touching rule order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceConfig {
    /// Currencies for which transfers are categorically disallowed
    pub restricted_currencies: HashSet<Currency>,

    /// Per-transaction ceiling for high-risk recipient countries
    pub high_risk_country_limit: Decimal,

    /// Per-transaction funds ceiling
    pub funds_limit: Decimal,

    /// Velocity thresholds
    pub velocity: VelocityConfig,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            restricted_currencies: HashSet::new(),
            high_risk_country_limit: Decimal::from(10_000),
            funds_limit: Decimal::from(1_000),
            velocity: VelocityConfig::default(),
        }
    }
}

/// Ordered compliance rule chain.
///
/// Rules run in a fixed order and the first match wins:
/// 1. restricted target currency
/// 2. high-risk country ceiling
/// 3. velocity / rapid-fire pattern
/// 4. funds ceiling
///
/// Ceiling comparisons (rules 2 and 4) use the requested, pre-conversion
/// amount: limits are denominated in the sending account's reference unit.
pub struct RuleEngine {
    config: ComplianceConfig,
}

impl RuleEngine {
    pub fn new(config: ComplianceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComplianceConfig {
        &self.config
    }

    /// Evaluate one transfer attempt against the rule chain.
    ///
    /// Pure over the supplied request, conversion, velocity snapshot and
    /// time; the caller owns all state mutation.
    pub fn evaluate(
        &self,
        request: &TransferRequest,
        conversion: &Conversion,
        velocity: &VelocityState,
        now: DateTime<Utc>,
    ) -> Decision {
        let requested = conversion.requested_amount;

        if self
            .config
            .restricted_currencies
            .contains(&request.target_currency)
        {
            warn!(currency = %request.target_currency, "transfer blocked: restricted currency");
            return Decision::BlockedCompliance {
                reason: MSG_RESTRICTED_CURRENCY.to_string(),
            };
        }

        if request.recipient_risk_tier.is_high() && requested > self.config.high_risk_country_limit
        {
            warn!(%requested, "transfer blocked: high-risk country ceiling");
            return Decision::BlockedRisk {
                risk_warning: MSG_HIGH_RISK_LIMIT.to_string(),
                compliance_message: MSG_COMPLIANCE_BLOCKED.to_string(),
            };
        }

        if velocity.is_suspicious(&self.config.velocity, now) {
            warn!(
                count = velocity.transaction_count,
                "transfer blocked: rapid transaction pattern"
            );
            return Decision::BlockedSuspicious {
                reason: MSG_SUSPICIOUS_ACTIVITY.to_string(),
            };
        }

        if requested > self.config.funds_limit {
            warn!(%requested, "transfer blocked: funds ceiling");
            return Decision::BlockedInsufficientFunds {
                reason: MSG_INSUFFICIENT_FUNDS.to_string(),
            };
        }

        info!(
            amount = %conversion.converted_amount,
            currency = %conversion.target_currency,
            "transfer approved"
        );
        Decision::Approved {
            converted_amount: conversion.converted_amount,
            currency: conversion.target_currency,
        }
    }
}
