//! Compliance Rule Engine for RemitRail
//!
//! Ordered, short-circuiting rule chain over a single transfer attempt.
//! Compliance rules preempt fraud heuristics and business limits, so a
//! restricted-currency transfer is never reported as a funds problem.

pub mod rules;
pub mod types;

pub use rules::{
    ComplianceConfig, RuleEngine, MSG_COMPLIANCE_BLOCKED, MSG_HIGH_RISK_LIMIT,
    MSG_INSUFFICIENT_FUNDS, MSG_RESTRICTED_CURRENCY, MSG_SUSPICIOUS_ACTIVITY,
};
pub use types::{Decision, TransferRequest};
