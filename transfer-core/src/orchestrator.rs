//! Single-attempt transfer pipeline
//!
//! Gate → convert → evaluate → commit-on-approval. Every call is one
//! deterministic evaluation over the supplied account snapshot and time;
//! there are no retries and rejected attempts leave the account untouched.

use crate::types::{Account, LedgerEntry, TransferOutcome};
use chrono::{DateTime, Utc};
use compliance_engine::{ComplianceConfig, Decision, RuleEngine, TransferRequest};
use fx_converter::RateTable;
use tracing::info;
use uuid::Uuid;

/// Runs one transfer attempt end to end.
pub struct Orchestrator {
    rates: RateTable,
    rules: RuleEngine,
}

impl Orchestrator {
    /// Create new orchestrator
    pub fn new(rates: RateTable, compliance: ComplianceConfig) -> Self {
        Self {
            rates,
            rules: RuleEngine::new(compliance),
        }
    }

    /// Attempt one transfer for `account` at `now`.
    ///
    /// The identity gate precedes the compliance gate: below-Verified
    /// accounts short-circuit before conversion or evaluation. On approval
    /// the velocity state advances and a ledger entry is appended; every
    /// other outcome mutates nothing.
    pub fn attempt_transfer(
        &self,
        account: &mut Account,
        request: &TransferRequest,
        now: DateTime<Utc>,
    ) -> TransferOutcome {
        if !account.status.may_transact() {
            return TransferOutcome::VerificationRequired {
                prompt: account.status.prompt().to_string(),
            };
        }

        let Some(conversion) = self.rates.convert(
            request.source_currency,
            request.target_currency,
            &request.amount,
        ) else {
            return TransferOutcome::ConversionUnavailable;
        };

        let decision = self
            .rules
            .evaluate(request, &conversion, &account.velocity, now);

        if let Decision::Approved {
            converted_amount,
            currency,
        } = &decision
        {
            account.velocity = account.velocity.record_transaction(now);

            let entry = LedgerEntry {
                entry_id: Uuid::now_v7(),
                requested_amount: conversion.requested_amount,
                converted_amount: *converted_amount,
                source_currency: request.source_currency,
                target_currency: *currency,
                committed_at: now,
            };
            info!(account = %account.id, entry = %entry.entry_id, "transfer committed");
            account.ledger.append(entry);
        }

        TransferOutcome::Decided(decision)
    }
}
