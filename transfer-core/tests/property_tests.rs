//! Property-based tests for transfer commit invariants
//!
//! - Ledger length == number of approved outcomes == velocity counter
//! - Rejected attempts never mutate account state

use chrono::{DateTime, TimeZone, Utc};
use compliance_engine::{ComplianceConfig, TransferRequest};
use fx_converter::{Currency, RateTable};
use kyc_service::VerificationStatus;
use proptest::prelude::*;
use risk_engine::CountryRiskTier;
use transfer_core::{Account, AccountId, Orchestrator};

fn at(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).unwrap()
}

/// Strategy for raw amounts: numeric, over-limit, and unparseable
fn amount_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u32..2_000).prop_map(|n| n.to_string()),
        (10_001u32..100_000).prop_map(|n| n.to_string()),
        Just(String::new()),
        Just("not-a-number".to_string()),
    ]
}

fn tier_strategy() -> impl Strategy<Value = CountryRiskTier> {
    prop_oneof![
        Just(CountryRiskTier::Unknown),
        Just(CountryRiskTier::Low),
        Just(CountryRiskTier::High),
    ]
}

fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::AED),
        Just(Currency::INR),
    ]
}

fn request_strategy() -> impl Strategy<Value = (TransferRequest, i64)> {
    (amount_strategy(), tier_strategy(), currency_strategy(), 0i64..30_000).prop_map(
        |(amount, tier, target, gap)| {
            (
                TransferRequest {
                    source_currency: Currency::USD,
                    target_currency: target,
                    amount,
                    recipient_risk_tier: tier,
                },
                gap,
            )
        },
    )
}

proptest! {
    #[test]
    fn commits_equal_approvals(attempts in prop::collection::vec(request_strategy(), 0..50)) {
        let orchestrator = Orchestrator::new(RateTable::default(), ComplianceConfig::default());
        let mut account = Account::new(AccountId::new("ACC001"));
        account.status = VerificationStatus::Verified;

        let mut clock = 0i64;
        let mut approvals = 0u32;

        for (request, gap) in attempts {
            clock += gap;
            let ledger_before = account.ledger.len();
            let velocity_before = account.velocity.clone();

            let outcome = orchestrator.attempt_transfer(&mut account, &request, at(clock));

            if outcome.is_approved() {
                approvals += 1;
                prop_assert_eq!(account.ledger.len(), ledger_before + 1);
                prop_assert_eq!(
                    account.velocity.transaction_count,
                    velocity_before.transaction_count + 1
                );
                prop_assert_eq!(account.velocity.last_transaction_at, Some(at(clock)));
            } else {
                prop_assert_eq!(account.ledger.len(), ledger_before);
                prop_assert_eq!(&account.velocity, &velocity_before);
            }
        }

        prop_assert_eq!(account.velocity.transaction_count, approvals);
        prop_assert_eq!(account.ledger.len() as u32, approvals);
    }

    #[test]
    fn unverified_accounts_never_commit(
        attempts in prop::collection::vec(request_strategy(), 0..20),
        status in prop_oneof![
            Just(VerificationStatus::Unregistered),
            Just(VerificationStatus::Registered),
            Just(VerificationStatus::DocumentsSubmitted),
        ],
    ) {
        let orchestrator = Orchestrator::new(RateTable::default(), ComplianceConfig::default());
        let mut account = Account::new(AccountId::new("ACC001"));
        account.status = status;

        let mut clock = 0i64;
        for (request, gap) in attempts {
            clock += gap;
            let outcome = orchestrator.attempt_transfer(&mut account, &request, at(clock));
            prop_assert!(
                matches!(
                    outcome,
                    transfer_core::TransferOutcome::VerificationRequired { .. }
                ),
                "expected VerificationRequired, got {:?}",
                outcome
            );
        }

        prop_assert_eq!(account.velocity.transaction_count, 0);
        prop_assert!(account.ledger.is_empty());
    }
}
