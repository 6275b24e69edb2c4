//! Core types for the transfer engine
//!
//! All types are designed for:
//! - Exact arithmetic (Decimal for money)
//! - Explicit state (no hidden clocks or globals)
//! - Append-only history (ledger entries are immutable)

use chrono::{DateTime, Utc};
use compliance_engine::Decision;
use fx_converter::Currency;
use kyc_service::VerificationStatus;
use risk_engine::VelocityState;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Account identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Create new account ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One committed transfer.
///
/// Immutable once appended to the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique entry ID (UUIDv7 for time-ordering)
    pub entry_id: Uuid,

    /// Amount as requested, in the source currency
    pub requested_amount: Decimal,

    /// Amount after conversion, in the target currency
    pub converted_amount: Decimal,

    /// Source currency
    pub source_currency: Currency,

    /// Target currency
    pub target_currency: Currency,

    /// Commit timestamp
    pub committed_at: DateTime<Utc>,
}

/// Append-only record of an account's committed transfers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    /// Empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a committed transfer. Entries are never modified or removed.
    pub(crate) fn append(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }

    /// Committed transfers, oldest first
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Number of committed transfers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has committed yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One sender account.
///
/// Owns its verification status, velocity state, and ledger. Mutated only by
/// verification transitions and approved commits; never destroyed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account ID
    pub id: AccountId,

    /// Verification lifecycle stage
    pub status: VerificationStatus,

    /// Email recorded at registration
    pub email: Option<String>,

    /// Rolling velocity state
    pub velocity: VelocityState,

    /// Committed transfer history
    pub ledger: Ledger,
}

impl Account {
    /// Fresh account with no history, not yet registered
    pub fn new(id: AccountId) -> Self {
        Self {
            id,
            status: VerificationStatus::Unregistered,
            email: None,
            velocity: VelocityState::new(),
            ledger: Ledger::new(),
        }
    }
}

/// Result of one transfer attempt.
///
/// The verification gate and a missing conversion are outer outcomes: the
/// rule chain never ran, so they are not compliance decisions. Callers must
/// distinguish "not yet attempted" from "rejected".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransferOutcome {
    /// The account has not completed verification. Carries the prompt for
    /// its current stage.
    VerificationRequired {
        /// User-facing prompt for the account's verification stage
        prompt: String,
    },

    /// The amount could not be parsed; no conversion was performed and the
    /// attempt never reached the rule chain.
    ConversionUnavailable,

    /// The rule chain ran and produced a decision.
    Decided(Decision),
}

impl TransferOutcome {
    /// True when the attempt was approved and committed
    pub fn is_approved(&self) -> bool {
        matches!(self, TransferOutcome::Decided(decision) if decision.is_approved())
    }
}
