//! RemitRail Transfer Core
//!
//! Screens cross-border transfer attempts and commits approved ones to an
//! append-only per-account ledger.
//!
//! # Architecture
//!
//! - **Verification gate**: only verified accounts reach the rule chain
//! - **Conversion**: directional rate table with identity fallback
//! - **Rule chain**: fixed-order compliance, risk, and velocity checks
//! - **Commit on approval only**: velocity counters and the ledger advance
//!   exclusively for approved transfers
//! - **Single writer per account**: each account is owned by one actor task,
//!   so same-account attempts are linearizable while accounts stay
//!   independent of each other
//!
//! # Invariants
//!
//! - The velocity counter only increases, and only on approval
//! - Ledger entries are never modified or deleted
//! - Deterministic: every attempt is a pure function of the supplied
//!   request, account snapshot, and timestamp

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod actor;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod service;
pub mod types;

// Re-exports
pub use config::Config;
pub use error::{Error, Result};
pub use orchestrator::Orchestrator;
pub use service::TransferService;
pub use types::{Account, AccountId, Ledger, LedgerEntry, TransferOutcome};
