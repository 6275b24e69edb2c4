//! Transfer service: account registry over per-account actors

use crate::actor::{spawn_account_actor, AccountHandle};
use crate::config::Config;
use crate::orchestrator::Orchestrator;
use crate::types::{Account, AccountId, Ledger, TransferOutcome};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use compliance_engine::TransferRequest;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use kyc_service::{DocumentRef, VerificationStatus};
use risk_engine::VelocityState;
use std::sync::Arc;
use tracing::info;

/// Entry point for callers.
///
/// Owns one actor per account; conversion and rule configuration are shared
/// by all accounts. Accounts are created on registration and never removed.
pub struct TransferService {
    orchestrator: Arc<Orchestrator>,
    accounts: DashMap<AccountId, AccountHandle>,
}

impl TransferService {
    /// Create a service from configuration
    pub fn new(config: Config) -> Self {
        Self {
            orchestrator: Arc::new(Orchestrator::new(config.rates, config.compliance)),
            accounts: DashMap::new(),
        }
    }

    /// Register a new account.
    ///
    /// Creates the account, applies the registration transition, and returns
    /// the prompt for the next verification step.
    pub async fn register(
        &self,
        id: AccountId,
        email: &str,
        password: &str,
    ) -> Result<&'static str> {
        let handle = match self.accounts.entry(id.clone()) {
            Entry::Occupied(_) => return Err(Error::AccountExists(id.to_string())),
            Entry::Vacant(vacant) => {
                let handle =
                    spawn_account_actor(Account::new(id.clone()), self.orchestrator.clone());
                vacant.insert(handle.clone());
                handle
            }
        };

        info!(account = %id, "account created");
        handle.register(email, password).await
    }

    /// Record document submission for an account
    pub async fn submit_documents(
        &self,
        id: &AccountId,
        document: DocumentRef,
    ) -> Result<&'static str> {
        self.handle(id)?.submit_documents(document).await
    }

    /// Record an external verification approval for an account
    pub async fn approve_verification(&self, id: &AccountId) -> Result<&'static str> {
        self.handle(id)?.approve_verification().await
    }

    /// Attempt one transfer for an account at `now`
    pub async fn attempt_transfer(
        &self,
        id: &AccountId,
        request: TransferRequest,
        now: DateTime<Utc>,
    ) -> Result<TransferOutcome> {
        self.handle(id)?.attempt_transfer(request, now).await
    }

    /// Current verification status of an account
    pub async fn status(&self, id: &AccountId) -> Result<VerificationStatus> {
        self.handle(id)?.status().await
    }

    /// Current velocity state of an account
    pub async fn velocity(&self, id: &AccountId) -> Result<VelocityState> {
        self.handle(id)?.velocity().await
    }

    /// Snapshot of an account's ledger
    pub async fn ledger(&self, id: &AccountId) -> Result<Ledger> {
        self.handle(id)?.ledger().await
    }

    /// Number of registered accounts
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    fn handle(&self, id: &AccountId) -> Result<AccountHandle> {
        self.accounts
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::AccountNotFound(id.to_string()))
    }
}
