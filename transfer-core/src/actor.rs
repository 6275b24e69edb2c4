//! Per-account actor serialization
//!
//! This module implements the single-writer pattern using Tokio actors: one
//! task owns each account and applies messages in mailbox order, so velocity
//! counting and ledger appends are linearizable for that account. Accounts
//! are fully independent of each other; no cross-account coordination exists.
//!
//! ```text
//! TransferService ──┬── AccountHandle ── mpsc ──> AccountActor(Account A)
//!                   └── AccountHandle ── mpsc ──> AccountActor(Account B)
//! ```

use crate::orchestrator::Orchestrator;
use crate::types::{Account, Ledger, TransferOutcome};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use compliance_engine::TransferRequest;
use kyc_service::{DocumentRef, VerificationStatus};
use risk_engine::VelocityState;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// Mailbox capacity per account
const MAILBOX_CAPACITY: usize = 64;

/// Message sent to an account actor
pub enum AccountMessage {
    /// Attempt one transfer at the supplied time
    AttemptTransfer {
        /// The transfer attempt
        request: TransferRequest,
        /// Caller-supplied evaluation time
        now: DateTime<Utc>,
        /// Outcome channel
        response: oneshot::Sender<TransferOutcome>,
    },

    /// Record a completed registration
    Register {
        /// Registered email
        email: String,
        /// Password (validated by the external identity provider)
        password: String,
        /// Resulting prompt, or an invalid-transition error
        response: oneshot::Sender<Result<&'static str>>,
    },

    /// Record submission of verification documents
    SubmitDocuments {
        /// Opaque document handle
        document: DocumentRef,
        /// Resulting prompt, or an invalid-transition error
        response: oneshot::Sender<Result<&'static str>>,
    },

    /// Record an external verification approval
    ApproveVerification {
        /// Resulting status text, or an invalid-transition error
        response: oneshot::Sender<Result<&'static str>>,
    },

    /// Read the current verification status
    GetStatus {
        /// Response channel
        response: oneshot::Sender<VerificationStatus>,
    },

    /// Read the current velocity state
    GetVelocity {
        /// Response channel
        response: oneshot::Sender<VelocityState>,
    },

    /// Read a snapshot of the ledger
    GetLedger {
        /// Response channel
        response: oneshot::Sender<Ledger>,
    },

    /// Shutdown actor
    Shutdown,
}

/// Actor that owns one account and processes its messages
struct AccountActor {
    account: Account,
    orchestrator: Arc<Orchestrator>,
    mailbox: mpsc::Receiver<AccountMessage>,
}

impl AccountActor {
    async fn run(mut self) {
        while let Some(message) = self.mailbox.recv().await {
            match message {
                AccountMessage::AttemptTransfer {
                    request,
                    now,
                    response,
                } => {
                    let outcome =
                        self.orchestrator
                            .attempt_transfer(&mut self.account, &request, now);
                    let _ = response.send(outcome);
                }

                AccountMessage::Register {
                    email,
                    password,
                    response,
                } => {
                    let result = match self.account.status.register(&email, &password) {
                        Ok(next) => {
                            self.account.status = next;
                            self.account.email = Some(email);
                            Ok(next.prompt())
                        }
                        Err(e) => Err(Error::from(e)),
                    };
                    let _ = response.send(result);
                }

                AccountMessage::SubmitDocuments { document, response } => {
                    let result = match self.account.status.submit_documents(&document) {
                        Ok(next) => {
                            self.account.status = next;
                            Ok(next.prompt())
                        }
                        Err(e) => Err(Error::from(e)),
                    };
                    let _ = response.send(result);
                }

                AccountMessage::ApproveVerification { response } => {
                    let result = match self.account.status.approve_verification() {
                        Ok(next) => {
                            self.account.status = next;
                            Ok(next.prompt())
                        }
                        Err(e) => Err(Error::from(e)),
                    };
                    let _ = response.send(result);
                }

                AccountMessage::GetStatus { response } => {
                    let _ = response.send(self.account.status);
                }

                AccountMessage::GetVelocity { response } => {
                    let _ = response.send(self.account.velocity.clone());
                }

                AccountMessage::GetLedger { response } => {
                    let _ = response.send(self.account.ledger.clone());
                }

                AccountMessage::Shutdown => break,
            }
        }
    }
}

/// Handle for sending messages to one account actor
#[derive(Clone)]
pub struct AccountHandle {
    sender: mpsc::Sender<AccountMessage>,
}

impl AccountHandle {
    async fn call<T>(
        &self,
        message: AccountMessage,
        receiver: oneshot::Receiver<T>,
    ) -> Result<T> {
        self.sender
            .send(message)
            .await
            .map_err(|_| Error::AccountUnavailable)?;
        receiver.await.map_err(|_| Error::AccountUnavailable)
    }

    /// Attempt one transfer
    pub async fn attempt_transfer(
        &self,
        request: TransferRequest,
        now: DateTime<Utc>,
    ) -> Result<TransferOutcome> {
        let (tx, rx) = oneshot::channel();
        self.call(
            AccountMessage::AttemptTransfer {
                request,
                now,
                response: tx,
            },
            rx,
        )
        .await
    }

    /// Record registration; returns the next verification prompt
    pub async fn register(&self, email: &str, password: &str) -> Result<&'static str> {
        let (tx, rx) = oneshot::channel();
        self.call(
            AccountMessage::Register {
                email: email.to_string(),
                password: password.to_string(),
                response: tx,
            },
            rx,
        )
        .await?
    }

    /// Record document submission; returns the next verification prompt
    pub async fn submit_documents(&self, document: DocumentRef) -> Result<&'static str> {
        let (tx, rx) = oneshot::channel();
        self.call(
            AccountMessage::SubmitDocuments {
                document,
                response: tx,
            },
            rx,
        )
        .await?
    }

    /// Record an external verification approval; returns the status text
    pub async fn approve_verification(&self) -> Result<&'static str> {
        let (tx, rx) = oneshot::channel();
        self.call(AccountMessage::ApproveVerification { response: tx }, rx)
            .await?
    }

    /// Current verification status
    pub async fn status(&self) -> Result<VerificationStatus> {
        let (tx, rx) = oneshot::channel();
        self.call(AccountMessage::GetStatus { response: tx }, rx).await
    }

    /// Current velocity state
    pub async fn velocity(&self) -> Result<VelocityState> {
        let (tx, rx) = oneshot::channel();
        self.call(AccountMessage::GetVelocity { response: tx }, rx)
            .await
    }

    /// Snapshot of the account's ledger
    pub async fn ledger(&self) -> Result<Ledger> {
        let (tx, rx) = oneshot::channel();
        self.call(AccountMessage::GetLedger { response: tx }, rx).await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> Result<()> {
        self.sender
            .send(AccountMessage::Shutdown)
            .await
            .map_err(|_| Error::AccountUnavailable)
    }
}

/// Spawn an actor owning `account` and return its handle
pub fn spawn_account_actor(account: Account, orchestrator: Arc<Orchestrator>) -> AccountHandle {
    let (sender, mailbox) = mpsc::channel(MAILBOX_CAPACITY);

    let actor = AccountActor {
        account,
        orchestrator,
        mailbox,
    };
    tokio::spawn(actor.run());

    AccountHandle { sender }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccountId;
    use chrono::TimeZone;
    use compliance_engine::ComplianceConfig;
    use fx_converter::{Currency, RateTable};
    use risk_engine::CountryRiskTier;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    fn spawn_verified() -> AccountHandle {
        let orchestrator = Arc::new(Orchestrator::new(
            RateTable::default(),
            ComplianceConfig::default(),
        ));
        let mut account = Account::new(AccountId::new("ACC001"));
        account.status = VerificationStatus::Verified;
        spawn_account_actor(account, orchestrator)
    }

    fn request(amount: &str) -> TransferRequest {
        TransferRequest {
            source_currency: Currency::USD,
            target_currency: Currency::EUR,
            amount: amount.to_string(),
            recipient_risk_tier: CountryRiskTier::Low,
        }
    }

    #[tokio::test]
    async fn test_actor_round_trip() {
        let handle = spawn_verified();

        let outcome = handle.attempt_transfer(request("500"), at(0)).await.unwrap();
        assert!(outcome.is_approved());

        let ledger = handle.ledger().await.unwrap();
        assert_eq!(ledger.len(), 1);

        let velocity = handle.velocity().await.unwrap();
        assert_eq!(velocity.transaction_count, 1);
    }

    #[tokio::test]
    async fn test_actor_shutdown_makes_account_unavailable() {
        let handle = spawn_verified();
        handle.shutdown().await.unwrap();

        // The mailbox closes once the actor exits; allow it to drain.
        tokio::task::yield_now().await;

        let result = handle.status().await;
        assert!(matches!(result, Err(Error::AccountUnavailable)));
    }

    #[tokio::test]
    async fn test_kyc_transitions_through_actor() {
        let orchestrator = Arc::new(Orchestrator::new(
            RateTable::default(),
            ComplianceConfig::default(),
        ));
        let handle = spawn_account_actor(Account::new(AccountId::new("ACC002")), orchestrator);

        let prompt = handle
            .register("user@example.com", "SecurePassword123!")
            .await
            .unwrap();
        assert_eq!(
            prompt,
            "Please complete KYC verification to proceed with cross-border payments"
        );

        // Registering twice is an invalid transition
        assert!(matches!(
            handle.register("user@example.com", "pw").await,
            Err(Error::Kyc(_))
        ));

        handle
            .submit_documents(DocumentRef::new("passport.pdf"))
            .await
            .unwrap();
        let text = handle.approve_verification().await.unwrap();
        assert_eq!(text, "KYC verification successful");

        assert_eq!(handle.status().await.unwrap(), VerificationStatus::Verified);
    }
}
