use crate::{KycError, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Opaque reference to an uploaded verification document.
///
/// The engine never parses document contents; only the fact of submission
/// matters. Upload transport and review are external collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef(String);

impl DocumentRef {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Account verification lifecycle.
///
/// Unregistered → Registered → DocumentsSubmitted → Verified, strictly in
/// order. Only Verified accounts may have transfers evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerificationStatus {
    #[default]
    Unregistered,
    Registered,
    DocumentsSubmitted,
    Verified,
}

impl VerificationStatus {
    /// Record a completed registration.
    ///
    /// Email format and password strength are validated by the identity
    /// provider before this is called; this layer records the status change.
    pub fn register(self, email: &str, _password: &str) -> Result<Self> {
        match self {
            Self::Unregistered => {
                info!(email, "account registered");
                Ok(Self::Registered)
            }
            from => Err(KycError::InvalidTransition {
                from,
                action: "register",
            }),
        }
    }

    /// Record submission of verification documents.
    pub fn submit_documents(self, document: &DocumentRef) -> Result<Self> {
        match self {
            Self::Registered => {
                info!(document = document.as_str(), "verification documents submitted");
                Ok(Self::DocumentsSubmitted)
            }
            from => Err(KycError::InvalidTransition {
                from,
                action: "submit documents",
            }),
        }
    }

    /// Record an external verification approval.
    pub fn approve_verification(self) -> Result<Self> {
        match self {
            Self::DocumentsSubmitted => {
                info!("verification approved");
                Ok(Self::Verified)
            }
            from => Err(KycError::InvalidTransition {
                from,
                action: "approve verification",
            }),
        }
    }

    /// Whether the transfer engine may evaluate requests for this account.
    pub fn may_transact(self) -> bool {
        matches!(self, Self::Verified)
    }

    /// User-facing prompt for the current verification stage.
    ///
    /// These strings are stable; consumers display them without further
    /// interpretation.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Unregistered => "Please register to proceed with cross-border payments",
            Self::Registered => {
                "Please complete KYC verification to proceed with cross-border payments"
            }
            Self::DocumentsSubmitted => "KYC documents submitted and awaiting review",
            Self::Verified => "KYC verification successful",
        }
    }
}
