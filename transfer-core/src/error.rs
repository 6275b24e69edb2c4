//! Error types for the transfer core

use thiserror::Error;

/// Transfer core error.
///
/// Screening rejections are not errors; they are [`crate::TransferOutcome`]
/// values. `Error` covers operational problems only.
#[derive(Debug, Error)]
pub enum Error {
    /// No account with the given ID
    #[error("account not found: {0}")]
    AccountNotFound(String),

    /// An account with the given ID already exists
    #[error("account already exists: {0}")]
    AccountExists(String),

    /// Invalid verification transition
    #[error(transparent)]
    Kyc(#[from] kyc_service::KycError),

    /// The account's worker task is gone
    #[error("account worker unavailable")]
    AccountUnavailable,

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
