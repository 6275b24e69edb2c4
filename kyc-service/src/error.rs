use crate::verification::VerificationStatus;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KycError {
    #[error("invalid verification transition: cannot {action} while {from:?}")]
    InvalidTransition {
        from: VerificationStatus,
        action: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, KycError>;
