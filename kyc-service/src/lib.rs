//! KYC verification lifecycle for RemitRail accounts.
//!
//! Tracks registration, document submission, and verification approval, and
//! gates access to the transfer engine. Credential validation and document
//! review belong to external identity providers; this crate records the
//! resulting status transitions and the prompt shown for each state.

pub mod error;
pub mod verification;

pub use error::{KycError, Result};
pub use verification::{DocumentRef, VerificationStatus};
