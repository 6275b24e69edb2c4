//! Risk Engine for RemitRail
//!
//! Velocity tracking and country risk tiers for transfer screening

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod types;
pub mod velocity;

pub use types::CountryRiskTier;
pub use velocity::{VelocityConfig, VelocityState};
