//! FX Converter for RemitRail
//!
//! Static directional rate table with identity fallback for unknown pairs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod currency;
pub mod rates;

pub use currency::{Currency, ParseCurrencyError};
pub use rates::{parse_amount, Conversion, RateEntry, RateTable};
