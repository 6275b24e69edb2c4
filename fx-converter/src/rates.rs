//! Directional rate table and amount conversion

use crate::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::debug;

/// Result of converting a requested amount into the target currency.
///
/// Derived per attempt, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Amount as requested, before conversion
    pub requested_amount: Decimal,

    /// Amount after applying the rate
    pub converted_amount: Decimal,

    /// Currency of the converted amount
    pub target_currency: Currency,
}

/// One directional rate: `source` → `target` at `rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    /// Source currency
    pub source: Currency,
    /// Target currency
    pub target: Currency,
    /// Multiplier applied to the requested amount
    pub rate: Decimal,
}

/// Directional currency rate table.
///
/// The table is directional: a USD→EUR entry says nothing about EUR→USD.
/// Pairs without an explicit entry convert at rate 1. Downstream rule checks
/// operate on the converted amount, so the identity fallback keeps unknown
/// corridors flowing instead of failing them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Vec<RateEntry>", into = "Vec<RateEntry>")]
pub struct RateTable {
    rates: HashMap<(Currency, Currency), Decimal>,
}

impl Default for RateTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.set_rate(Currency::USD, Currency::EUR, Decimal::new(90, 2)); // 0.90
        table.set_rate(Currency::USD, Currency::GBP, Decimal::new(78, 2)); // 0.78
        table
    }
}

impl RateTable {
    /// Create an empty table (every pair converts at identity)
    pub fn empty() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Set or replace a directional rate
    pub fn set_rate(&mut self, source: Currency, target: Currency, rate: Decimal) {
        self.rates.insert((source, target), rate);
    }

    /// Rate for a directional pair, identity when no entry exists
    pub fn rate(&self, source: Currency, target: Currency) -> Decimal {
        match self.rates.get(&(source, target)) {
            Some(rate) => *rate,
            None => {
                debug!(%source, %target, "no rate entry, identity fallback");
                Decimal::ONE
            }
        }
    }

    /// Convert an amount as entered by the sender.
    ///
    /// Returns `None` when the raw amount is empty or does not parse as a
    /// non-negative decimal; no conversion is performed and callers must not
    /// progress the attempt to evaluation.
    pub fn convert(
        &self,
        source: Currency,
        target: Currency,
        raw_amount: &str,
    ) -> Option<Conversion> {
        let requested_amount = parse_amount(raw_amount)?;
        let converted_amount = requested_amount * self.rate(source, target);

        Some(Conversion {
            requested_amount,
            converted_amount,
            target_currency: target,
        })
    }
}

impl From<Vec<RateEntry>> for RateTable {
    fn from(entries: Vec<RateEntry>) -> Self {
        let mut table = Self::empty();
        for entry in entries {
            table.set_rate(entry.source, entry.target, entry.rate);
        }
        table
    }
}

impl From<RateTable> for Vec<RateEntry> {
    fn from(table: RateTable) -> Self {
        let mut entries: Vec<RateEntry> = table
            .rates
            .into_iter()
            .map(|((source, target), rate)| RateEntry {
                source,
                target,
                rate,
            })
            .collect();
        entries.sort_by_key(|e| (e.source.code(), e.target.code()));
        entries
    }
}

/// Parse an amount exactly as the sender entered it.
///
/// Empty, non-numeric, or negative input yields `None`: the amount was never
/// converted, which is distinct from a rejected transfer.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let amount = Decimal::from_str(trimmed).ok()?;
    if amount.is_sign_negative() {
        return None;
    }

    Some(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let table = RateTable::default();

        let conversion = table
            .convert(Currency::USD, Currency::EUR, "100")
            .unwrap();
        assert_eq!(conversion.converted_amount, Decimal::new(9000, 2)); // 90.00
        assert_eq!(conversion.target_currency, Currency::EUR);

        let conversion = table
            .convert(Currency::USD, Currency::GBP, "100")
            .unwrap();
        assert_eq!(conversion.converted_amount, Decimal::new(7800, 2)); // 78.00
    }

    #[test]
    fn test_identity_fallback_is_directional() {
        let table = RateTable::default();

        // USD→EUR has an entry; EUR→USD does not and falls back to identity.
        let conversion = table
            .convert(Currency::EUR, Currency::USD, "100")
            .unwrap();
        assert_eq!(conversion.converted_amount, Decimal::from(100));
        assert_eq!(conversion.requested_amount, Decimal::from(100));
    }

    #[test]
    fn test_unparseable_amount_yields_no_conversion() {
        let table = RateTable::default();

        assert!(table.convert(Currency::USD, Currency::EUR, "").is_none());
        assert!(table.convert(Currency::USD, Currency::EUR, "   ").is_none());
        assert!(table.convert(Currency::USD, Currency::EUR, "abc").is_none());
        assert!(table.convert(Currency::USD, Currency::EUR, "-50").is_none());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("500"), Some(Decimal::from(500)));
        assert_eq!(parse_amount(" 12.34 "), Some(Decimal::new(1234, 2)));
        assert_eq!(parse_amount("0"), Some(Decimal::ZERO));
        assert_eq!(parse_amount("ten"), None);
        assert_eq!(parse_amount("-0.01"), None);
    }

    #[test]
    fn test_rate_entry_round_trip() {
        let table = RateTable::default();
        let entries: Vec<RateEntry> = table.clone().into();
        assert_eq!(entries.len(), 2);

        let rebuilt = RateTable::from(entries);
        assert_eq!(
            rebuilt.rate(Currency::USD, Currency::EUR),
            table.rate(Currency::USD, Currency::EUR)
        );
    }
}
