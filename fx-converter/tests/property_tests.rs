//! Property-based tests for amount parsing and conversion
//!
//! - Parsing round-trips any non-negative decimal and rejects any negative
//! - Conversion is a single multiplication by the directional rate

use fx_converter::{parse_amount, Currency, RateTable};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn decimal_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000, 0u32..4).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

proptest! {
    #[test]
    fn non_negative_amounts_round_trip(amount in decimal_strategy()) {
        prop_assert_eq!(parse_amount(&amount.to_string()), Some(amount));
    }

    #[test]
    fn surrounding_whitespace_is_ignored(amount in decimal_strategy()) {
        let padded = format!("  {} ", amount);
        prop_assert_eq!(parse_amount(&padded), Some(amount));
    }

    #[test]
    fn negative_amounts_never_parse(mantissa in 1i64..1_000_000_000, scale in 0u32..4) {
        let negative = Decimal::new(-mantissa, scale);
        prop_assert_eq!(parse_amount(&negative.to_string()), None);
    }

    #[test]
    fn conversion_multiplies_by_the_rate(amount in decimal_strategy()) {
        let table = RateTable::default();

        let conversion = table
            .convert(Currency::USD, Currency::EUR, &amount.to_string())
            .unwrap();
        prop_assert_eq!(conversion.requested_amount, amount);
        prop_assert_eq!(
            conversion.converted_amount,
            amount * table.rate(Currency::USD, Currency::EUR)
        );
    }

    #[test]
    fn unlisted_pairs_convert_at_identity(amount in decimal_strategy()) {
        let table = RateTable::default();

        // No INR entry exists in the default table
        let conversion = table
            .convert(Currency::USD, Currency::INR, &amount.to_string())
            .unwrap();
        prop_assert_eq!(conversion.converted_amount, amount);
    }
}
