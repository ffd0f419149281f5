//! Property-based tests for currency conversion.
//!
//! - Outputs always satisfy the money invariant
//! - Unit-rate conversion is the identity
//! - A -> B -> A round trips stay within a bounded number of nanos
//! - Conversion is deterministic

use proptest::prelude::*;
use rust_decimal::Decimal;

use cambio_shared::{Money, NANOS_PER_UNIT};

use super::converter::convert;
use super::rates::RateTable;

/// Strategy to generate valid amounts of either sign (up to 1,000,000 units).
fn valid_amount() -> impl Strategy<Value = (i64, i32)> {
    (-1_000_000i64..1_000_000i64, 0i32..NANOS_PER_UNIT, any::<bool>()).prop_map(
        |(units, nanos, negative_fraction)| {
            let negative = units < 0 || (units == 0 && negative_fraction);
            (units, if negative { -nanos } else { nanos })
        },
    )
}

/// Strategy to generate non-negative amounts.
fn positive_amount() -> impl Strategy<Value = (i64, i32)> {
    (0i64..1_000_000i64, 0i32..NANOS_PER_UNIT)
}

/// Strategy to generate exchange rates (0.0001 to 1000.0000).
fn any_rate() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Rates in [1, 2): leg-one rounding costs at most one source nano.
fn narrow_rate() -> impl Strategy<Value = Decimal> {
    (10_000i64..20_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Rates of at least 3: flooring the intermediate amount cannot move
/// the EUR value by half a nano.
fn wide_rate() -> impl Strategy<Value = Decimal> {
    (300i64..20_000i64).prop_map(|v| Decimal::new(v, 2))
}

fn table(a: Decimal, b: Decimal) -> RateTable {
    RateTable::new([("EUR", Decimal::ONE), ("AAA", a), ("BBB", b)]).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* valid amount and rate pair, the result is normalized.
    #[test]
    fn prop_output_is_normalized(
        (units, nanos) in valid_amount(),
        a in any_rate(),
        b in any_rate(),
    ) {
        let rates = table(a, b);
        let result = convert(&Money::new("AAA", units, nanos), "BBB", &rates).unwrap();
        prop_assert!(result.is_valid(), "{:?} is not normalized", result);
        prop_assert_eq!(result.currency_code, "BBB");
    }

    /// *For any* amount, converting through a unit rate returns it unchanged.
    #[test]
    fn prop_unit_rate_identity((units, nanos) in valid_amount()) {
        let rates = table(Decimal::ONE, Decimal::ONE);
        let amount = Money::new("AAA", units, nanos);
        prop_assert_eq!(convert(&amount, "AAA", &rates).unwrap(), amount.clone());
        prop_assert_eq!(
            convert(&amount, "BBB", &rates).unwrap(),
            Money::new("BBB", units, nanos)
        );
    }

    /// *For any* amount with a narrow source rate and wide intermediate
    /// rate, A -> B -> A loses at most one nano.
    #[test]
    fn prop_round_trip_within_one_nano(
        (units, nanos) in positive_amount(),
        a in narrow_rate(),
        b in wide_rate(),
    ) {
        let rates = table(a, b);
        let original = Money::new("AAA", units, nanos);
        let there = convert(&original, "BBB", &rates).unwrap();
        let back = convert(&there, "AAA", &rates).unwrap();

        let drift = (back.total_nanos() - original.total_nanos()).abs();
        prop_assert!(drift <= 1, "{} -> {} -> {} drifted {} nanos", original, there, back, drift);
    }

    /// *For any* rate pair, A -> B -> A drift is bounded by the rates,
    /// never by the size of the amount.
    #[test]
    fn prop_round_trip_bounded(
        (units, nanos) in positive_amount(),
        a in any_rate(),
        b in any_rate(),
    ) {
        let rates = table(a, b);
        let original = Money::new("AAA", units, nanos);
        let there = convert(&original, "BBB", &rates).unwrap();
        let back = convert(&there, "AAA", &rates).unwrap();

        let drift = Decimal::from_i128_with_scale(
            (back.total_nanos() - original.total_nanos()).abs(),
            0,
        );
        let bound = a + a / b + Decimal::TWO;
        prop_assert!(drift <= bound, "drift {} exceeds bound {}", drift, bound);
    }

    /// *For any* input, repeated conversion gives the same result.
    #[test]
    fn prop_convert_is_deterministic(
        (units, nanos) in valid_amount(),
        a in any_rate(),
        b in any_rate(),
    ) {
        let rates = table(a, b);
        let amount = Money::new("AAA", units, nanos);
        prop_assert_eq!(
            convert(&amount, "BBB", &rates).unwrap(),
            convert(&amount, "BBB", &rates).unwrap()
        );
    }

    /// *For any* non-negative amount, the result is non-negative.
    #[test]
    fn prop_non_negative_stays_non_negative(
        (units, nanos) in positive_amount(),
        a in any_rate(),
        b in any_rate(),
    ) {
        let rates = table(a, b);
        let result = convert(&Money::new("AAA", units, nanos), "BBB", &rates).unwrap();
        prop_assert!(!result.is_negative());
    }
}
