//! Property-based tests for money operations.
//!
//! - Construction preserves amount and currency
//! - Decimal round trip
//! - Add/subtract are inverse
//! - Allocation sum and count invariants
//! - Compare agrees with integer ordering

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{AllocationUtil, Money};
use crate::currency::{self, Currency};

/// Strategy to pick any registered currency.
fn any_currency() -> impl Strategy<Value = &'static Currency> {
    prop::sample::select(currency::all()).prop_map(|c| currency::resolve(&c).unwrap())
}

/// Strategy to generate amounts that cannot overflow when added once.
fn minor_amount() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000i64
}

/// Strategy to generate non-degenerate ratio lists (1 to 20 entries).
fn ratio_list() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(0u32..1000, 1..20)
        .prop_filter("ratios must not all be zero", |v| v.iter().any(|r| *r > 0))
        .prop_map(|v| v.into_iter().map(Decimal::from).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* integer amount and currency, construction keeps both.
    #[test]
    fn prop_from_minor_units_preserves_inputs(
        amount in minor_amount(),
        currency in any_currency(),
    ) {
        let money = Money::from_minor_units(amount, currency).unwrap();
        prop_assert_eq!(money.amount(), amount);
        prop_assert_eq!(money.currency_code(), currency.code());
    }

    /// *For any* amount expressible in the currency, from_decimal(to_decimal())
    /// returns the same value.
    #[test]
    fn prop_decimal_round_trip(
        amount in minor_amount(),
        currency in any_currency(),
    ) {
        let money = Money::new(amount, currency);
        let back = Money::from_decimal(money.to_decimal(), currency).unwrap();
        prop_assert_eq!(back, money);
        prop_assert_eq!(back.to_decimal(), money.to_decimal());
    }

    /// *For any* compatible pair, (m + n) - n == m.
    #[test]
    fn prop_add_subtract_inverse(
        a in minor_amount(),
        b in minor_amount(),
        currency in any_currency(),
    ) {
        let m = Money::new(a, currency);
        let n = Money::new(b, currency);
        let result = m.add(&n).unwrap().subtract(&n).unwrap();
        prop_assert!(result.equals(&m));
    }

    /// *For any* amount and non-degenerate ratios, parts sum to the amount
    /// and there is one part per ratio.
    #[test]
    fn prop_allocate_sum_and_count(
        amount in minor_amount(),
        ratios in ratio_list(),
    ) {
        let money = Money::new(amount, &crate::currency::EUR);
        let parts = money.allocate(&ratios).unwrap();
        prop_assert_eq!(parts.len(), ratios.len());
        prop_assert_eq!(parts.iter().map(Money::amount).sum::<i64>(), amount);
    }

    /// *For any* ratios, no part deviates from its floored share by more
    /// than one unit.
    #[test]
    fn prop_allocate_parts_within_one_unit(
        amount in 0i64..10_000_000,
        ratios in ratio_list(),
    ) {
        let total: Decimal = ratios.iter().copied().sum();
        let parts = AllocationUtil::allocate_by_ratios(amount, &ratios).unwrap();
        for (part, ratio) in parts.iter().zip(&ratios) {
            let floor = (Decimal::from(amount) * ratio / total).floor();
            let diff = Decimal::from(*part) - floor;
            prop_assert!(diff == Decimal::ZERO || diff == Decimal::ONE);
        }
    }

    /// *For any* equal-currency pair, compare agrees with integer ordering.
    #[test]
    fn prop_compare_matches_amount_order(
        a in minor_amount(),
        b in minor_amount(),
        currency in any_currency(),
    ) {
        let ordering = Money::new(a, currency).compare(&Money::new(b, currency)).unwrap();
        prop_assert_eq!(ordering, a.cmp(&b));
    }

    /// *For any* pair of distinct currencies, compare fails.
    #[test]
    fn prop_compare_cross_currency_fails(
        a in minor_amount(),
        b in minor_amount(),
        first in any_currency(),
        second in any_currency(),
    ) {
        prop_assume!(first != second);
        prop_assert!(Money::new(a, first).compare(&Money::new(b, second)).is_err());
    }

    /// *For any* value, serialization round-trips through JSON.
    #[test]
    fn prop_json_round_trip(
        amount in any::<i64>(),
        currency in any_currency(),
    ) {
        let money = Money::new(amount, currency);
        let json = serde_json::to_string(&money).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, money);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::currency::EUR;
    use rust_decimal_macros::dec;

    /// 10.01 EUR is 1001 cents.
    #[test]
    fn test_from_decimal_10_01() {
        assert_eq!(Money::from_decimal(10.01, &EUR).unwrap().amount(), 1001);
    }

    /// 10.421 EUR has too many decimal places.
    #[test]
    fn test_from_decimal_10_421() {
        assert!(Money::from_decimal(10.421, &EUR).is_err());
    }

    /// 1000 split `[1, 1, 1]` is `[334, 333, 333]`.
    #[test]
    fn test_allocate_1000_by_3() {
        let parts = Money::new(1000, &EUR).allocate(&[dec!(1); 3]).unwrap();
        let amounts: Vec<i64> = parts.iter().map(Money::amount).collect();
        assert_eq!(amounts, vec![334, 333, 333]);
    }

    /// 1000 * 1.2234 is 1223, or 1224 with ceiling.
    #[test]
    fn test_multiply_1_2234() {
        let subject = Money::new(1000, &EUR);
        assert_eq!(subject.multiply(dec!(1.2234)).unwrap().amount(), 1223);
        assert_eq!(
            subject
                .multiply_with(dec!(1.2234), tender_shared::Rounding::Ceiling)
                .unwrap()
                .amount(),
            1224
        );
    }

    /// 1000 / 2.234 is 448, or 447 with floor.
    #[test]
    fn test_divide_2_234() {
        let subject = Money::new(1000, &EUR);
        assert_eq!(subject.divide(dec!(2.234)).unwrap().amount(), 448);
        assert_eq!(
            subject
                .divide_with(dec!(2.234), tender_shared::Rounding::Floor)
                .unwrap()
                .amount(),
            447
        );
    }

    /// 1000 EUR cents serializes to `{"amount":1000,"currency":"EUR"}`.
    #[test]
    fn test_serialize_1000_eur() {
        let money = Money::from_minor_units(1000, "EUR").unwrap();
        assert_eq!(
            serde_json::to_string(&money).unwrap(),
            r#"{"amount":1000,"currency":"EUR"}"#
        );
    }
}
