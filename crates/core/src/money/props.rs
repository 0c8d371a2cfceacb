//! Property-based tests for money arithmetic.
//!
//! - Property 1: Zero is the additive identity
//! - Property 2: Scaling is commutative and reversible
//! - Property 3: The left operand's currency wins
//! - Property 4: Same-currency sums equal the sum of amounts

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{Money, Quotient};
use crate::currency::{ConversionContext, DefaultBroker, RateTableBroker};

/// Strategy to generate signed amounts (-1,000,000.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate non-zero scalars (-100.00 to 100.00, excluding 0).
fn non_zero_scalar() -> impl Strategy<Value = Decimal> {
    (-10_000i64..10_000i64)
        .prop_filter("scalar must be non-zero", |v| *v != 0)
        .prop_map(|v| Decimal::new(v, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 100.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn currency_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["USD", "EUR", "GBP", "JPY", "CHF"])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property 1: `m + 0 == m` and `m - 0 == m`.
    #[test]
    fn prop_zero_is_additive_identity(
        value in amount(),
        code in currency_code(),
    ) {
        let context = ConversionContext::new(DefaultBroker);
        let money = Money::new(value, code).unwrap();
        prop_assert_eq!(money.add(0, &context).unwrap(), money);
        prop_assert_eq!(money.subtract(Decimal::ZERO, &context).unwrap(), money);
    }

    /// Property 2.1: `s * m == m * s`.
    #[test]
    fn prop_scaling_commutes(
        value in amount(),
        scalar in non_zero_scalar(),
    ) {
        let money = Money::new(value, "USD").unwrap();
        prop_assert_eq!((scalar * money).unwrap(), (money * scalar).unwrap());
        prop_assert_eq!(money.multiply(scalar).unwrap(), (money * scalar).unwrap());
    }

    /// Property 2.2: `(m * s) / s == m`.
    #[test]
    fn prop_scale_then_divide_restores(
        value in amount(),
        scalar in non_zero_scalar(),
    ) {
        let context = ConversionContext::default();
        let money = Money::new(value, "EUR").unwrap();
        let scaled = money.multiply(scalar).unwrap();
        prop_assert_eq!(scaled.divide(scalar, &context).unwrap(), Quotient::Money(money));
    }

    /// Property 3: cross-currency sums are expressed in the left currency
    /// and add the converted right operand.
    #[test]
    fn prop_left_currency_wins(
        left in amount(),
        right in amount(),
        rate in positive_rate(),
    ) {
        let broker = RateTableBroker::new().with_rate("GBP", "CHF", rate).unwrap();
        let context = ConversionContext::new(broker);
        let chf = Money::new(left, "CHF").unwrap();
        let gbp = Money::new(right, "GBP").unwrap();

        let sum = chf.add(gbp, &context).unwrap();
        prop_assert_eq!(sum.currency().code, "CHF");
        prop_assert_eq!(sum.amount(), left + right * rate);
    }

    /// Property 4: summing same-currency values sums their amounts.
    #[test]
    fn prop_sum_matches_amounts(
        values in prop::collection::vec(amount(), 1..20),
    ) {
        let context = ConversionContext::default();
        let monies: Vec<Money> = values
            .iter()
            .map(|v| Money::new(*v, "JPY").unwrap())
            .collect();
        let expected: Decimal = values.iter().copied().sum();

        let total = Money::try_sum(monies, &context).unwrap().unwrap();
        prop_assert_eq!(total, Money::new(expected, "JPY").unwrap());
    }

    /// Negation is an involution and keeps the currency.
    #[test]
    fn prop_double_negation(
        value in amount(),
        code in currency_code(),
    ) {
        let money = Money::new(value, code).unwrap();
        prop_assert_eq!(-(-money), money);
        prop_assert_eq!(money.negate().currency(), money.currency());
    }
}
