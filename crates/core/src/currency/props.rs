//! Property-based tests for conversion and rate lookup.
//!
//! - Property 1: Identity conversion never consults the broker
//! - Property 2: Conversion multiplies by the broker rate
//! - Property 3: Round trips with reciprocal rates reproduce the amount
//! - Property 4: Lookup priority (direct before inverse before triangulated)

use proptest::prelude::*;
use rust_decimal::Decimal;

use coinage_shared::types::lookup;

use super::broker::DefaultBroker;
use super::context::ConversionContext;
use super::exchange::{RateLookupMethod, RateTableBroker};
use crate::money::Money;

/// Strategy to generate signed decimal amounts (-1,000,000.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Rates whose reciprocal is a short, exact decimal.
fn reciprocal_pair() -> impl Strategy<Value = (Decimal, Decimal)> {
    prop::sample::select(vec![
        (Decimal::new(5, 1), Decimal::new(2, 0)),
        (Decimal::new(4, 0), Decimal::new(25, 2)),
        (Decimal::new(125, 2), Decimal::new(8, 1)),
        (Decimal::new(16, 1), Decimal::new(625, 3)),
        (Decimal::new(8, 0), Decimal::new(125, 3)),
    ])
}

/// Strategy for generating registered currency codes.
fn currency_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["USD", "EUR", "GBP", "JPY", "IDR", "SGD", "AUD"])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property 1: converting into the same currency returns the value
    /// unchanged, even with a broker that knows no rates.
    #[test]
    fn prop_identity_conversion(
        value in amount(),
        code in currency_code(),
    ) {
        let context = ConversionContext::new(DefaultBroker);
        let money = Money::new(value, code).unwrap();
        prop_assert_eq!(money.convert(code, &context).unwrap(), money);
    }

    /// Property 2: `a.convert(B).amount == a.amount * rate`.
    #[test]
    fn prop_convert_multiplies_by_rate(
        value in amount(),
        rate in positive_rate(),
    ) {
        let broker = RateTableBroker::new().with_rate("USD", "EUR", rate).unwrap();
        let context = ConversionContext::new(broker);
        let usd = Money::new(value, "USD").unwrap();
        let eur = usd.convert("EUR", &context).unwrap();
        prop_assert_eq!(eur.amount(), value * rate);
        prop_assert_eq!(eur.currency(), lookup("EUR").unwrap());
    }

    /// Property 3: with exact reciprocal rates A -> B -> A reproduces A.
    #[test]
    fn prop_round_trip_with_reciprocal_rates(
        value in amount(),
        (rate, reciprocal) in reciprocal_pair(),
    ) {
        let broker = RateTableBroker::new()
            .without_pivot()
            .with_rate("GBP", "SGD", rate)
            .unwrap()
            .with_rate("SGD", "GBP", reciprocal)
            .unwrap();
        let context = ConversionContext::new(broker);
        let gbp = Money::new(value, "GBP").unwrap();
        let back = gbp
            .convert("SGD", &context)
            .unwrap()
            .convert("GBP", &context)
            .unwrap();
        prop_assert_eq!(back, gbp);
    }

    /// Property 4.1: a direct rate wins over the inverse of the opposite pair.
    #[test]
    fn prop_direct_rate_priority(
        from in currency_code(),
        to in currency_code(),
        direct_rate in positive_rate(),
        inverse_rate in positive_rate(),
    ) {
        prop_assume!(from != to);

        let broker = RateTableBroker::new()
            .with_rate(from, to, direct_rate)
            .unwrap()
            .with_rate(to, from, inverse_rate)
            .unwrap();
        let found = broker
            .lookup(lookup(from).unwrap(), lookup(to).unwrap())
            .unwrap();
        prop_assert_eq!(found.method, RateLookupMethod::Direct);
        prop_assert_eq!(found.rate, direct_rate);
    }

    /// Property 4.2: with only the opposite pair stored, the rate is inverted.
    #[test]
    fn prop_inverse_rate_fallback(
        from in currency_code(),
        to in currency_code(),
        inverse_rate in positive_rate(),
    ) {
        prop_assume!(from != to);

        let broker = RateTableBroker::new()
            .with_rate(to, from, inverse_rate)
            .unwrap();
        let found = broker
            .lookup(lookup(from).unwrap(), lookup(to).unwrap())
            .unwrap();
        prop_assert_eq!(found.method, RateLookupMethod::Inverse);
        prop_assert_eq!(found.rate, Decimal::ONE / inverse_rate);
    }

    /// Property 4.3: any broker rate is positive.
    #[test]
    fn prop_rates_are_positive(
        from in currency_code(),
        to in currency_code(),
        rate in positive_rate(),
    ) {
        prop_assume!(from != to);

        let broker = RateTableBroker::new().with_rate(from, to, rate).unwrap();
        let context = ConversionContext::new(broker);
        let forward = context.rate(lookup(from).unwrap(), lookup(to).unwrap()).unwrap();
        let backward = context.rate(lookup(to).unwrap(), lookup(from).unwrap()).unwrap();
        prop_assert!(forward > Decimal::ZERO);
        prop_assert!(backward > Decimal::ZERO);
    }
}
