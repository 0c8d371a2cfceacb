//! Exchange-rate broker protocol.
//!
//! A broker is the sole authority for currency-pair rates. The provided
//! implementation only knows the identity rate and fails loudly otherwise,
//! so nothing converts silently until a real rate source is wired in.

use std::fmt;

use coinage_shared::{Currency, MoneyError, MoneyResult};
use rust_decimal::Decimal;

/// Source of exchange rates.
///
/// Implementors override [`Broker::exchange_rate`] and fall back to
/// [`identity_rate`] for pairs they do not know.
pub trait Broker: Send + Sync + fmt::Debug {
    /// Returns the multiplier `rate` such that `amount_in_to = amount_in_from * rate`.
    fn exchange_rate(&self, from: &Currency, to: &Currency) -> MoneyResult<Decimal> {
        identity_rate(from, to)
    }
}

/// Returns 1 for identical currencies and `BrokerUnavailable` otherwise.
pub fn identity_rate(from: &Currency, to: &Currency) -> MoneyResult<Decimal> {
    if from == to {
        Ok(Decimal::ONE)
    } else {
        Err(MoneyError::BrokerUnavailable {
            from: from.code.to_string(),
            to: to.code.to_string(),
        })
    }
}

/// Broker with no conversion policy configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBroker;

impl Broker for DefaultBroker {}
