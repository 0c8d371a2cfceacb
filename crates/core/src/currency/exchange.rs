//! Exchange rate types and the static rate-table broker.

use std::collections::HashMap;

use coinage_shared::types::lookup;
use coinage_shared::{Currency, MoneyConfig, MoneyError, MoneyResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::broker::{Broker, identity_rate};

/// Exchange rate between two currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency code.
    pub from_currency: String,
    /// Target currency code.
    pub to_currency: String,
    /// Exchange rate (1 from_currency = rate to_currency).
    pub rate: Decimal,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub fn new(from_currency: impl Into<String>, to_currency: impl Into<String>, rate: Decimal) -> Self {
        Self {
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            rate,
        }
    }

    /// Returns the inverse rate.
    pub fn inverse(&self) -> MoneyResult<Self> {
        let rate = Decimal::ONE
            .checked_div(self.rate)
            .ok_or(MoneyError::DivisionByZero)?;
        Ok(Self {
            from_currency: self.to_currency.clone(),
            to_currency: self.from_currency.clone(),
            rate,
        })
    }
}

/// How an exchange rate was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLookupMethod {
    /// Same currency on both sides.
    Identity,
    /// Direct rate found (from_currency -> to_currency).
    Direct,
    /// Inverse rate calculated (to_currency -> from_currency, then inverted).
    Inverse,
    /// Triangulated through the pivot currency.
    Triangulated,
}

/// Result of an exchange rate lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLookup {
    /// The exchange rate.
    pub rate: Decimal,
    /// How the rate was obtained.
    pub method: RateLookupMethod,
}

/// Broker backed by a fixed table of spot rates.
///
/// Lookup order: identity, direct, inverse, then triangulation through the
/// pivot currency (each leg direct or inverse).
#[derive(Debug, Clone)]
pub struct RateTableBroker {
    rates: HashMap<(&'static str, &'static str), Decimal>,
    pivot: Option<&'static Currency>,
}

impl Default for RateTableBroker {
    fn default() -> Self {
        Self {
            rates: HashMap::new(),
            pivot: lookup("USD").ok(),
        }
    }
}

impl RateTableBroker {
    /// Creates an empty table pivoting through USD.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from configured rates and pivot.
    pub fn from_config(config: &MoneyConfig) -> MoneyResult<Self> {
        let mut broker = Self::new().with_pivot(&config.pivot_currency)?;
        for entry in &config.exchange_rates {
            broker.insert(ExchangeRate::new(&entry.from, &entry.to, entry.rate))?;
        }
        Ok(broker)
    }

    /// Sets the pivot currency used for triangulation.
    pub fn with_pivot(mut self, code: &str) -> MoneyResult<Self> {
        self.pivot = Some(lookup(code)?);
        Ok(self)
    }

    /// Disables triangulation.
    #[must_use]
    pub fn without_pivot(mut self) -> Self {
        self.pivot = None;
        self
    }

    /// Adds a rate, builder style.
    pub fn with_rate(mut self, from: &str, to: &str, rate: Decimal) -> MoneyResult<Self> {
        self.insert(ExchangeRate::new(from, to, rate))?;
        Ok(self)
    }

    /// Adds or replaces a rate.
    ///
    /// Rates must be positive and between two different registered currencies.
    pub fn insert(&mut self, rate: ExchangeRate) -> MoneyResult<()> {
        let from = lookup(&rate.from_currency)?;
        let to = lookup(&rate.to_currency)?;
        if rate.rate <= Decimal::ZERO || from == to {
            return Err(MoneyError::InvalidRate {
                from: from.code.to_string(),
                to: to.code.to_string(),
                rate: rate.rate,
            });
        }
        self.rates.insert((from.code, to.code), rate.rate);
        Ok(())
    }

    /// Number of stored rates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no rates are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Finds a rate for the pair, reporting how it was obtained.
    #[must_use]
    pub fn lookup(&self, from: &Currency, to: &Currency) -> Option<RateLookup> {
        if from == to {
            return Some(RateLookup {
                rate: Decimal::ONE,
                method: RateLookupMethod::Identity,
            });
        }

        if let Some(rate) = self.direct(from, to) {
            return Some(RateLookup {
                rate,
                method: RateLookupMethod::Direct,
            });
        }

        if let Some(rate) = self.inverse(from, to) {
            return Some(RateLookup {
                rate,
                method: RateLookupMethod::Inverse,
            });
        }

        let pivot = self.pivot?;
        if from == pivot || to == pivot {
            return None;
        }
        let from_to_pivot = self.direct(from, pivot).or_else(|| self.inverse(from, pivot))?;
        let pivot_to_target = self.direct(pivot, to).or_else(|| self.inverse(pivot, to))?;
        from_to_pivot
            .checked_mul(pivot_to_target)
            .map(|rate| RateLookup {
                rate,
                method: RateLookupMethod::Triangulated,
            })
    }

    fn direct(&self, from: &Currency, to: &Currency) -> Option<Decimal> {
        self.rates.get(&(from.code, to.code)).copied()
    }

    fn inverse(&self, from: &Currency, to: &Currency) -> Option<Decimal> {
        self.direct(to, from)
            .and_then(|rate| Decimal::ONE.checked_div(rate))
    }
}

impl Broker for RateTableBroker {
    fn exchange_rate(&self, from: &Currency, to: &Currency) -> MoneyResult<Decimal> {
        match self.lookup(from, to) {
            Some(found) => {
                tracing::debug!(
                    from = %from,
                    to = %to,
                    rate = %found.rate,
                    method = ?found.method,
                    "Exchange rate resolved"
                );
                Ok(found.rate)
            }
            None => identity_rate(from, to),
        }
    }
}
