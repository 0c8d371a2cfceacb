//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! `Money` wraps `rust_decimal::Decimal` and a registered `Currency`, and is
//! never mutated after construction.

mod arithmetic;
mod compare;
mod operand;

#[cfg(test)]
mod props;

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Mul, Neg, Rem};

use coinage_shared::types::{default_currency, lookup};
use coinage_shared::{Amount, Currency, MoneyResult, ResolveCurrency};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::currency::round_half_even;

pub use operand::{Operand, Quotient};

/// Represents a monetary amount with currency.
///
/// `PartialEq`, `Eq` and `Hash` are strict: equal currency and numerically
/// equal amount. Cross-currency equality goes through [`Money::equals`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Money {
    amount: Decimal,
    currency: &'static Currency,
}

impl Money {
    /// Creates money from any supported amount input and currency.
    ///
    /// String currency codes are resolved through the registry.
    pub fn new(amount: impl Into<Amount>, currency: impl ResolveCurrency) -> MoneyResult<Self> {
        let currency = currency.resolve()?;
        let amount = amount.into().to_decimal()?;
        Ok(Self { amount, currency })
    }

    /// Creates money in the process-wide default currency.
    pub fn with_default_currency(amount: impl Into<Amount>) -> MoneyResult<Self> {
        Self::new(amount, default_currency())
    }

    /// Creates money from an exact decimal and a registered currency.
    #[must_use]
    pub const fn from_decimal(amount: Decimal, currency: &'static Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: &'static Currency) -> Self {
        Self::from_decimal(Decimal::ZERO, currency)
    }

    /// The exact amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency.
    #[must_use]
    pub const fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns a copy rounded to `decimal_places` with banker's rounding.
    #[must_use]
    pub fn round(&self, decimal_places: u32) -> Self {
        Self::from_decimal(round_half_even(self.amount, decimal_places), self.currency)
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Money")
            .field("amount", &self.amount)
            .field("currency", &self.currency.code)
            .finish()
    }
}

/// `"<amount> <code>"`, e.g. `1000000 USD`. Use [`crate::format`] for display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency.code)
    }
}

/// Orders same-currency values; different currencies are unordered.
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.currency == other.currency).then(|| self.amount.cmp(&other.amount))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

/// Checked scaling; overflow yields `MoneyError::Overflow`.
impl Mul<Decimal> for Money {
    type Output = MoneyResult<Self>;

    fn mul(self, scalar: Decimal) -> MoneyResult<Self> {
        self.multiply(scalar)
    }
}

impl Mul<Money> for Decimal {
    type Output = MoneyResult<Money>;

    fn mul(self, money: Money) -> MoneyResult<Money> {
        money.multiply(self)
    }
}

/// "Percentage of": `pct % money` is `pct` percent of `money`.
///
/// NOTE: this is *not* a remainder. `dec!(1) % Money(1000000 USD)` yields
/// `Ok(10000 USD)`. Same as [`Money::percentage`], which reads better in new
/// code.
impl Rem<Money> for Decimal {
    type Output = MoneyResult<Money>;

    fn rem(self, money: Money) -> MoneyResult<Money> {
        money.percentage(self)
    }
}

#[derive(Serialize, Deserialize)]
struct MoneyRepr {
    amount: Decimal,
    currency: String,
}

impl From<Money> for MoneyRepr {
    fn from(money: Money) -> Self {
        Self {
            amount: money.amount,
            currency: money.currency.code.to_string(),
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MoneyRepr::from(*self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MoneyRepr::deserialize(deserializer)?;
        let currency = lookup(&repr.currency).map_err(serde::de::Error::custom)?;
        Ok(Self::from_decimal(repr.amount, currency))
    }
}
