//! Cross-currency equality and ordering.

use std::cmp::Ordering;

use coinage_shared::{MoneyError, MoneyResult};

use super::{Money, Operand};
use crate::currency::ConversionContext;

impl Money {
    /// Equality after normalising `other` into this currency.
    ///
    /// Any non-money operand is simply not equal; only a missing rate for
    /// money in another currency is an error.
    pub fn equals(&self, other: impl Into<Operand>, context: &ConversionContext) -> MoneyResult<bool> {
        match other.into() {
            Operand::Money(other) => {
                let other = other.convert(self.currency(), context)?;
                Ok(self.amount() == other.amount())
            }
            _ => Ok(false),
        }
    }

    /// Orders against money after normalising `other` into this currency.
    ///
    /// Ordering against anything else fails with `MoneyComparison`.
    pub fn compare(&self, other: impl Into<Operand>, context: &ConversionContext) -> MoneyResult<Ordering> {
        match other.into() {
            Operand::Money(other) => {
                let other = other.convert(self.currency(), context)?;
                Ok(self.amount().cmp(&other.amount()))
            }
            other => Err(MoneyError::MoneyComparison(other.kind())),
        }
    }

    /// `self < other` under [`Money::compare`].
    pub fn is_less_than(&self, other: impl Into<Operand>, context: &ConversionContext) -> MoneyResult<bool> {
        Ok(self.compare(other, context)?.is_lt())
    }

    /// `self > other` under [`Money::compare`].
    pub fn is_greater_than(&self, other: impl Into<Operand>, context: &ConversionContext) -> MoneyResult<bool> {
        Ok(self.compare(other, context)?.is_gt())
    }
}
