//! Arithmetic on money.
//!
//! Currency rule for every binary operation: when currencies differ, the
//! right-hand operand is converted into the left-hand currency first, and the
//! result is expressed in the left-hand currency.

use coinage_shared::{MoneyError, MoneyResult};
use rust_decimal::Decimal;

use super::{Money, Operand, Quotient};
use crate::currency::ConversionContext;

impl Money {
    /// Adds money or the additive identity.
    ///
    /// Numeric zero returns `self` unchanged, so folds can start from 0.
    /// Any other non-money operand is a type mismatch.
    pub fn add(&self, rhs: impl Into<Operand>, context: &ConversionContext) -> MoneyResult<Self> {
        self.combine(rhs.into(), context, "add", Decimal::checked_add)
    }

    /// Subtracts money; numeric zero returns `self` unchanged.
    pub fn subtract(&self, rhs: impl Into<Operand>, context: &ConversionContext) -> MoneyResult<Self> {
        self.combine(rhs.into(), context, "subtract", Decimal::checked_sub)
    }

    fn combine(
        &self,
        rhs: Operand,
        context: &ConversionContext,
        operation: &'static str,
        op: fn(Decimal, Decimal) -> Option<Decimal>,
    ) -> MoneyResult<Self> {
        match rhs {
            Operand::Money(other) => {
                let other = other.convert(self.currency(), context)?;
                let amount = op(self.amount(), other.amount()).ok_or(MoneyError::Overflow(operation))?;
                Ok(Self::from_decimal(context.round(amount), self.currency()))
            }
            ref zero if zero.is_numeric_zero() => Ok(*self),
            other => Err(MoneyError::TypeMismatch {
                operation,
                operand: other.kind(),
            }),
        }
    }

    /// Scales by a numeric factor. Multiplying two money values is rejected.
    pub fn multiply(&self, factor: impl Into<Operand>) -> MoneyResult<Self> {
        match factor.into() {
            Operand::Number(n) => {
                let amount = self
                    .amount()
                    .checked_mul(n.to_decimal()?)
                    .ok_or(MoneyError::Overflow("multiply"))?;
                Ok(Self::from_decimal(amount, self.currency()))
            }
            other => Err(MoneyError::TypeMismatch {
                operation: "multiply",
                operand: other.kind(),
            }),
        }
    }

    /// Divides by money (ratio) or by a scalar (money).
    ///
    /// A divisor in another currency is converted into this currency first,
    /// so a missing rate surfaces as `BrokerUnavailable`.
    pub fn divide(&self, divisor: impl Into<Operand>, context: &ConversionContext) -> MoneyResult<Quotient> {
        match divisor.into() {
            Operand::Money(other) => {
                let other = other.convert(self.currency(), context)?;
                let ratio = checked_div(self.amount(), other.amount())?;
                Ok(Quotient::Ratio(context.round(ratio)))
            }
            Operand::Number(n) => {
                let amount = checked_div(self.amount(), n.to_decimal()?)?;
                Ok(Quotient::Money(Self::from_decimal(amount, self.currency())))
            }
            other => Err(MoneyError::TypeMismatch {
                operation: "divide",
                operand: other.kind(),
            }),
        }
    }

    /// Returns `pct` percent of this value, in the same currency.
    ///
    /// This is what `pct % money` means for this type; it is not a remainder.
    pub fn percentage(&self, pct: impl Into<Operand>) -> MoneyResult<Self> {
        match pct.into() {
            Operand::Number(n) => {
                let amount = self
                    .amount()
                    .checked_mul(n.to_decimal()?)
                    .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
                    .ok_or(MoneyError::Overflow("percentage"))?;
                Ok(Self::from_decimal(amount, self.currency()))
            }
            other => Err(MoneyError::TypeMismatch {
                operation: "percentage",
                operand: other.kind(),
            }),
        }
    }

    /// Returns the value with its amount negated.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::from_decimal(-self.amount(), self.currency())
    }

    /// Sums values left to right; the first value's currency wins.
    ///
    /// Returns `None` for an empty sequence.
    pub fn try_sum<I>(values: I, context: &ConversionContext) -> MoneyResult<Option<Self>>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut values = values.into_iter();
        let Some(first) = values.next() else {
            return Ok(None);
        };
        values
            .try_fold(first, |total, value| total.add(value, context))
            .map(Some)
    }
}

fn checked_div(dividend: Decimal, divisor: Decimal) -> MoneyResult<Decimal> {
    if divisor.is_zero() {
        return Err(MoneyError::DivisionByZero);
    }
    dividend
        .checked_div(divisor)
        .ok_or(MoneyError::Overflow("divide"))
}
