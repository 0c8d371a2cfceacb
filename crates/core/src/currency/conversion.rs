//! Currency conversion logic.
//!
//! CRITICAL: conversion never rounds to currency decimal places. The only
//! rounding applied is the context precision (significant digits); display
//! rounding belongs to the formatter.

use coinage_shared::types::default_currency;
use coinage_shared::{MoneyError, MoneyResult, ResolveCurrency};
use rust_decimal::{Decimal, RoundingStrategy};

use super::context::ConversionContext;
use crate::money::Money;

/// Converts an amount using the given exchange rate under a context precision.
pub fn convert_amount(amount: Decimal, rate: Decimal, context: &ConversionContext) -> MoneyResult<Decimal> {
    amount
        .checked_mul(rate)
        .map(|converted| context.round(converted))
        .ok_or(MoneyError::Overflow("convert"))
}

/// Rounds to `decimal_places` using banker's rounding (round half to even).
#[must_use]
pub fn round_half_even(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

impl Money {
    /// Converts into `target` using the context's broker.
    ///
    /// Converting into the current currency returns `self` without
    /// consulting the broker.
    pub fn convert(&self, target: impl ResolveCurrency, context: &ConversionContext) -> MoneyResult<Self> {
        let target = target.resolve()?;
        if target == self.currency() {
            return Ok(*self);
        }
        let rate = context.rate(self.currency(), target)?;
        let amount = convert_amount(self.amount(), rate, context)?;
        tracing::debug!(
            from = %self.currency(),
            to = %target,
            %rate,
            amount = %self.amount(),
            converted = %amount,
            "Converted money"
        );
        Ok(Self::from_decimal(amount, target))
    }

    /// Converts into the process-wide default currency.
    pub fn convert_to_default(&self, context: &ConversionContext) -> MoneyResult<Self> {
        self.convert(default_currency(), context)
    }
}
