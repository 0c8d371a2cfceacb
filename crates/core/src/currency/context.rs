//! Conversion context: which broker to consult and how much precision to keep.
//!
//! Every cross-currency operation takes a `ConversionContext` explicitly.
//! One context is also kept process-wide as the *active* context, so the
//! common case of a single broker for the whole process needs no plumbing.

use std::sync::{Arc, PoisonError, RwLock};

use coinage_shared::{Currency, MoneyError, MoneyResult};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use super::broker::{Broker, DefaultBroker};

/// Broker plus decimal precision used by conversions.
#[derive(Debug, Clone)]
pub struct ConversionContext {
    broker: Arc<dyn Broker>,
    precision: Option<u32>,
}

impl Default for ConversionContext {
    fn default() -> Self {
        Self::new(DefaultBroker)
    }
}

impl ConversionContext {
    /// Creates a context around a broker, keeping full precision.
    pub fn new(broker: impl Broker + 'static) -> Self {
        Self::from_shared(Arc::new(broker))
    }

    /// Creates a context around an already shared broker.
    #[must_use]
    pub fn from_shared(broker: Arc<dyn Broker>) -> Self {
        Self {
            broker,
            precision: None,
        }
    }

    /// Rounds results to `digits` significant digits.
    ///
    /// Round trips such as A -> B -> A are only exact up to this precision.
    #[must_use]
    pub fn with_precision(mut self, digits: u32) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Keeps the full 28-digit decimal precision.
    #[must_use]
    pub fn with_full_precision(mut self) -> Self {
        self.precision = None;
        self
    }

    /// Significant digits kept, if limited.
    #[must_use]
    pub const fn precision(&self) -> Option<u32> {
        self.precision
    }

    /// The broker consulted for non-identity pairs.
    #[must_use]
    pub fn broker(&self) -> &dyn Broker {
        self.broker.as_ref()
    }

    /// Returns the rate from `from` to `to`.
    ///
    /// Identical currencies always yield exactly 1 without consulting the
    /// broker. Non-positive broker rates are rejected.
    pub fn rate(&self, from: &Currency, to: &Currency) -> MoneyResult<Decimal> {
        if from == to {
            return Ok(Decimal::ONE);
        }
        let rate = self.broker.exchange_rate(from, to)?;
        if rate <= Decimal::ZERO {
            return Err(MoneyError::InvalidRate {
                from: from.code.to_string(),
                to: to.code.to_string(),
                rate,
            });
        }
        Ok(rate)
    }

    /// Applies the context precision to a computed value.
    #[must_use]
    pub fn round(&self, value: Decimal) -> Decimal {
        match self.precision {
            // round_sf only fails when the rounded value cannot be represented
            Some(digits) => value.round_sf(digits).unwrap_or(value),
            None => value,
        }
    }
}

static ACTIVE: Lazy<RwLock<ConversionContext>> =
    Lazy::new(|| RwLock::new(ConversionContext::default()));

/// Returns a handle to the process-wide active context.
pub fn active_context() -> ConversionContext {
    ACTIVE.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Replaces the process-wide active context.
///
/// Not synchronised against conversions already holding the previous
/// context; they finish with the broker they started with.
pub fn set_active_context(context: ConversionContext) {
    tracing::info!(
        broker = ?context.broker,
        precision = ?context.precision,
        "Active conversion context replaced"
    );
    *ACTIVE.write().unwrap_or_else(PoisonError::into_inner) = context;
}

/// Replaces the active broker, keeping the active precision.
pub fn set_broker(broker: impl Broker + 'static) {
    let precision = active_context().precision;
    let mut context = ConversionContext::new(broker);
    context.precision = precision;
    set_active_context(context);
}

/// Restores the default (identity-only) broker with full precision.
pub fn reset_active_context() {
    set_active_context(ConversionContext::default());
}
