//! Multi-currency handling: broker protocol, rate tables, and conversion.

pub mod broker;
pub mod context;
pub mod conversion;
pub mod exchange;

#[cfg(test)]
mod props;

pub use broker::{Broker, DefaultBroker, identity_rate};
pub use context::{
    ConversionContext, active_context, reset_active_context, set_active_context, set_broker,
};
pub use conversion::{convert_amount, round_half_even};
pub use exchange::{ExchangeRate, RateLookup, RateLookupMethod, RateTableBroker};
