//! Core money logic for Coinage.
//!
//! Exact-decimal money values, a pluggable broker for exchange rates, and
//! cross-currency arithmetic and comparison. There are no I/O dependencies
//! here; rates come from whatever [`currency::Broker`] is installed.
//!
//! # Modules
//!
//! - `money` - The `Money` value type and its arithmetic
//! - `currency` - Brokers, rate tables, conversion contexts
//! - `format` - Locale-aware rendering
//! - `setup` - Applying a `MoneyConfig` to the process

pub mod currency;
pub mod format;
pub mod money;
pub mod setup;

pub use currency::{Broker, ConversionContext, DefaultBroker, RateTableBroker, active_context};
pub use format::format_money;
pub use money::{Money, Operand, Quotient};
pub use setup::install;
