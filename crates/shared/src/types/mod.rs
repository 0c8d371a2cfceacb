//! Common types used across the workspace.

pub mod amount;
pub mod currency;

pub use amount::Amount;
pub use currency::{
    Currency, DEFAULT_CURRENCY_CODE, ResolveCurrency, all, default_currency, lookup, lookup_numeric,
    set_default_currency,
};
