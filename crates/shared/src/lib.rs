//! Shared types, errors, and configuration for Coinage.
//!
//! This crate holds the leaf collaborators of the money core:
//! - The currency registry and the process-wide default currency
//! - Numeric amount inputs
//! - The money error type
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{FormatOptions, MoneyConfig, RateConfig};
pub use error::{MoneyError, MoneyResult};
pub use types::{Amount, Currency, ResolveCurrency};
