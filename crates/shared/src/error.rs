//! Error types for money, currency, and conversion operations.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money construction, arithmetic, and conversion.
///
/// Every error is raised at the point of the violating operation and leaves
/// all operands untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Currency code is not in the registry.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// The broker has no rate for a non-identity pair.
    #[error("No exchange rate available from {from} to {to}")]
    BrokerUnavailable {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
    },

    /// Operand type is not supported by the arithmetic operation.
    #[error("Unsupported operand for {operation}: Money and {operand}")]
    TypeMismatch {
        /// Name of the operation (e.g. "add").
        operation: &'static str,
        /// Kind of the offending operand.
        operand: &'static str,
    },

    /// Ordering requested between Money and a non-Money value.
    #[error("Cannot order Money against {0}")]
    MoneyComparison(&'static str),

    /// Amount input could not be turned into an exact decimal.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Exchange rate is unusable for the pair.
    #[error("Invalid exchange rate {rate} for {from}/{to}")]
    InvalidRate {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
        /// The rejected rate.
        rate: Decimal,
    },

    /// Division by a zero amount or scalar.
    #[error("Division by zero")]
    DivisionByZero,

    /// Decimal arithmetic exceeded the representable range.
    #[error("Arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// Configuration could not be loaded or applied.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MoneyError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::BrokerUnavailable { .. } => "BROKER_UNAVAILABLE",
            Self::TypeMismatch { .. } => "TYPE_MISMATCH",
            Self::MoneyComparison(_) => "MONEY_COMPARISON",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::InvalidRate { .. } => "INVALID_RATE",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Overflow(_) => "OVERFLOW",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Returns true for errors caused by a missing or unusable exchange rate.
    #[must_use]
    pub const fn is_conversion_error(&self) -> bool {
        matches!(self, Self::BrokerUnavailable { .. } | Self::InvalidRate { .. })
    }
}

impl From<config::ConfigError> for MoneyError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
