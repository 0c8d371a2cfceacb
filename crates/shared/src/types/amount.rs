//! Numeric inputs accepted when constructing money.
//!
//! CRITICAL: floats never reach arithmetic. They are converted once, through
//! their shortest string form, into an exact `Decimal`.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{MoneyError, MoneyResult};

/// An amount as supplied by a caller, before canonicalisation.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    /// Already an exact decimal.
    Decimal(Decimal),
    /// Whole number.
    Integer(i64),
    /// Binary float, parsed from its string form.
    Float(f64),
    /// Decimal-formatted text such as "12.50" or "1.2e3".
    Text(String),
}

impl Amount {
    /// Converts the input into the canonical exact decimal.
    pub fn to_decimal(&self) -> MoneyResult<Decimal> {
        match self {
            Self::Decimal(d) => Ok(*d),
            Self::Integer(i) => Ok(Decimal::from(*i)),
            Self::Float(f) => {
                if !f.is_finite() {
                    return Err(MoneyError::InvalidAmount(f.to_string()));
                }
                parse_decimal(&f.to_string())
            }
            Self::Text(s) => parse_decimal(s),
        }
    }
}

/// Parses plain or scientific notation.
///
/// Inputs with more significant digits than `Decimal` can hold are rejected,
/// including tiny non-zero values that would otherwise round to zero.
fn parse_decimal(input: &str) -> MoneyResult<Decimal> {
    let trimmed = input.trim();
    let invalid = || MoneyError::InvalidAmount(input.to_string());
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| invalid())?;

    let mantissa = trimmed.split(['e', 'E']).next().unwrap_or_default();
    let parsed_digits = value.mantissa().unsigned_abs().to_string();
    if significant_digits(mantissa) != significant_digits(&parsed_digits) {
        return Err(invalid());
    }
    Ok(value)
}

/// Digits of a decimal mantissa without sign, point, or padding zeros.
fn significant_digits(mantissa: &str) -> String {
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    digits.trim_matches('0').to_string()
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
