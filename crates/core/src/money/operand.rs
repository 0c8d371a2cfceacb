//! Right-hand values accepted by money operations.

use coinage_shared::Amount;
use rust_decimal::Decimal;

use super::Money;

/// The right-hand side of a money operation.
///
/// Operations decide per variant whether the combination is meaningful;
/// unsupported combinations fail with a type-mismatch error instead of
/// coercing.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Another money value.
    Money(Money),
    /// A plain number.
    Number(Amount),
    /// Non-numeric text.
    Text(String),
    /// Absence of a value.
    None,
}

impl Operand {
    /// Short name of the operand kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Money(_) => "Money",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::None => "none",
        }
    }

    /// Returns true for a numeric zero (`0`, `0.0`, `Decimal::ZERO`).
    ///
    /// Numbers that are not valid amounts (NaN, infinities) are not zero.
    pub(crate) fn is_numeric_zero(&self) -> bool {
        match self {
            Self::Number(n) => n.to_decimal().is_ok_and(|d| d.is_zero()),
            _ => false,
        }
    }
}

impl From<Money> for Operand {
    fn from(value: Money) -> Self {
        Self::Money(value)
    }
}

impl From<&Money> for Operand {
    fn from(value: &Money) -> Self {
        Self::Money(*value)
    }
}

impl From<Option<Money>> for Operand {
    fn from(value: Option<Money>) -> Self {
        value.map_or(Self::None, Self::Money)
    }
}

impl From<()> for Operand {
    fn from((): ()) -> Self {
        Self::None
    }
}

impl From<Amount> for Operand {
    fn from(value: Amount) -> Self {
        Self::Number(value)
    }
}

impl From<Decimal> for Operand {
    fn from(value: Decimal) -> Self {
        Self::Number(Amount::Decimal(value))
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Number(Amount::from(value))
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Number(Amount::Integer(value))
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Self::Number(Amount::from(value))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Number(Amount::Float(value))
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Result of [`Money::divide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quotient {
    /// Money divided by money: a unitless ratio.
    Ratio(Decimal),
    /// Money divided by a scalar.
    Money(Money),
}

impl Quotient {
    /// The ratio, if this is a money-by-money quotient.
    #[must_use]
    pub const fn ratio(self) -> Option<Decimal> {
        match self {
            Self::Ratio(r) => Some(r),
            Self::Money(_) => None,
        }
    }

    /// The money value, if this is a money-by-scalar quotient.
    #[must_use]
    pub const fn money(self) -> Option<Money> {
        match self {
            Self::Money(m) => Some(m),
            Self::Ratio(_) => None,
        }
    }
}
