//! Locale-aware rendering of money.
//!
//! The money core never calls into this module; it only hands out the amount
//! and currency code.

mod locale;

use coinage_shared::FormatOptions;
use rust_decimal::Decimal;

use crate::currency::round_half_even;
use crate::money::Money;

pub use locale::{DEFAULT_LOCALE, LocaleFormat};

/// Renders money as e.g. `US$1,000,000.00`.
///
/// The amount is rounded half-to-even to `decimal_places`; with zero decimal
/// places no decimal separator is emitted.
#[must_use]
pub fn format_money(money: &Money, options: &FormatOptions) -> String {
    let locale = LocaleFormat::resolve(&options.locale);
    let code = money.currency().code;
    let (prefix, suffix) = locale.sign(code);

    let rounded = round_half_even(money.amount(), options.decimal_places);
    let number = render_number(rounded.abs(), options, locale);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{sign}{prefix}{number}{suffix}")
}

fn render_number(value: Decimal, options: &FormatOptions, locale: &LocaleFormat) -> String {
    let places = options.decimal_places as usize;
    let plain = format!("{value:.places$}");
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let mut out = if options.grouping {
        group_thousands(integer, locale.group_separator)
    } else {
        integer.to_string()
    };
    if !fraction.is_empty() {
        out.push_str(locale.decimal_point);
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
