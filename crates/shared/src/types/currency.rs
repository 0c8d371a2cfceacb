//! ISO 4217 currency identities and the process-wide registry.
//!
//! Currencies are created once from static data and handed out as
//! `&'static Currency`, so identity checks are a code comparison.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

use crate::error::{MoneyError, MoneyResult};

/// Code of the placeholder currency used when nothing else is configured.
pub const DEFAULT_CURRENCY_CODE: &str = "XYZ";

/// A monetary unit.
///
/// Two currencies are equal iff their codes match.
#[derive(Debug, Clone, Copy)]
pub struct Currency {
    /// Alphabetic code (e.g. "USD").
    pub code: &'static str,
    /// Numeric code (e.g. "840").
    pub numeric: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Countries using this currency.
    pub countries: &'static [&'static str],
}

impl Currency {
    /// Creates a currency from static data.
    #[must_use]
    pub const fn new(
        code: &'static str,
        numeric: &'static str,
        name: &'static str,
        countries: &'static [&'static str],
    ) -> Self {
        Self {
            code,
            numeric,
            name,
            countries,
        }
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl std::hash::Hash for Currency {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

/// Anything that can be resolved to a registered currency.
pub trait ResolveCurrency {
    /// Resolves to the interned registry entry.
    fn resolve(self) -> MoneyResult<&'static Currency>;
}

impl ResolveCurrency for &'static Currency {
    fn resolve(self) -> MoneyResult<&'static Currency> {
        Ok(self)
    }
}

impl ResolveCurrency for &str {
    fn resolve(self) -> MoneyResult<&'static Currency> {
        lookup(self)
    }
}

impl ResolveCurrency for String {
    fn resolve(self) -> MoneyResult<&'static Currency> {
        lookup(&self)
    }
}

impl ResolveCurrency for &String {
    fn resolve(self) -> MoneyResult<&'static Currency> {
        lookup(self)
    }
}

static CURRENCIES: &[Currency] = &[
    Currency::new("AED", "784", "UAE Dirham", &["UNITED ARAB EMIRATES"]),
    Currency::new("ARS", "032", "Argentine Peso", &["ARGENTINA"]),
    Currency::new(
        "AUD",
        "036",
        "Australian Dollar",
        &[
            "AUSTRALIA",
            "CHRISTMAS ISLAND",
            "COCOS (KEELING) ISLANDS",
            "HEARD ISLAND AND MCDONALD ISLANDS",
            "KIRIBATI",
            "NAURU",
            "NORFOLK ISLAND",
            "TUVALU",
        ],
    ),
    Currency::new("BRL", "986", "Brazilian Real", &["BRAZIL"]),
    Currency::new("CAD", "124", "Canadian Dollar", &["CANADA"]),
    Currency::new("CHF", "756", "Swiss Franc", &["LIECHTENSTEIN", "SWITZERLAND"]),
    Currency::new("CLP", "152", "Chilean Peso", &["CHILE"]),
    Currency::new("CNY", "156", "Yuan Renminbi", &["CHINA"]),
    Currency::new("COP", "170", "Colombian Peso", &["COLOMBIA"]),
    Currency::new("CZK", "203", "Czech Koruna", &["CZECH REPUBLIC"]),
    Currency::new(
        "DKK",
        "208",
        "Danish Krone",
        &["DENMARK", "FAROE ISLANDS", "GREENLAND"],
    ),
    Currency::new("EGP", "818", "Egyptian Pound", &["EGYPT"]),
    Currency::new(
        "EUR",
        "978",
        "Euro",
        &[
            "ANDORRA",
            "AUSTRIA",
            "BELGIUM",
            "CROATIA",
            "CYPRUS",
            "ESTONIA",
            "FINLAND",
            "FRANCE",
            "GERMANY",
            "GREECE",
            "IRELAND",
            "ITALY",
            "LATVIA",
            "LITHUANIA",
            "LUXEMBOURG",
            "MALTA",
            "MONACO",
            "MONTENEGRO",
            "NETHERLANDS",
            "PORTUGAL",
            "SAN MARINO",
            "SLOVAKIA",
            "SLOVENIA",
            "SPAIN",
            "VATICAN CITY STATE (HOLY SEE)",
        ],
    ),
    Currency::new("GBP", "826", "Pound Sterling", &["UNITED KINGDOM"]),
    Currency::new("HKD", "344", "Hong Kong Dollar", &["HONG KONG"]),
    Currency::new("HUF", "348", "Forint", &["HUNGARY"]),
    Currency::new("IDR", "360", "Rupiah", &["INDONESIA"]),
    Currency::new("ILS", "376", "New Israeli Sheqel", &["ISRAEL"]),
    Currency::new("INR", "356", "Indian Rupee", &["BHUTAN", "INDIA"]),
    Currency::new("ISK", "352", "Iceland Krona", &["ICELAND"]),
    Currency::new("JPY", "392", "Yen", &["JAPAN"]),
    Currency::new("KRW", "410", "Won", &["KOREA, REPUBLIC OF"]),
    Currency::new("KWD", "414", "Kuwaiti Dinar", &["KUWAIT"]),
    Currency::new("MXN", "484", "Mexican Peso", &["MEXICO"]),
    Currency::new("MYR", "458", "Malaysian Ringgit", &["MALAYSIA"]),
    Currency::new("NGN", "566", "Naira", &["NIGERIA"]),
    Currency::new(
        "NOK",
        "578",
        "Norwegian Krone",
        &["BOUVET ISLAND", "NORWAY", "SVALBARD AND JAN MAYEN"],
    ),
    Currency::new(
        "NZD",
        "554",
        "New Zealand Dollar",
        &["COOK ISLANDS", "NEW ZEALAND", "NIUE", "PITCAIRN", "TOKELAU"],
    ),
    Currency::new("PHP", "608", "Philippine Peso", &["PHILIPPINES"]),
    Currency::new("PKR", "586", "Pakistan Rupee", &["PAKISTAN"]),
    Currency::new("PLN", "985", "Zloty", &["POLAND"]),
    Currency::new("RON", "946", "Romanian Leu", &["ROMANIA"]),
    Currency::new("SAR", "682", "Saudi Riyal", &["SAUDI ARABIA"]),
    Currency::new("SEK", "752", "Swedish Krona", &["SWEDEN"]),
    Currency::new("SGD", "702", "Singapore Dollar", &["SINGAPORE"]),
    Currency::new("THB", "764", "Baht", &["THAILAND"]),
    Currency::new("TRY", "949", "Turkish Lira", &["TURKEY"]),
    Currency::new("TWD", "901", "New Taiwan Dollar", &["TAIWAN"]),
    Currency::new("UAH", "980", "Hryvnia", &["UKRAINE"]),
    Currency::new(
        "USD",
        "840",
        "US Dollar",
        &[
            "AMERICAN SAMOA",
            "BRITISH INDIAN OCEAN TERRITORY",
            "ECUADOR",
            "GUAM",
            "MARSHALL ISLANDS",
            "MICRONESIA",
            "NORTHERN MARIANA ISLANDS",
            "PALAU",
            "PUERTO RICO",
            "TIMOR-LESTE",
            "TURKS AND CAICOS ISLANDS",
            "UNITED STATES MINOR OUTLYING ISLANDS",
            "VIRGIN ISLANDS (BRITISH)",
            "VIRGIN ISLANDS (U.S.)",
        ],
    ),
    Currency::new("VND", "704", "Dong", &["VIET NAM"]),
    Currency::new("XAU", "959", "Gold", &[]),
    Currency::new(DEFAULT_CURRENCY_CODE, "999", "Default currency.", &[]),
    Currency::new("ZAR", "710", "Rand", &["LESOTHO", "NAMIBIA", "SOUTH AFRICA"]),
];

static BY_CODE: Lazy<HashMap<&'static str, &'static Currency>> =
    Lazy::new(|| CURRENCIES.iter().map(|c| (c.code, c)).collect());

static BY_NUMERIC: Lazy<HashMap<&'static str, &'static Currency>> =
    Lazy::new(|| CURRENCIES.iter().map(|c| (c.numeric, c)).collect());

static DEFAULT_CURRENCY: Lazy<RwLock<&'static Currency>> =
    Lazy::new(|| RwLock::new(BY_CODE[DEFAULT_CURRENCY_CODE]));

/// Looks up a registered currency by alphabetic code (case-insensitive).
pub fn lookup(code: &str) -> MoneyResult<&'static Currency> {
    BY_CODE
        .get(code.trim().to_uppercase().as_str())
        .copied()
        .ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
}

/// Looks up a registered currency by ISO numeric code.
pub fn lookup_numeric(numeric: &str) -> MoneyResult<&'static Currency> {
    BY_NUMERIC
        .get(numeric.trim())
        .copied()
        .ok_or_else(|| MoneyError::UnknownCurrency(numeric.to_string()))
}

/// Iterates all registered currencies in code order.
pub fn all() -> impl Iterator<Item = &'static Currency> {
    CURRENCIES.iter()
}

/// Returns the process-wide default currency.
pub fn default_currency() -> &'static Currency {
    *DEFAULT_CURRENCY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Replaces the process-wide default currency.
///
/// Affects every later `Money` constructed without an explicit currency.
pub fn set_default_currency(currency: impl ResolveCurrency) -> MoneyResult<&'static Currency> {
    let currency = currency.resolve()?;
    let mut slot = DEFAULT_CURRENCY
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    if *slot != currency {
        tracing::info!(from = %*slot, to = %currency, "Default currency replaced");
    }
    *slot = currency;
    Ok(currency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_currency_init() {
        static US_DOLLAR: Currency = Currency::new(
            "USD",
            "840",
            "US Dollar",
            &[
                "AMERICAN SAMOA",
                "BRITISH INDIAN OCEAN TERRITORY",
                "ECUADOR",
                "GUAM",
                "MARSHALL ISLANDS",
                "MICRONESIA",
                "NORTHERN MARIANA ISLANDS",
                "PALAU",
                "PUERTO RICO",
                "TIMOR-LESTE",
                "TURKS AND CAICOS ISLANDS",
                "UNITED STATES MINOR OUTLYING ISLANDS",
                "VIRGIN ISLANDS (BRITISH)",
                "VIRGIN ISLANDS (U.S.)",
            ],
        );
        let registered = lookup("USD").unwrap();
        assert_eq!(US_DOLLAR.code, "USD");
        assert_eq!(US_DOLLAR.countries, registered.countries);
        assert_eq!(US_DOLLAR.name, "US Dollar");
        assert_eq!(US_DOLLAR.numeric, "840");
        assert_eq!(&US_DOLLAR, registered);
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(lookup("XYZ").unwrap().to_string(), "XYZ");
        assert_eq!(format!("{}", lookup("EUR").unwrap()), "EUR");
    }

    #[rstest]
    #[case("USD", "USD")]
    #[case("usd", "USD")]
    #[case(" eur ", "EUR")]
    #[case("Jpy", "JPY")]
    fn test_lookup_case_insensitive(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(lookup(input).unwrap().code, expected);
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(
            lookup("INVALID"),
            Err(MoneyError::UnknownCurrency("INVALID".into()))
        );
        assert!(lookup("").is_err());
    }

    #[test]
    fn test_lookup_is_interned() {
        let a = lookup("gbp").unwrap();
        let b = lookup("GBP").unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_lookup_numeric() {
        assert_eq!(lookup_numeric("978").unwrap().code, "EUR");
        assert_eq!(lookup_numeric("032").unwrap().code, "ARS");
        assert!(lookup_numeric("000").is_err());
    }

    #[test]
    fn test_registry_codes_unique_and_sorted() {
        let codes: Vec<_> = all().map(|c| c.code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
        assert_eq!(BY_NUMERIC.len(), CURRENCIES.len());
    }

    #[test]
    fn test_placeholder_currency() {
        let xyz = lookup(DEFAULT_CURRENCY_CODE).unwrap();
        assert_eq!(xyz.numeric, "999");
        assert_eq!(xyz.name, "Default currency.");
        assert!(xyz.countries.is_empty());
    }

    #[test]
    fn test_resolve_currency_inputs() {
        let usd = lookup("USD").unwrap();
        assert_eq!("usd".resolve().unwrap(), usd);
        assert_eq!(String::from("USD").resolve().unwrap(), usd);
        assert_eq!((&String::from("usd")).resolve().unwrap(), usd);
        assert_eq!(usd.resolve().unwrap(), usd);
        assert!("NOPE".resolve().is_err());
    }

    #[test]
    fn test_currency_serializes_as_code() {
        let json = serde_json::to_string(lookup("CHF").unwrap()).unwrap();
        assert_eq!(json, "\"CHF\"");
    }
}
