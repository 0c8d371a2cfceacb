//! Configuration for default currency, conversion, and formatting.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::DEFAULT_CURRENCY_CODE;

/// Top-level money configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MoneyConfig {
    /// Currency used when money is constructed without one.
    #[serde(default = "default_currency_code")]
    pub default_currency: String,
    /// Significant digits kept by conversions; `None` keeps full precision.
    #[serde(default)]
    pub precision: Option<u32>,
    /// Currency used to triangulate pairs without a direct rate.
    #[serde(default = "default_pivot_currency")]
    pub pivot_currency: String,
    /// Static spot rates.
    #[serde(default)]
    pub exchange_rates: Vec<RateConfig>,
    /// Formatter defaults.
    #[serde(default)]
    pub format: FormatOptions,
}

fn default_currency_code() -> String {
    DEFAULT_CURRENCY_CODE.to_string()
}

fn default_pivot_currency() -> String {
    "USD".to_string()
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency_code(),
            precision: None,
            pivot_currency: default_pivot_currency(),
            exchange_rates: Vec::new(),
            format: FormatOptions::default(),
        }
    }
}

/// One configured spot rate: 1 `from` = `rate` `to`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateConfig {
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
    /// Multiplier from source to target.
    pub rate: Decimal,
}

/// Options for rendering money as text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormatOptions {
    /// Digits after the decimal separator.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Whether to group the integer part in thousands.
    #[serde(default = "default_grouping")]
    pub grouping: bool,
    /// Locale name (e.g. "en_US").
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_decimal_places() -> u32 {
    2
}

fn default_grouping() -> bool {
    true
}

fn default_locale() -> String {
    "en_US".to_string()
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimal_places: default_decimal_places(),
            grouping: default_grouping(),
            locale: default_locale(),
        }
    }
}

impl FormatOptions {
    /// Returns a copy with a different number of decimal places.
    #[must_use]
    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Returns a copy with grouping switched on or off.
    #[must_use]
    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    /// Returns a copy using another locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

impl MoneyConfig {
    /// Loads configuration from `.env`, config files, and environment.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `COINAGE__*` variables (e.g. `COINAGE__DEFAULT_CURRENCY=EUR`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("COINAGE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
