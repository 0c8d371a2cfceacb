//! Per-locale separators and currency signs.

/// Locale used when the requested one is not known.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Number and sign conventions of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormat {
    /// Locale identifier, e.g. `de_DE`.
    pub name: &'static str,
    /// Thousands separator.
    pub group_separator: &'static str,
    /// Decimal separator.
    pub decimal_point: &'static str,
    /// `(code, prefix, suffix)` triples.
    signs: &'static [(&'static str, &'static str, &'static str)],
}

const EN_US: LocaleFormat = LocaleFormat {
    name: "en_US",
    group_separator: ",",
    decimal_point: ".",
    signs: &[
        ("AUD", "A$", ""),
        ("BRL", "R$", ""),
        ("CAD", "C$", ""),
        ("CHF", "CHF ", ""),
        ("CNY", "CN¥", ""),
        ("EUR", "€", ""),
        ("GBP", "£", ""),
        ("INR", "₹", ""),
        ("JPY", "¥", ""),
        ("NZD", "NZ$", ""),
        ("USD", "US$", ""),
    ],
};

const DE_DE: LocaleFormat = LocaleFormat {
    name: "de_DE",
    group_separator: ".",
    decimal_point: ",",
    signs: &[
        ("CHF", "", " CHF"),
        ("EUR", "", " €"),
        ("GBP", "", " £"),
        ("JPY", "", " ¥"),
        ("USD", "", " $"),
    ],
};

const FR_FR: LocaleFormat = LocaleFormat {
    name: "fr_FR",
    group_separator: " ",
    decimal_point: ",",
    signs: &[
        ("CHF", "", " CHF"),
        ("EUR", "", " €"),
        ("GBP", "", " £UK"),
        ("JPY", "", " ¥"),
        ("USD", "", " $US"),
    ],
};

static LOCALES: [LocaleFormat; 3] = [EN_US, DE_DE, FR_FR];

impl LocaleFormat {
    /// Finds a locale by name, falling back to [`DEFAULT_LOCALE`].
    #[must_use]
    pub fn resolve(name: &str) -> &'static Self {
        if let Some(locale) = LOCALES.iter().find(|l| l.name == name) {
            return locale;
        }
        tracing::warn!(locale = name, fallback = DEFAULT_LOCALE, "Unknown locale");
        &LOCALES[0]
    }

    /// Prefix and suffix for a currency code.
    ///
    /// Currencies without a sign in this locale are prefixed with their code.
    #[must_use]
    pub fn sign(&self, code: &str) -> (String, &'static str) {
        self.signs
            .iter()
            .find(|(c, _, _)| *c == code)
            .map_or_else(
                || (format!("{code} "), ""),
                |(_, prefix, suffix)| ((*prefix).to_string(), *suffix),
            )
    }
}
