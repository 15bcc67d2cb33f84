//! Currency lookup.
//!
//! Indices over the static table are built on first use and only read
//! afterwards, so lookups are safe from any number of threads.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tender_shared::{MoneyConfig, MoneyError, MoneyResult};

use super::Currency;
use super::table::CURRENCIES;

static BY_CODE: Lazy<HashMap<&'static str, &'static Currency>> =
    Lazy::new(|| CURRENCIES.iter().map(|c| (c.code(), c)).collect());

static BY_NUMERIC: Lazy<HashMap<u16, &'static Currency>> =
    Lazy::new(|| CURRENCIES.iter().map(|c| (c.numeric_code(), c)).collect());

/// Any of the shapes a caller may use to name a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyId<'a> {
    /// A descriptor, e.g. `&EUR`.
    Descriptor(&'a Currency),
    /// An alphabetic code, matched case-insensitively.
    Code(&'a str),
    /// An ISO 4217 numeric code.
    Numeric(u16),
}

impl<'a> From<&'a Currency> for CurrencyId<'a> {
    fn from(currency: &'a Currency) -> Self {
        Self::Descriptor(currency)
    }
}

impl<'a> From<&'a str> for CurrencyId<'a> {
    fn from(code: &'a str) -> Self {
        Self::Code(code)
    }
}

impl<'a> From<&'a String> for CurrencyId<'a> {
    fn from(code: &'a String) -> Self {
        Self::Code(code.as_str())
    }
}

impl From<u16> for CurrencyId<'_> {
    fn from(numeric_code: u16) -> Self {
        Self::Numeric(numeric_code)
    }
}

impl std::fmt::Display for CurrencyId<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Descriptor(currency) => write!(f, "{currency}"),
            Self::Code(code) => f.write_str(code),
            Self::Numeric(numeric) => write!(f, "{numeric:03}"),
        }
    }
}

/// Resolves a currency identifier to its registry entry.
///
/// # Errors
///
/// Returns `InvalidCurrency` if the identifier is not registered.
///
/// # Example
///
/// ```
/// use tender_core::currency::{self, EUR};
///
/// assert_eq!(currency::resolve("eur").unwrap(), &EUR);
/// assert_eq!(currency::resolve(978u16).unwrap(), &EUR);
/// assert!(currency::resolve("XYZ").is_err());
/// ```
pub fn resolve<'a>(id: impl Into<CurrencyId<'a>>) -> MoneyResult<&'static Currency> {
    let id = id.into();
    let found = match id {
        // Descriptors are re-checked so the returned entry is always the table row.
        CurrencyId::Descriptor(currency) => BY_CODE
            .get(currency.code())
            .copied()
            .filter(|entry| *entry == currency),
        CurrencyId::Code(code) => BY_CODE.get(code.to_ascii_uppercase().as_str()).copied(),
        CurrencyId::Numeric(numeric) => BY_NUMERIC.get(&numeric).copied(),
    };

    found.ok_or_else(|| {
        tracing::debug!(currency = %id, "rejected unknown currency");
        MoneyError::InvalidCurrency(id.to_string())
    })
}

/// Returns every registered currency, ordered by code.
#[must_use]
pub fn all() -> &'static [Currency] {
    CURRENCIES
}

/// Resolves the configured default currency.
///
/// # Errors
///
/// Returns `InvalidCurrency` if the configured code is not registered.
pub fn configured_currency(config: &MoneyConfig) -> MoneyResult<&'static Currency> {
    resolve(&config.default_currency)
}
