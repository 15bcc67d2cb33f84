//! Currency registry.
//!
//! A fixed, read-only table of ISO 4217 currencies. Every money operation
//! resolves its currency argument here before touching amounts.
//!
//! # Modules
//!
//! - `table` - The static currency table and its named constants
//! - `registry` - Lookup by descriptor, alphabetic code, or numeric code

pub mod registry;
pub mod table;

pub use registry::{CurrencyId, all, configured_currency, resolve};
pub use table::*;

/// An ISO 4217 currency descriptor.
///
/// Descriptors only exist as entries of the static table, so any
/// `&'static Currency` handed out by the registry is a known currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    code: &'static str,
    numeric_code: u16,
    decimal_digits: u32,
    symbol: &'static str,
    name: &'static str,
}

impl Currency {
    /// Alphabetic code (e.g. "EUR").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Numeric code (e.g. 978 for EUR).
    #[must_use]
    pub const fn numeric_code(&self) -> u16 {
        self.numeric_code
    }

    /// Number of decimal digits in the minor unit (2 for cents).
    #[must_use]
    pub const fn decimal_digits(&self) -> u32 {
        self.decimal_digits
    }

    /// Display symbol (e.g. "€").
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// English name (e.g. "Euro").
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Minor units per major unit, `10^decimal_digits`.
    #[must_use]
    pub const fn minor_unit_scale(&self) -> i64 {
        10_i64.pow(self.decimal_digits)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

impl std::str::FromStr for &'static Currency {
    type Err = tender_shared::MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}
