//! Money constructors.
//!
//! Three entry shapes are accepted: a whole number of minor units, a
//! major-unit decimal, or an `{amount, currency}` record. Each resolves its
//! currency through the registry before looking at the amount.

use std::borrow::Cow;
use std::str::FromStr;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use tender_shared::{MoneyError, MoneyResult, Rounding};

use super::Money;
use super::record::{DecimalRecord, MoneyRecord};
use crate::currency::{self, Currency, CurrencyId};

/// A major-unit amount as supplied by a caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecimalAmount<'a> {
    /// An exact decimal.
    Decimal(Decimal),
    /// Decimal text such as `"10.01"`.
    Text(&'a str),
    /// A binary float, read through its shortest round-trip representation.
    Float(f64),
}

impl DecimalAmount<'_> {
    /// Converts the input to a decimal.
    ///
    /// Fractional digits beyond the 28 a `Decimal` can hold are rounded.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` for non-numeric text or non-finite floats
    /// - `AmountOutOfRange` if the value exceeds the `Decimal` range
    pub fn to_decimal(self) -> MoneyResult<Decimal> {
        self.parse_with(Decimal::from_str, |text| {
            invalid_amount(format!("{text:?} is not a decimal number"))
        })
    }

    /// Converts the input to a decimal without dropping any digit.
    ///
    /// # Errors
    ///
    /// - `TooManyDecimalPlaces` if the input has more fractional digits than
    ///   a `Decimal` can hold
    /// - `InvalidAmount` for non-numeric text or non-finite floats
    /// - `AmountOutOfRange` if the value exceeds the `Decimal` range
    pub fn to_exact_decimal(self, currency: &Currency) -> MoneyResult<Decimal> {
        self.parse_with(Decimal::from_str_exact, |text| {
            excess_precision(Decimal::from_str(text).unwrap_or_default(), currency)
        })
    }

    fn parse_with(
        self,
        parse: fn(&str) -> Result<Decimal, rust_decimal::Error>,
        on_underflow: impl FnOnce(&str) -> MoneyError,
    ) -> MoneyResult<Decimal> {
        let text = match self {
            Self::Decimal(value) => return Ok(value),
            Self::Text(text) => {
                let trimmed = text.trim();
                if !is_plain_decimal(trimmed) {
                    return Err(invalid_amount(format!("{text:?} is not a decimal number")));
                }
                Cow::Borrowed(trimmed)
            }
            Self::Float(value) if !value.is_finite() => {
                return Err(invalid_amount(format!("{value} is not finite")));
            }
            Self::Float(value) => Cow::Owned(value.to_string()),
        };

        parse(&text).map_err(|err| match err {
            rust_decimal::Error::Underflow => on_underflow(&text),
            rust_decimal::Error::ExceedsMaximumPossibleValue
            | rust_decimal::Error::LessThanMinimumPossibleValue => MoneyError::AmountOutOfRange,
            _ => invalid_amount(format!("{text:?} is not a decimal number")),
        })
    }
}

/// An optional sign, then ASCII digits with at most one `.`.
fn is_plain_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    let mut digits = 0;
    let mut points = 0;
    for byte in unsigned.bytes() {
        match byte {
            b'0'..=b'9' => digits += 1,
            b'.' => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}

fn invalid_amount(reason: String) -> MoneyError {
    tracing::debug!(%reason, "rejected amount");
    MoneyError::InvalidAmount(reason)
}

fn excess_precision(amount: Decimal, currency: &Currency) -> MoneyError {
    let max = currency.decimal_digits();
    tracing::debug!(
        %amount,
        currency = currency.code(),
        max,
        "rejected decimal amount with excess precision"
    );
    MoneyError::TooManyDecimalPlaces {
        amount,
        currency: currency.code().to_string(),
        max,
    }
}

impl From<Decimal> for DecimalAmount<'_> {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl<'a> From<&'a str> for DecimalAmount<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for DecimalAmount<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

impl From<f64> for DecimalAmount<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for DecimalAmount<'_> {
    fn from(value: i64) -> Self {
        Self::Decimal(Decimal::from(value))
    }
}

impl From<i32> for DecimalAmount<'_> {
    fn from(value: i32) -> Self {
        Self::Decimal(Decimal::from(value))
    }
}

/// Converts an integral decimal to minor units.
fn whole_minor_units(amount: Decimal) -> MoneyResult<i64> {
    if !amount.fract().is_zero() {
        return Err(MoneyError::NonIntegerAmount(amount));
    }
    amount.to_i64().ok_or(MoneyError::AmountOutOfRange)
}

fn scale_to_minor(amount: Decimal, currency: &Currency) -> MoneyResult<Decimal> {
    amount
        .checked_mul(Decimal::from(currency.minor_unit_scale()))
        .ok_or(MoneyError::AmountOutOfRange)
}

impl Money {
    /// Creates Money from a whole number of minor units.
    ///
    /// The amount may be any integer type or a `Decimal`; a `Decimal` with a
    /// fractional part is rejected rather than rounded.
    ///
    /// # Errors
    ///
    /// - `InvalidCurrency` if the currency is not registered
    /// - `NonIntegerAmount` if the amount has a fractional part
    /// - `AmountOutOfRange` if the amount does not fit in `i64`
    ///
    /// # Example
    ///
    /// ```
    /// use tender_core::Money;
    ///
    /// let money = Money::from_minor_units(1042, "EUR").unwrap();
    /// assert_eq!(money.amount(), 1042);
    /// assert_eq!(money.currency_code(), "EUR");
    /// ```
    pub fn from_minor_units<'a>(
        amount: impl Into<Decimal>,
        currency: impl Into<CurrencyId<'a>>,
    ) -> MoneyResult<Self> {
        let currency = currency::resolve(currency)?;
        let amount = whole_minor_units(amount.into())?;
        Ok(Self::new(amount, currency))
    }

    /// Same as [`Money::from_minor_units`].
    pub fn from_integer<'a>(
        amount: impl Into<Decimal>,
        currency: impl Into<CurrencyId<'a>>,
    ) -> MoneyResult<Self> {
        Self::from_minor_units(amount, currency)
    }

    /// Creates Money from an `{amount, currency}` record in minor units.
    pub fn from_integer_record(record: &MoneyRecord) -> MoneyResult<Self> {
        Self::from_minor_units(record.amount, &record.currency)
    }

    /// Creates Money from a major-unit decimal amount.
    ///
    /// The conversion must be exact: an amount with more fractional digits
    /// than the currency supports is rejected. Trailing zeros do not count.
    ///
    /// # Errors
    ///
    /// - `InvalidCurrency` if the currency is not registered
    /// - `InvalidAmount` if the amount is not a finite number
    /// - `TooManyDecimalPlaces` if the amount is more precise than the currency
    /// - `AmountOutOfRange` if the result does not fit in `i64`
    ///
    /// # Example
    ///
    /// ```
    /// use tender_core::currency::EUR;
    /// use tender_core::Money;
    ///
    /// assert_eq!(Money::from_decimal("10.01", &EUR).unwrap().amount(), 1001);
    /// assert!(Money::from_decimal("10.421", &EUR).is_err());
    /// ```
    pub fn from_decimal<'a, 'b>(
        amount: impl Into<DecimalAmount<'a>>,
        currency: impl Into<CurrencyId<'b>>,
    ) -> MoneyResult<Self> {
        let currency = currency::resolve(currency)?;
        let amount = amount.into().to_exact_decimal(currency)?;

        if amount.normalize().scale() > currency.decimal_digits() {
            return Err(excess_precision(amount, currency));
        }

        let minor = whole_minor_units(scale_to_minor(amount, currency)?)?;
        Ok(Self::new(minor, currency))
    }

    /// Creates Money from an `{amount, currency}` record in major units.
    pub fn from_decimal_record(record: &DecimalRecord) -> MoneyResult<Self> {
        Self::from_decimal(record.amount, &record.currency)
    }

    /// Creates Money from a major-unit decimal, rounding excess precision.
    ///
    /// # Example
    ///
    /// ```
    /// use tender_core::currency::EUR;
    /// use tender_core::Money;
    /// use tender_core::Rounding;
    ///
    /// let money = Money::from_decimal_rounded("10.421", &EUR, Rounding::Ceiling).unwrap();
    /// assert_eq!(money.amount(), 1043);
    /// ```
    pub fn from_decimal_rounded<'a, 'b>(
        amount: impl Into<DecimalAmount<'a>>,
        currency: impl Into<CurrencyId<'b>>,
        rounding: Rounding,
    ) -> MoneyResult<Self> {
        let currency = currency::resolve(currency)?;
        let amount = amount.into().to_decimal()?;
        let minor = rounding.to_minor_units(scale_to_minor(amount, currency)?)?;
        Ok(Self::new(minor, currency))
    }
}
