//! Money value type.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are whole minor units (`i64`); real-valued intermediates such as
//! factors, ratios, and decimal inputs go through `rust_decimal::Decimal`.
//!
//! # Modules
//!
//! - `construct` - Constructors from minor units, decimals, and records
//! - `arithmetic` - Addition, subtraction, multiplication, division
//! - `allocation` - Proportional splitting without losing minor units
//! - `record` - The `{amount, currency}` wire shape

pub mod allocation;
pub mod arithmetic;
pub mod construct;
pub mod record;

#[cfg(test)]
mod props;

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tender_shared::{MoneyError, MoneyResult};

use crate::currency::Currency;

pub use allocation::AllocationUtil;
pub use construct::DecimalAmount;
pub use record::{DecimalRecord, MoneyRecord};

/// An immutable amount of money in whole minor units of one currency.
///
/// Every operation returns a new value; operands are never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "MoneyRecord", try_from = "MoneyRecord")]
pub struct Money {
    amount: i64,
    currency: &'static Currency,
}

impl Money {
    /// Creates a new Money instance from minor units and a registered currency.
    ///
    /// # Example
    ///
    /// ```
    /// use tender_core::currency::EUR;
    /// use tender_core::Money;
    ///
    /// let money = Money::new(1000, &EUR);
    /// assert_eq!(money.to_string(), "10.00");
    /// ```
    #[must_use]
    pub const fn new(amount: i64, currency: &'static Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: &'static Currency) -> Self {
        Self::new(0, currency)
    }

    /// The amount in minor units.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// The currency descriptor.
    #[must_use]
    pub const fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// The currency code (e.g. "EUR").
    #[must_use]
    pub const fn currency_code(&self) -> &'static str {
        self.currency.code()
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Returns true if the amount is strictly negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Returns true if both amount and currency match.
    ///
    /// Never fails: a different currency simply compares unequal.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Returns true if `other` has the same currency.
    #[must_use]
    pub fn has_same_currency(&self, other: &Self) -> bool {
        self.currency.code() == other.currency.code()
    }

    pub(crate) fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.has_same_currency(other) {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency_code().to_string(),
                found: other.currency_code().to_string(),
            })
        }
    }

    /// Orders two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// `self > other`, same currency only.
    pub fn greater_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// `self >= other`, same currency only.
    pub fn greater_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    /// `self < other`, same currency only.
    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// `self <= other`, same currency only.
    pub fn less_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    /// The amount in major units, e.g. 1010 cents → 10.1.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        self.fixed_point().normalize()
    }

    fn fixed_point(&self) -> Decimal {
        Decimal::new(self.amount, self.currency.decimal_digits())
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

/// Fixed-point amount with exactly the currency's decimal digits, no code.
impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fixed_point())
    }
}
