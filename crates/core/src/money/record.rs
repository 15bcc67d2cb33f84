//! The `{amount, currency}` record shapes.
//!
//! `MoneyRecord` is the canonical wire form: minor units and a bare currency
//! code. Money serializes through it and deserializes back through the same
//! validation as [`Money::from_integer`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tender_shared::MoneyError;

use super::Money;

/// Money as `{"amount": <minor units>, "currency": "<CODE>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRecord {
    /// Amount in minor units.
    pub amount: i64,
    /// Currency code.
    pub currency: String,
}

/// Money as a major-unit decimal amount and a currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalRecord {
    /// Amount in major units (e.g. 11.51).
    pub amount: Decimal,
    /// Currency code.
    pub currency: String,
}

impl From<Money> for MoneyRecord {
    fn from(money: Money) -> Self {
        Self {
            amount: money.amount(),
            currency: money.currency_code().to_string(),
        }
    }
}

impl From<Money> for DecimalRecord {
    fn from(money: Money) -> Self {
        Self {
            amount: money.to_decimal(),
            currency: money.currency_code().to_string(),
        }
    }
}

impl TryFrom<MoneyRecord> for Money {
    type Error = MoneyError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        Self::from_integer_record(&record)
    }
}

impl TryFrom<DecimalRecord> for Money {
    type Error = MoneyError;

    fn try_from(record: DecimalRecord) -> Result<Self, Self::Error> {
        Self::from_decimal_record(&record)
    }
}
