//! Money error types.
//!
//! Every fallible money operation reports one of these variants at the point
//! of violation. Nothing is retried or recovered internally.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors that can occur while constructing or operating on money values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Currency Errors ==========
    /// The currency identifier is not in the registry.
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// Two operands carry different currencies.
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Currency code of the receiver.
        expected: String,
        /// Currency code of the operand.
        found: String,
    },

    // ========== Amount Errors ==========
    /// A minor-unit constructor received a fractional amount.
    #[error("Amount must be a whole number of minor units, got {0}")]
    NonIntegerAmount(Decimal),

    /// A decimal constructor received more precision than the currency has.
    #[error("Amount {amount} has too many decimal places for {currency} (max {max})")]
    TooManyDecimalPlaces {
        /// The rejected amount.
        amount: Decimal,
        /// Currency code.
        currency: String,
        /// Decimal digits supported by the currency.
        max: u32,
    },

    /// The amount is not numeric or not finite.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The result does not fit in a signed 64-bit minor-unit count.
    #[error("Amount out of range")]
    AmountOutOfRange,

    // ========== Operand Errors ==========
    /// An operation received an operand it cannot work with.
    #[error("Invalid operand: {0}")]
    InvalidOperand(String),

    /// Division by a zero divisor.
    #[error("Division by zero")]
    DivisionByZero,
}

impl MoneyError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCurrency(_) => "INVALID_CURRENCY",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::NonIntegerAmount(_) => "NON_INTEGER_AMOUNT",
            Self::TooManyDecimalPlaces { .. } => "TOO_MANY_DECIMAL_PLACES",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::AmountOutOfRange => "AMOUNT_OUT_OF_RANGE",
            Self::InvalidOperand(_) => "INVALID_OPERAND",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
        }
    }
}
