//! Money arithmetic.
//!
//! Addition and subtraction are exact. Multiplication and division go through
//! `Decimal` and are rounded back to whole minor units with a [`Rounding`].

use rust_decimal::Decimal;
use tender_shared::{MoneyConfig, MoneyError, MoneyResult, Rounding};

use super::Money;

impl Money {
    /// Adds two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// - `CurrencyMismatch` if the currencies differ
    /// - `AmountOutOfRange` on overflow
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::AmountOutOfRange)?;
        Ok(Self::new(amount, self.currency))
    }

    /// Subtracts an amount of the same currency.
    ///
    /// # Errors
    ///
    /// - `CurrencyMismatch` if the currencies differ
    /// - `AmountOutOfRange` on overflow
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(MoneyError::AmountOutOfRange)?;
        Ok(Self::new(amount, self.currency))
    }

    /// Multiplies by `factor`, rounding to nearest (ties away from zero).
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tender_core::currency::EUR;
    /// use tender_core::Money;
    ///
    /// let money = Money::new(1000, &EUR);
    /// assert_eq!(money.multiply(dec!(1.2234)).unwrap().amount(), 1223);
    /// ```
    pub fn multiply(&self, factor: impl Into<Decimal>) -> MoneyResult<Self> {
        self.multiply_with(factor, Rounding::Nearest)
    }

    /// Multiplies by `factor` using the given rounding.
    ///
    /// # Errors
    ///
    /// Returns `AmountOutOfRange` if the result does not fit in `i64`.
    pub fn multiply_with(&self, factor: impl Into<Decimal>, rounding: Rounding) -> MoneyResult<Self> {
        let product = Decimal::from(self.amount)
            .checked_mul(factor.into())
            .ok_or(MoneyError::AmountOutOfRange)?;
        Ok(Self::new(rounding.to_minor_units(product)?, self.currency))
    }

    /// Multiplies using the configured rounding.
    pub fn multiply_configured(
        &self,
        factor: impl Into<Decimal>,
        config: &MoneyConfig,
    ) -> MoneyResult<Self> {
        self.multiply_with(factor, config.rounding)
    }

    /// Divides by `divisor`, rounding to nearest (ties away from zero).
    pub fn divide(&self, divisor: impl Into<Decimal>) -> MoneyResult<Self> {
        self.divide_with(divisor, Rounding::Nearest)
    }

    /// Divides by `divisor` using the given rounding.
    ///
    /// # Errors
    ///
    /// - `DivisionByZero` if `divisor` is zero
    /// - `AmountOutOfRange` if the result does not fit in `i64`
    pub fn divide_with(&self, divisor: impl Into<Decimal>, rounding: Rounding) -> MoneyResult<Self> {
        let divisor = divisor.into();
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let quotient = Decimal::from(self.amount)
            .checked_div(divisor)
            .ok_or(MoneyError::AmountOutOfRange)?;
        Ok(Self::new(rounding.to_minor_units(quotient)?, self.currency))
    }

    /// Divides using the configured rounding.
    pub fn divide_configured(
        &self,
        divisor: impl Into<Decimal>,
        config: &MoneyConfig,
    ) -> MoneyResult<Self> {
        self.divide_with(divisor, config.rounding)
    }

    /// The same amount with the opposite sign.
    pub fn negate(&self) -> MoneyResult<Self> {
        let amount = self
            .amount
            .checked_neg()
            .ok_or(MoneyError::AmountOutOfRange)?;
        Ok(Self::new(amount, self.currency))
    }

    /// The absolute amount.
    pub fn abs(&self) -> MoneyResult<Self> {
        let amount = self
            .amount
            .checked_abs()
            .ok_or(MoneyError::AmountOutOfRange)?;
        Ok(Self::new(amount, self.currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::{EUR, USD};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_add_same_currency() {
        let first = Money::new(1000, &EUR);
        let second = Money::new(500, &EUR);

        let result = first.add(&second).unwrap();

        assert_eq!(result.amount(), 1500);
        assert_eq!(result.currency_code(), "EUR");
        assert_eq!(first.amount(), 1000);
        assert_eq!(second.amount(), 500);
    }

    #[test]
    fn test_add_different_currencies() {
        let first = Money::new(1000, &EUR);
        let second = Money::new(500, &USD);

        assert_eq!(
            first.add(&second),
            Err(MoneyError::CurrencyMismatch {
                expected: "EUR".to_string(),
                found: "USD".to_string(),
            })
        );
    }

    #[test]
    fn test_subtract_same_currency() {
        let subject = Money::new(1000, &EUR);
        let result = subject.subtract(&Money::new(250, &EUR)).unwrap();

        assert_eq!(result.amount(), 750);
        assert_eq!(result.currency_code(), "EUR");
    }

    #[test]
    fn test_subtract_different_currencies() {
        let subject = Money::new(1000, &EUR);
        assert!(subject.subtract(&Money::new(1000, &USD)).is_err());
    }

    #[test]
    fn test_add_overflow() {
        let max = Money::new(i64::MAX, &EUR);
        assert_eq!(
            max.add(&Money::new(1, &EUR)),
            Err(MoneyError::AmountOutOfRange)
        );
    }

    #[rstest]
    #[case(Rounding::Nearest, 1223)]
    #[case(Rounding::Ceiling, 1224)]
    #[case(Rounding::Floor, 1223)]
    fn test_multiply(#[case] rounding: Rounding, #[case] expected: i64) {
        let subject = Money::new(1000, &EUR);
        let result = subject.multiply_with(dec!(1.2234), rounding).unwrap();
        assert_eq!(result.amount(), expected);
        assert_eq!(result.currency_code(), "EUR");
    }

    #[test]
    fn test_multiply_default_rounding() {
        let subject = Money::new(1000, &EUR);
        assert_eq!(subject.multiply(dec!(1.2234)).unwrap().amount(), 1223);
        assert_eq!(subject.multiply(3).unwrap().amount(), 3000);
        assert_eq!(Money::new(5, &EUR).multiply(dec!(0.5)).unwrap().amount(), 3);
        assert_eq!(Money::new(-5, &EUR).multiply(dec!(0.5)).unwrap().amount(), -3);
    }

    #[rstest]
    #[case(Rounding::Nearest, 448)]
    #[case(Rounding::Ceiling, 448)]
    #[case(Rounding::Floor, 447)]
    fn test_divide(#[case] rounding: Rounding, #[case] expected: i64) {
        let subject = Money::new(1000, &EUR);
        let result = subject.divide_with(dec!(2.234), rounding).unwrap();
        assert_eq!(result.amount(), expected);
    }

    #[test]
    fn test_divide_default_rounding() {
        let subject = Money::new(1000, &EUR);
        assert_eq!(subject.divide(dec!(2.234)).unwrap().amount(), 448);
        assert_eq!(subject.divide(3).unwrap().amount(), 333);
    }

    #[test]
    fn test_divide_by_zero() {
        let subject = Money::new(1000, &EUR);
        assert_eq!(subject.divide(0), Err(MoneyError::DivisionByZero));
        assert_eq!(
            subject.divide_with(Decimal::ZERO, Rounding::Floor),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_configured_rounding() {
        let config = MoneyConfig {
            rounding: Rounding::Ceiling,
            ..MoneyConfig::default()
        };
        let subject = Money::new(1000, &EUR);
        assert_eq!(
            subject.multiply_configured(dec!(1.2234), &config).unwrap().amount(),
            1224
        );
        assert_eq!(
            subject.divide_configured(dec!(2.234), &config).unwrap().amount(),
            448
        );
    }

    #[test]
    fn test_negate_and_abs() {
        let subject = Money::new(-1050, &USD);
        assert_eq!(subject.negate().unwrap(), Money::new(1050, &USD));
        assert_eq!(subject.abs().unwrap(), Money::new(1050, &USD));
        assert_eq!(
            Money::new(i64::MIN, &USD).negate(),
            Err(MoneyError::AmountOutOfRange)
        );
    }
}
