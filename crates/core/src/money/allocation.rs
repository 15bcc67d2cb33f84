//! Amount allocation without losing minor units.
//!
//! Allocation works by:
//! 1. Calculate each exact share `total * ratio / sum(ratios)`
//! 2. Round every share down (floor)
//! 3. Calculate the remainder (total - sum of floors)
//! 4. Hand the remainder out one minor unit at a time, starting from the
//!    first share and moving forward in ratio order
//!
//! Step 4 is deliberately positional: 1000 split `[1, 1, 1]` is always
//! `[334, 333, 333]`.

use rust_decimal::Decimal;
use tender_shared::{MoneyError, MoneyResult, Rounding};

use super::Money;

/// Allocation utility for distributing whole minor units.
///
/// Guarantees:
/// - Sum of allocations EXACTLY equals the original total
/// - One allocation per ratio, in ratio order
/// - Leftover units go to the earliest entries
pub struct AllocationUtil;

impl AllocationUtil {
    /// Allocate `total` minor units proportionally to `ratios`.
    ///
    /// # Errors
    ///
    /// - `InvalidOperand` if `ratios` is empty, contains a negative ratio,
    ///   or sums to zero
    /// - `AmountOutOfRange` if an intermediate product overflows
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use tender_core::money::AllocationUtil;
    ///
    /// let result = AllocationUtil::allocate_by_ratios(1000, &[Decimal::ONE; 3]).unwrap();
    /// assert_eq!(result, vec![334, 333, 333]);
    /// ```
    pub fn allocate_by_ratios(total: i64, ratios: &[Decimal]) -> MoneyResult<Vec<i64>> {
        if ratios.is_empty() {
            return Err(MoneyError::InvalidOperand(
                "allocation needs at least one ratio".to_string(),
            ));
        }
        if let Some(negative) = ratios.iter().find(|r| r.is_sign_negative() && !r.is_zero()) {
            return Err(MoneyError::InvalidOperand(format!(
                "allocation ratio {negative} is negative"
            )));
        }

        let ratio_total = ratios
            .iter()
            .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(*r))
            .ok_or(MoneyError::AmountOutOfRange)?;
        if ratio_total.is_zero() {
            return Err(MoneyError::InvalidOperand(
                "allocation ratios sum to zero".to_string(),
            ));
        }

        let total_dec = Decimal::from(total);

        // Round down each
        let mut shares = ratios
            .iter()
            .map(|ratio| {
                let exact = total_dec
                    .checked_mul(*ratio)
                    .and_then(|product| product.checked_div(ratio_total))
                    .ok_or(MoneyError::AmountOutOfRange)?;
                Rounding::Floor.to_minor_units(exact)
            })
            .collect::<MoneyResult<Vec<i64>>>()?;

        // Calculate remainder to distribute
        let allocated: i128 = shares.iter().map(|s| i128::from(*s)).sum();
        let mut remainder = i128::from(total) - allocated;

        tracing::trace!(total, parts = shares.len(), %remainder, "distributing allocation remainder");

        // Give one unit to each entry in order until the remainder is gone.
        // Floored shares only overshoot when `Decimal` division rounds an
        // exact share up past an integer, so a negative remainder is rare.
        let step: i64 = if remainder < 0 { -1 } else { 1 };
        let len = shares.len();
        let mut idx = 0;
        while remainder != 0 {
            shares[idx % len] += step;
            remainder -= i128::from(step);
            idx += 1;
        }

        Ok(shares)
    }

    /// Allocate `total` minor units equally across `count` recipients.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperand` if `count` is zero.
    pub fn allocate_equal(total: i64, count: usize) -> MoneyResult<Vec<i64>> {
        if count == 0 {
            return Err(MoneyError::InvalidOperand(
                "cannot split into zero parts".to_string(),
            ));
        }
        Self::allocate_by_ratios(total, &vec![Decimal::ONE; count])
    }
}

impl Money {
    /// Splits this amount proportionally to `ratios`.
    ///
    /// The parts always sum to the original amount. Leftover minor units go
    /// to the earliest parts, one each.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use tender_core::currency::EUR;
    /// use tender_core::Money;
    ///
    /// let parts = Money::new(1000, &EUR).allocate(&[Decimal::ONE; 3]).unwrap();
    /// let amounts: Vec<i64> = parts.iter().map(Money::amount).collect();
    /// assert_eq!(amounts, vec![334, 333, 333]);
    /// ```
    pub fn allocate(&self, ratios: &[Decimal]) -> MoneyResult<Vec<Self>> {
        let shares = AllocationUtil::allocate_by_ratios(self.amount, ratios)?;
        Ok(shares
            .into_iter()
            .map(|amount| Self::new(amount, self.currency))
            .collect())
    }

    /// Splits this amount into `count` equal parts.
    pub fn split(&self, count: usize) -> MoneyResult<Vec<Self>> {
        let shares = AllocationUtil::allocate_equal(self.amount, count)?;
        Ok(shares
            .into_iter()
            .map(|amount| Self::new(amount, self.currency))
            .collect())
    }
}
