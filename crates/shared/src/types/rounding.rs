//! Rounding strategies for fractional minor-unit results.
//!
//! Multiplication and division produce real-valued intermediates. A
//! `Rounding` turns such an intermediate back into a whole number of minor
//! units.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};

/// Strategy for rounding a real-valued amount to whole minor units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Round to nearest, ties away from zero (1.5 → 2, -1.5 → -2).
    #[default]
    Nearest,
    /// Round toward positive infinity.
    Ceiling,
    /// Round toward negative infinity.
    Floor,
    /// Banker's rounding: round to nearest, ties to even (2.5 → 2, 3.5 → 4).
    HalfEven,
}

impl Rounding {
    const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Nearest => RoundingStrategy::MidpointAwayFromZero,
            Self::Ceiling => RoundingStrategy::ToPositiveInfinity,
            Self::Floor => RoundingStrategy::ToNegativeInfinity,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Rounds `value` to the given number of decimal places.
    #[must_use]
    pub fn round_dp(self, value: Decimal, decimal_places: u32) -> Decimal {
        value.round_dp_with_strategy(decimal_places, self.strategy())
    }

    /// Rounds `value` to a whole number of minor units.
    ///
    /// # Errors
    ///
    /// Returns `AmountOutOfRange` if the rounded value does not fit in `i64`.
    pub fn to_minor_units(self, value: Decimal) -> MoneyResult<i64> {
        self.round_dp(value, 0)
            .to_i64()
            .ok_or(MoneyError::AmountOutOfRange)
    }
}

impl std::fmt::Display for Rounding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nearest => write!(f, "nearest"),
            Self::Ceiling => write!(f, "ceiling"),
            Self::Floor => write!(f, "floor"),
            Self::HalfEven => write!(f, "half_even"),
        }
    }
}

impl std::str::FromStr for Rounding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nearest" | "round" => Ok(Self::Nearest),
            "ceiling" | "ceil" => Ok(Self::Ceiling),
            "floor" => Ok(Self::Floor),
            "half_even" | "bankers" => Ok(Self::HalfEven),
            _ => Err(format!("Unknown rounding: {s}")),
        }
    }
}
