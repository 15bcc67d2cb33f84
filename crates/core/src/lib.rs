//! Core money logic for Tender.
//!
//! This crate contains pure, synchronous money arithmetic with no I/O.
//! Amounts are whole minor units; currencies come from a fixed registry.
//!
//! # Modules
//!
//! - `currency` - ISO 4217 registry and named currency constants
//! - `money` - The `Money` value type and its operations

pub mod currency;
pub mod money;

pub use currency::{Currency, CurrencyId};
pub use money::{DecimalAmount, DecimalRecord, Money, MoneyRecord};
pub use tender_shared::{MoneyConfig, MoneyError, MoneyResult, Rounding};
