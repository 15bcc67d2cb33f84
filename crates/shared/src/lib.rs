//! Shared types, errors, and configuration for Tender.
//!
//! This crate provides the pieces used across the workspace:
//! - The money error taxonomy
//! - Rounding strategies for fractional minor-unit results
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::MoneyConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::Rounding;
