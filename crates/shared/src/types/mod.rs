//! Common types used across the workspace.

pub mod rounding;

pub use rounding::Rounding;
