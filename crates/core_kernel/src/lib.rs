//! Core Kernel - Foundational types for the bill ledger
//!
//! This crate provides the building blocks used by the billing domain:
//! - Money types with precise decimal arithmetic
//! - Currency codes and symbols
//! - Common error types

pub mod money;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use error::CoreError;
