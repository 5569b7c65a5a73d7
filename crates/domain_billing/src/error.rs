//! Billing domain errors

use core_kernel::MoneyError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the billing domain
#[derive(Debug, Error)]
pub enum BillingError {
    /// A price or tip below zero
    #[error("Invalid amount for {field}: {amount} (amounts must not be negative)")]
    InvalidAmount {
        field: String,
        amount: Decimal,
    },

    /// Bill name is empty or has no characters usable in a file name
    #[error("Invalid bill name: {0:?}")]
    InvalidName(String),

    /// Writing the rendered bill failed
    #[error("Failed to save bill {bill:?}: {source}")]
    Io {
        bill: String,
        #[source]
        source: std::io::Error,
    },

    /// Calculation error
    #[error("Calculation error: {0}")]
    Money(#[from] MoneyError),
}
