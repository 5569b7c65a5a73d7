//! Billing Domain - Bill Ledger
//!
//! This crate implements a single bill: a named set of priced line items
//! plus a tip, rendered as a plain-text breakdown and persisted to a file.
//!
//! # Invariants
//!
//! - Every amount on a bill is non-negative
//! - The rendered total equals the sum of the item prices (the tip is
//!   reported on its own line and is not part of the total)
//! - Rendering is deterministic: items are listed in label order
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::Bill;
//! use rust_decimal_macros::dec;
//!
//! let mut bill = Bill::new("mario's bill")?;
//! bill.add_item("soda", dec!(2.50))?;
//! bill.update_tip(dec!(3.00))?;
//!
//! println!("{}", bill.format());
//! bill.save_to("bills")?;
//! ```

pub mod bill;
pub mod storage;
pub mod error;

pub use bill::{Bill, DEFAULT_ITEMS};
pub use storage::{BillStore, FileBillStore, sanitize_storage_key, DEFAULT_BILLS_DIR};
pub use error::BillingError;
