//! The bill ledger
//!
//! A `Bill` is exclusively owned by whoever created it. Mutations go through
//! `&mut self` and are validated before anything changes, so a rejected
//! call leaves the bill exactly as it was. Rendering and saving only borrow.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use core_kernel::{Currency, Money};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, error, info, warn};

use crate::error::BillingError;
use crate::storage::{sanitize_storage_key, BillStore, FileBillStore};

/// Items every new bill starts with
pub const DEFAULT_ITEMS: [(&str, Decimal); 2] = [("pie", dec!(5.99)), ("cake", dec!(3.99))];

/// Column the `...` of each report line is aligned to
const LABEL_WIDTH: usize = 25;

/// A single bill: named line items plus a tip
///
/// # Invariants
///
/// - `total` is always the sum of `items`; the tip is not included
/// - No amount is negative
/// - `key` is the sanitized form of `name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bill {
    name: String,
    key: String,
    currency: Currency,
    /// Ordered by label so the report is reproducible
    items: BTreeMap<String, Money>,
    tip: Money,
    total: Money,
}

impl Bill {
    /// Creates a USD bill seeded with [`DEFAULT_ITEMS`] and no tip
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` if the name is blank or has nothing usable as
    /// a file name.
    pub fn new(name: impl Into<String>) -> Result<Self, BillingError> {
        Self::with_currency(name, Currency::USD)
    }

    /// Creates a bill in the given currency
    pub fn with_currency(name: impl Into<String>, currency: Currency) -> Result<Self, BillingError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BillingError::InvalidName(name));
        }
        let key = sanitize_storage_key(&name)?;

        let items: BTreeMap<String, Money> = DEFAULT_ITEMS
            .iter()
            .map(|(label, price)| (label.to_string(), Money::new(*price, currency)))
            .collect();
        let total = Money::checked_sum(currency, items.values())?;

        debug!(bill = %name, %key, %currency, "Created bill");

        Ok(Self {
            name,
            key,
            currency,
            items,
            tip: Money::zero(currency),
            total,
        })
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the key the bill is stored under
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the line items in label order
    pub fn items(&self) -> &BTreeMap<String, Money> {
        &self.items
    }

    /// Returns the price of one item
    pub fn item(&self, label: &str) -> Option<Money> {
        self.items.get(label).copied()
    }

    pub fn tip(&self) -> Money {
        self.tip
    }

    /// Sum of all item prices, excluding the tip
    pub fn total(&self) -> Money {
        self.total
    }

    /// Adds an item, replacing the price if the label is already on the bill
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `price` is negative
    /// - `Money` if the new total would overflow
    pub fn add_item(&mut self, label: impl Into<String>, price: Decimal) -> Result<(), BillingError> {
        let label = label.into();
        let price = self.validated(&label, price)?;

        let others = self
            .items
            .iter()
            .filter(|(existing, _)| **existing != label)
            .map(|(_, money)| money);
        let total = Money::checked_sum(self.currency, others)?.checked_add(&price)?;

        debug!(bill = %self.name, item = %label, price = %price.plain(), "Item added");
        self.items.insert(label, price);
        self.total = total;
        Ok(())
    }

    /// Replaces the tip
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if `tip` is negative.
    pub fn update_tip(&mut self, tip: Decimal) -> Result<(), BillingError> {
        let tip = self.validated("tip", tip)?;

        debug!(bill = %self.name, tip = %tip.plain(), "Tip updated");
        self.tip = tip;
        Ok(())
    }

    /// Renders the bill breakdown
    ///
    /// One line per item in label order, then the tip, then the total with
    /// the currency's fixed decimal places. There is no trailing newline.
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Writes the rendered bill to `store` under [`Bill::storage_key`]
    ///
    /// Saving can be repeated; each save replaces the previous file. A
    /// failed save leaves the bill untouched so it can be retried.
    ///
    /// # Errors
    ///
    /// Returns `Io` naming the bill if the write fails.
    pub fn save(&self, store: &dyn BillStore) -> Result<PathBuf, BillingError> {
        let contents = self.format();

        let path = store.write(&self.key, &contents).map_err(|source| {
            error!(bill = %self.name, error = %source, "Failed to save bill");
            BillingError::Io {
                bill: self.name.clone(),
                source,
            }
        })?;

        info!(bill = %self.name, path = %path.display(), "Bill saved");
        Ok(path)
    }

    /// Saves into `dir` as `<dir>/<storage key>.txt`
    pub fn save_to(&self, dir: impl Into<PathBuf>) -> Result<PathBuf, BillingError> {
        self.save(&FileBillStore::new(dir))
    }

    fn validated(&self, field: &str, amount: Decimal) -> Result<Money, BillingError> {
        let money = Money::new(amount, self.currency);
        if money.is_negative() {
            warn!(bill = %self.name, field, %amount, "Rejected negative amount");
            return Err(BillingError::InvalidAmount {
                field: field.to_string(),
                amount,
            });
        }
        Ok(money)
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.currency.symbol();

        writeln!(f, "Bill breakdown:")?;
        for (label, price) in &self.items {
            writeln!(f, "{:<LABEL_WIDTH$} ...{symbol}{}", format!("{label}:"), price.plain())?;
        }
        writeln!(f, "{:<LABEL_WIDTH$} ...{symbol}{}", "tip:", self.tip.plain())?;
        write!(f, "{:<LABEL_WIDTH$} ...{symbol}{}", "total:", self.total.fixed())
    }
}
