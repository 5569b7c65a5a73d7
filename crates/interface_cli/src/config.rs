//! CLI configuration

use std::collections::BTreeMap;
use std::path::PathBuf;

use core_kernel::{CoreError, Currency};
use domain_billing::DEFAULT_BILLS_DIR;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Name of the optional configuration file (`bill.toml`, `bill.json`, ...)
pub const CONFIG_FILE: &str = "bill";

/// Prefix of the configuration environment variables
pub const ENV_PREFIX: &str = "BILL";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BillConfig {
    /// Display name of the bill
    pub name: String,
    /// ISO 4217 code, case-insensitive
    pub currency: String,
    /// Directory saved bills are written to
    pub bills_dir: PathBuf,
    /// Tip to set on the bill
    pub tip: Option<Decimal>,
    /// Extra line items, added after the default ones
    pub items: BTreeMap<String, Decimal>,
    /// Whether to save the bill after printing it
    pub save: bool,
    /// Log level
    pub log_level: String,
}

impl Default for BillConfig {
    fn default() -> Self {
        Self {
            name: "mario's bill".to_string(),
            currency: Currency::default().code().to_string(),
            bills_dir: PathBuf::from(DEFAULT_BILLS_DIR),
            tip: None,
            items: BTreeMap::new(),
            save: true,
            log_level: "info".to_string(),
        }
    }
}

impl BillConfig {
    /// Loads configuration from the optional `bill` file, then `BILL_*` environment variables
    pub fn load() -> Result<Self, CoreError> {
        Self::from_file(CONFIG_FILE)
    }

    /// Loads configuration from the named file (if present) and the environment
    pub fn from_file(name: &str) -> Result<Self, CoreError> {
        config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| CoreError::configuration(e.to_string()))
    }

    /// Parses the configured currency code
    pub fn currency(&self) -> Result<Currency, CoreError> {
        Ok(self.currency.parse::<Currency>()?)
    }
}
