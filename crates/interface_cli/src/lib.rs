//! Bill CLI
//!
//! Builds one bill from configuration, prints its breakdown and optionally
//! saves it. A failed save is reported as an error rather than a panic.

pub mod config;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use domain_billing::{Bill, FileBillStore};

pub use config::BillConfig;

/// Builds the bill described by `config`
///
/// Configured items are added on top of the default ones, in label order.
pub fn build_bill(config: &BillConfig) -> anyhow::Result<Bill> {
    let currency = config.currency()?;
    let mut bill = Bill::with_currency(config.name.as_str(), currency)
        .with_context(|| format!("cannot create bill {:?}", config.name))?;

    for (label, price) in &config.items {
        bill.add_item(label.as_str(), *price)
            .with_context(|| format!("cannot add item {label:?}"))?;
    }

    if let Some(tip) = config.tip {
        bill.update_tip(tip).context("cannot set tip")?;
    }

    Ok(bill)
}

/// Builds the bill, writes its breakdown to `out` and saves it if configured
///
/// Returns the path the bill was saved to, if it was saved.
pub fn run(config: &BillConfig, out: &mut impl Write) -> anyhow::Result<Option<PathBuf>> {
    let bill = build_bill(config)?;

    writeln!(out, "{}", bill.format())?;

    if !config.save {
        tracing::debug!(bill = %bill.name(), "Save disabled");
        return Ok(None);
    }

    let store = FileBillStore::new(&config.bills_dir);
    let path = bill.save(&store)?;
    writeln!(out, "Bill saved to file")?;

    Ok(Some(path))
}

/// Runs the bill and logs a failure exactly once
///
/// Returns whether the run succeeded; the caller maps it to an exit code.
pub fn run_and_report(config: &BillConfig, out: &mut impl Write) -> bool {
    match run(config, out) {
        Ok(_) => true,
        Err(e) => {
            tracing::error!(bill = %config.name, error = %format!("{e:#}"), "Bill run failed");
            false
        }
    }
}
