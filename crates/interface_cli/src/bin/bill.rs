//! Bill CLI binary
//!
//! Builds a bill, prints its breakdown to standard output and saves it
//! under the bills directory.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin bill
//!
//! # Run with environment variables
//! BILL_NAME="luigi's bill" BILL_TIP=3.00 BILL_BILLS_DIR=/tmp/bills cargo run --bin bill
//! ```
//!
//! # Environment Variables
//!
//! * `BILL_NAME` - Display name of the bill (default: mario's bill)
//! * `BILL_CURRENCY` - ISO 4217 code: USD, EUR, GBP, JPY (default: USD)
//! * `BILL_BILLS_DIR` - Directory saved bills go to; must already exist (default: bills)
//! * `BILL_TIP` - Tip amount (default: none)
//! * `BILL_SAVE` - Whether to save after printing (default: true)
//! * `BILL_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//!
//! Extra line items can be listed in an `[items]` table of `bill.toml`.

use std::io;
use std::process::ExitCode;

use interface_cli::{run_and_report, BillConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let loaded = BillConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_tracing(&config.log_level);

    if let Err(e) = &loaded {
        tracing::warn!(error = %e, "Invalid configuration, using defaults");
    }

    tracing::debug!(
        bill = %config.name,
        bills_dir = %config.bills_dir.display(),
        save = config.save,
        "Starting bill"
    );

    let stdout = io::stdout();
    if run_and_report(&config, &mut stdout.lock()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so the printed bill on stdout stays clean. `RUST_LOG`
/// takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .init();
}
