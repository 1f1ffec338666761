//! Office Desk - Invoice Printing Binary
//!
//! Prints one consolidated invoice from exported receipts.
//!
//! # Usage
//!
//! ```bash
//! OFFICE_RECEIPTS_FILE=receipts.json OFFICE_DETAILS_FILE=office.json cargo run --bin office-invoice
//!
//! # Only some receipts
//! OFFICE_SELECT=10,12 OFFICE_RECEIPTS_FILE=receipts.json OFFICE_DETAILS_FILE=office.json \
//!     cargo run --bin office-invoice
//! ```
//!
//! # Environment Variables
//!
//! * `OFFICE_RECEIPTS_FILE` - JSON array of receipts (required)
//! * `OFFICE_DETAILS_FILE` - JSON office record or array of records (required)
//! * `OFFICE_SELECT` - Comma-separated receipt ids (default: all receipts)
//! * `OFFICE_TIMEZONE` - IANA timezone for dates (default: Asia/Dubai)
//! * `OFFICE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::{Labels, SystemClock};
use domain_billing::{OfficePort, ReceiptPort};
use interface_office::{AppConfig, InvoicesScreen, JsonFileStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("failed to load OFFICE_* configuration")?;

    init_tracing(&config.log_level);

    let timezone = config
        .timezone()
        .with_context(|| format!("unknown timezone {:?}", config.timezone))?;
    let selected = config.selected_ids()?;

    let (Some(receipts_file), Some(details_file)) = (&config.receipts_file, &config.details_file)
    else {
        bail!("OFFICE_RECEIPTS_FILE and OFFICE_DETAILS_FILE must both be set");
    };

    tracing::info!(
        receipts = %receipts_file.display(),
        details = %details_file.display(),
        timezone = timezone.name(),
        "Printing invoice"
    );

    let store = JsonFileStore::new(Some(receipts_file.clone()), Some(details_file.clone()));
    let receipts = store
        .list_receipts()
        .await
        .context("failed to load receipts")?;
    let office = store
        .list_office_details()
        .await
        .context("failed to load office details")?
        .into_iter()
        .next()
        .context("office details file has no records")?;
    office.check()?;

    let mut screen = InvoicesScreen::new(receipts, Some(office));
    match selected {
        Some(ids) => {
            let count = screen.select_only(&ids);
            tracing::debug!(requested = ids.len(), selected = count, "applied selection");
        }
        None => screen.toggle_all(true),
    }

    let labels = Labels::arabic()?;
    let clock = SystemClock::new(timezone);
    let text = screen
        .print(&clock, &labels)
        .context("failed to compose invoice")?;

    println!("{text}");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so the invoice on stdout stays clean.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
