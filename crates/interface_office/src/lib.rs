//! Office Desk Interface Layer
//!
//! This crate wires the billing and party domains to the outside world.
//!
//! # Architecture
//!
//! - **Config**: `OFFICE_*` environment configuration
//! - **Directory**: joins customers, services, receipts and employee names
//! - **Invoices**: the invoices screen state and printing
//! - **File store**: JSON exports served through the data access ports
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_office::{InvoicesScreen, OfficeDirectory};
//!
//! let directory = OfficeDirectory::new(ports, &labels);
//! let mut screen = InvoicesScreen::load(&directory, customer_id).await?;
//! screen.toggle_all(true);
//! println!("{}", screen.print(&clock, &labels)?);
//! ```

pub mod config;
pub mod error;
pub mod directory;
pub mod invoices;
pub mod file_store;

pub use config::AppConfig;
pub use error::OfficeError;
pub use directory::{CustomerEntry, OfficeDirectory, OfficePorts, ServiceEntry};
pub use invoices::{InvoicesScreen, ReceiptListRow};
pub use file_store::JsonFileStore;
