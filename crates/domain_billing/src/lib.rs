//! Billing Domain - Receipts, Payment Status and Consolidated Invoices
//!
//! This crate implements the billing side of the office desk: what has been
//! paid against each service, and how a customer's receipts are printed.
//!
//! # Concepts
//!
//! - **Receipt**: one payment made against a service
//! - **Service**: billable work for a customer; its payment status is always
//!   recomputed from its receipts
//! - **Selection set**: the receipts ticked on the invoices screen
//! - **Reference number**: `INV-{service ids}-{receipt ids}-{YYYY-MM-DD}`
//! - **Invoice document**: letterhead, reference, rows and total for a selection
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{InvoiceDocument, SelectionSet};
//!
//! let mut selection = SelectionSet::new(receipts);
//! selection.toggle_all(true);
//!
//! let invoice = InvoiceDocument::from_selection(&office, &selection, &clock)?;
//! println!("{}", invoice.render_text(&labels));
//! ```

pub mod receipt;
pub mod service;
pub mod aggregate;
pub mod reference;
pub mod selection;
pub mod office;
pub mod invoice;
pub mod ports;
pub mod error;

pub use receipt::Receipt;
pub use service::{PaymentStatus, Service};
pub use aggregate::{derive_payment_status, sum_paid, total_paid, PaymentStatusOptions};
pub use reference::{build_reference_number, build_reference_number_now, IdSet, ReferenceNumber};
pub use selection::SelectionSet;
pub use office::OfficeDetails;
pub use invoice::{InvoiceDocument, InvoiceRow, Letterhead};
pub use ports::{OfficePort, ReceiptPort, ServicePort};
pub use error::BillingError;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{MockOfficePort, MockReceiptPort, MockServicePort};
