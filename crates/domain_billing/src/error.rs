//! Billing domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::{CurrencyFormatError, DateFormatError};

/// Errors that can occur in the billing domain
#[derive(Debug, Error)]
pub enum BillingError {
    /// Printing was requested with no receipts selected
    #[error("No receipts selected for the invoice")]
    EmptySelection,

    /// A new payment amount is not usable
    #[error("Invalid payment: {0}")]
    InvalidPayment(String),

    /// A new payment would exceed the service's balance due
    #[error("Overpayment: amount={amount}, balance due={balance_due}")]
    Overpayment {
        amount: Decimal,
        balance_due: Decimal,
    },

    /// Office letterhead data failed validation
    #[error("Invalid office details: {0}")]
    InvalidOfficeDetails(String),

    /// A receipt timestamp could not be formatted
    #[error(transparent)]
    DateFormat(#[from] DateFormatError),

    /// An amount could not be formatted
    #[error(transparent)]
    CurrencyFormat(#[from] CurrencyFormatError),
}
