//! Office shell error handling

use thiserror::Error;

use core_kernel::{CoreError, PortError};
use domain_billing::BillingError;
use domain_party::PartyError;

/// Errors surfaced by the office screens and the invoice binary
#[derive(Debug, Error)]
pub enum OfficeError {
    #[error("Data access error: {0}")]
    Port(#[from] PortError),

    #[error("Billing error: {0}")]
    Billing(#[from] BillingError),

    #[error("Party error: {0}")]
    Party(#[from] PartyError),

    #[error("Kernel error: {0}")]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Selection error: {0}")]
    Selection(String),
}

impl From<config::ConfigError> for OfficeError {
    fn from(err: config::ConfigError) -> Self {
        OfficeError::Config(err.to_string())
    }
}
