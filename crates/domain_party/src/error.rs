//! Party domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the party domain
#[derive(Debug, Error)]
pub enum PartyError {
    /// The stored session blob could not be read
    #[error("Invalid session data: {0}")]
    InvalidSession(String),

    /// An operation needs a signed-in employee
    #[error("No employee is signed in")]
    NotSignedIn,

    /// Unknown role name
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Customer record failed validation
    #[error("Invalid customer data: {0}")]
    InvalidCustomer(String),

    /// The data access layer failed
    #[error(transparent)]
    Port(#[from] PortError),
}

impl PartyError {
    /// Creates an InvalidSession error
    pub fn invalid_session(message: impl Into<String>) -> Self {
        PartyError::InvalidSession(message.into())
    }
}
