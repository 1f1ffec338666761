//! Party Domain - Employees, Customers and Sessions
//!
//! This crate covers the people the office desk deals with:
//!
//! - **Employees** with a [`Role`] (admin, employee, accountant, representative)
//! - **Customers**, each owned by the employee who registered them
//! - **Sessions**: the signed-in employee, parsed from the stored login blob
//!   and held in an explicit [`SessionContext`]
//!
//! Visibility follows one rule: admins see every record, everyone else sees
//! the records they own.
//!
//! # Examples
//!
//! ```rust
//! use core_kernel::EmployeeId;
//! use domain_party::SessionContext;
//!
//! let mut context = SessionContext::new();
//! let session = context
//!     .sign_in(r#"{"id":"7","full_name":"Huda"}"#)
//!     .unwrap();
//!
//! assert!(session.can_view(EmployeeId::new(7)));
//! assert!(!session.can_view(EmployeeId::new(8)));
//! ```

pub mod employee;
pub mod customer;
pub mod session;
pub mod ports;
pub mod error;

pub use employee::{representative_candidates, Employee, Role};
pub use customer::Customer;
pub use session::{DashboardSection, EmployeeSession, SessionContext};
pub use ports::{CustomerPort, EmployeePort};
pub use error::PartyError;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{MockCustomerPort, MockEmployeePort};
