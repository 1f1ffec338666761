//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! office desk test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built receipts, services, office and staff records
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for formatted output
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
