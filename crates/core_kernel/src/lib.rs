//! Core Kernel - Foundational types for the office desk
//!
//! This crate provides the building blocks shared by the billing and party domains:
//! - The dirham `Money` amount and `ar-AE` currency formatting
//! - Defensive coercion of monetary values arriving as untrusted JSON
//! - Calendar helpers: clocks, display timezones, Arabic long dates
//! - The Arabic label catalog (Fluent)
//! - Integer identifiers assigned by the backend
//! - The error type shared by every data access port

pub mod money;
pub mod calendar;
pub mod identifiers;
pub mod labels;
pub mod ports;
pub mod error;

pub use money::{
    format_currency, format_currency_default, format_currency_str, Currency, CurrencyFormatError,
    Money, RawAmount,
};
pub use calendar::{
    arabic_long_date, format_arabic_date, format_iso_date, parse_timestamp, to_arabic_digits, Clock,
    DateFormatError, FixedClock, SystemClock, Timezone,
};
pub use labels::Labels;
pub use identifiers::{ClientId, EmployeeId, OfficeId, ReceiptId, ServiceId};
pub use ports::{DomainPort, PortError};
pub use error::CoreError;
