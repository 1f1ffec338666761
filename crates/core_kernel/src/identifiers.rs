//! Strongly-typed identifiers for backend records
//!
//! The backend assigns plain integer keys. Newtype wrappers keep a receipt id
//! from being passed where a service id is expected while still displaying
//! as the bare number, which is what reference numbers and tables print.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw backend key
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Returns the entity label used in log fields and errors
            pub fn label() -> &'static str {
                $label
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(ReceiptId, "Receipt");
define_id!(ServiceId, "Service");
define_id!(ClientId, "Customer");
define_id!(EmployeeId, "Employee");
define_id!(OfficeId, "Office");
