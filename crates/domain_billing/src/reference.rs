//! Invoice reference numbers
//!
//! A reference number identifies a printed invoice:
//! `INV-{service ids}-{receipt ids}-{YYYY-MM-DD}`. Each id side is either a
//! single id or an ordered list joined with `-`, and the date is the local
//! calendar day on which the invoice is generated.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{Clock, ReceiptId, ServiceId};

use crate::receipt::Receipt;

const PREFIX: &str = "INV";

/// One side of a reference number: a single id or an ordered list of ids
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdSet {
    One(i64),
    Many(Vec<i64>),
}

impl IdSet {
    /// Ids in order
    pub fn ids(&self) -> &[i64] {
        match self {
            IdSet::One(id) => std::slice::from_ref(id),
            IdSet::Many(ids) => ids,
        }
    }

    /// Returns true for an empty list (a single id is never empty)
    pub fn is_empty(&self) -> bool {
        self.ids().is_empty()
    }

    fn joined(&self) -> String {
        self.ids()
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join("-")
    }
}

macro_rules! id_set_from {
    ($($ty:ty => $widen:expr),* $(,)?) => {
        $(
            impl From<$ty> for IdSet {
                fn from(id: $ty) -> Self {
                    IdSet::One($widen(id))
                }
            }

            impl From<Vec<$ty>> for IdSet {
                fn from(ids: Vec<$ty>) -> Self {
                    IdSet::Many(ids.into_iter().map($widen).collect())
                }
            }

            impl From<&[$ty]> for IdSet {
                fn from(ids: &[$ty]) -> Self {
                    IdSet::Many(ids.iter().copied().map($widen).collect())
                }
            }

            impl<const N: usize> From<[$ty; N]> for IdSet {
                fn from(ids: [$ty; N]) -> Self {
                    IdSet::Many(ids.into_iter().map($widen).collect())
                }
            }
        )*
    };
}

id_set_from! {
    i64 => |id: i64| id,
    i32 => i64::from,
    ServiceId => |id: ServiceId| id.value(),
    ReceiptId => |id: ReceiptId| id.value(),
}

/// A generated invoice reference number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceNumber(String);

impl ReferenceNumber {
    /// Builds the reference for an ordered receipt selection
    ///
    /// Service ids and receipt ids are both taken in selection order, so a
    /// service paid in two receipts appears twice.
    pub fn for_receipts<'a>(
        receipts: impl IntoIterator<Item = &'a Receipt>,
        today: NaiveDate,
    ) -> Self {
        let (service_ids, receipt_ids): (Vec<ServiceId>, Vec<ReceiptId>) = receipts
            .into_iter()
            .map(|r| (r.service_id, r.receipt_id))
            .unzip();
        build_reference_number(service_ids, receipt_ids, today)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The generation day embedded at the end of the reference
    pub fn issued_on(&self) -> Option<NaiveDate> {
        let start = self.0.len().checked_sub(10)?;
        let tail = self.0.get(start..)?;
        NaiveDate::parse_from_str(tail, "%Y-%m-%d").ok()
    }
}

impl fmt::Display for ReferenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ReferenceNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Builds an invoice reference number
///
/// # Arguments
///
/// * `service_ids` - One service id or an ordered list of them
/// * `receipt_ids` - One receipt id or an ordered list of them
/// * `today` - Local calendar day of generation
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use domain_billing::build_reference_number;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// let reference = build_reference_number(vec![1_i64, 2], vec![10_i64, 11], day);
/// assert_eq!(reference.as_str(), "INV-1-2-10-11-2024-01-05");
/// ```
pub fn build_reference_number(
    service_ids: impl Into<IdSet>,
    receipt_ids: impl Into<IdSet>,
    today: NaiveDate,
) -> ReferenceNumber {
    let services = service_ids.into();
    let receipts = receipt_ids.into();
    ReferenceNumber(format!(
        "{PREFIX}-{}-{}-{}",
        services.joined(),
        receipts.joined(),
        today.format("%Y-%m-%d")
    ))
}

/// Builds a reference number dated with the clock's current local day
pub fn build_reference_number_now(
    service_ids: impl Into<IdSet>,
    receipt_ids: impl Into<IdSet>,
    clock: &dyn Clock,
) -> ReferenceNumber {
    build_reference_number(service_ids, receipt_ids, clock.today())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{ClientId, FixedClock, Timezone};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_scalar_ids() {
        let reference = build_reference_number(3, 7, day(2024, 3, 9));
        assert_eq!(reference.as_str(), "INV-3-7-2024-03-09");
    }

    #[test]
    fn test_mixed_scalar_and_list() {
        let reference = build_reference_number(ServiceId::new(4), [ReceiptId::new(8), ReceiptId::new(9)], day(2024, 1, 5));
        assert_eq!(reference.to_string(), "INV-4-8-9-2024-01-05");
    }

    #[test]
    fn test_empty_lists_leave_empty_segments() {
        let reference = build_reference_number(Vec::<i64>::new(), Vec::<i64>::new(), day(2024, 1, 5));
        assert_eq!(reference.as_str(), "INV---2024-01-05");
    }

    #[test]
    fn test_issued_on_reads_trailing_date() {
        let reference = build_reference_number(1, 2, day(2023, 12, 31));
        assert_eq!(reference.issued_on(), Some(day(2023, 12, 31)));
    }

    #[test]
    fn test_now_uses_local_day() {
        let clock = FixedClock::on(day(2024, 6, 1), Timezone::default());
        let reference = build_reference_number_now(1, 2, &clock);
        assert_eq!(reference.as_str(), "INV-1-2-2024-06-01");
    }

    #[test]
    fn test_for_receipts_keeps_selection_order() {
        let receipts = vec![
            Receipt::new(ReceiptId::new(11), ServiceId::new(2), ClientId::new(1), 10),
            Receipt::new(ReceiptId::new(10), ServiceId::new(1), ClientId::new(1), 10),
        ];
        let reference = ReferenceNumber::for_receipts(&receipts, day(2024, 1, 5));
        assert_eq!(reference.as_str(), "INV-2-1-11-10-2024-01-05");
    }
}
