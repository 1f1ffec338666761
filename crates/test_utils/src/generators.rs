//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! in the shapes the backend actually sends.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use core_kernel::{ClientId, RawAmount, ReceiptId, ServiceId};
use domain_billing::Receipt;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for non-negative amounts with up to two fraction digits
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for transport amounts: numbers, numeric strings, garbage, missing
pub fn raw_amount_strategy() -> impl Strategy<Value = RawAmount> {
    prop_oneof![
        4 => amount_strategy().prop_map(RawAmount::Number),
        3 => amount_strategy().prop_map(|d| RawAmount::Text(d.to_string())),
        1 => "[a-z]{1,6}".prop_map(RawAmount::Text),
        1 => Just(RawAmount::Missing),
    ]
}

/// Strategy for a receipt with a unique-looking id and a random amount
pub fn receipt_strategy() -> impl Strategy<Value = Receipt> {
    (1i64..1_000_000, 1i64..10_000, 1i64..1_000, raw_amount_strategy()).prop_map(
        |(id, service, client, amount)| {
            Receipt::new(ReceiptId::new(id), ServiceId::new(service), ClientId::new(client), amount)
        },
    )
}

/// Strategy for receipt lists with distinct ids, in generation order
pub fn receipts_strategy(max: usize) -> impl Strategy<Value = Vec<Receipt>> {
    proptest::collection::vec(receipt_strategy(), 0..max).prop_map(|receipts| {
        let mut seen = std::collections::HashSet::new();
        receipts
            .into_iter()
            .filter(|r| seen.insert(r.receipt_id))
            .collect()
    })
}

/// Strategy for instants between 1970 and 2100
pub fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800i64).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

/// Strategy for UTC offsets between -12:00 and +14:00 in quarter hours
pub fn offset_strategy() -> impl Strategy<Value = FixedOffset> {
    (-48i32..=56i32).prop_map(|quarters| FixedOffset::east_opt(quarters * 15 * 60).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_raw_amounts_coerce_non_negative(amount in raw_amount_strategy()) {
            prop_assert!(amount.coerce() >= Decimal::ZERO);
        }

        #[test]
        fn test_receipt_ids_are_distinct(receipts in receipts_strategy(20)) {
            let mut ids: Vec<_> = receipts.iter().map(|r| r.receipt_id).collect();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), receipts.len());
        }
    }
}
