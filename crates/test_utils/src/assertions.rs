//! Custom Test Assertions
//!
//! Provides assertion helpers for formatted output that give more
//! meaningful failure messages than comparing raw strings with bidi marks.

use domain_billing::{PaymentStatus, SelectionSet, Service};

const RLM: char = '\u{200F}';
const NBSP: char = '\u{00A0}';

/// Wraps a grouped number the way `format_currency` renders dirhams
pub fn aed(number: &str) -> String {
    format!("{RLM}{number}{NBSP}د.إ.{RLM}")
}

/// Asserts that `formatted` is the dirham rendering of `number`
///
/// # Panics
///
/// Panics with the visible difference when the strings differ
pub fn assert_aed(formatted: &str, number: &str) {
    let expected = aed(number);
    assert_eq!(
        formatted,
        expected,
        "Currency mismatch: actual={:?}, expected={:?}",
        formatted.escape_unicode().to_string(),
        expected.escape_unicode().to_string()
    );
}

/// Asserts that a service's recomputed status is `expected`
pub fn assert_status(service: &Service, expected: PaymentStatus) {
    assert_eq!(
        service.payment_status(),
        expected,
        "Service {} has total {} and paid {}",
        service.id,
        service.total_price(),
        service.paid_amount()
    );
}

/// Asserts that exactly `ids` are selected, in list order
pub fn assert_selected(selection: &SelectionSet, ids: &[i64]) {
    let selected: Vec<i64> = selection
        .selected_receipts()
        .iter()
        .map(|r| r.receipt_id.value())
        .collect();
    assert_eq!(selected, ids, "Unexpected selection");
}

/// Asserts that a string contains only Arabic-Indic digits
pub fn assert_arabic_digits(text: &str) {
    assert!(
        !text.chars().any(|c| c.is_ascii_digit()),
        "Expected Arabic-Indic digits only, got {text:?}"
    );
}
