//! Receipt aggregation and payment-status derivation
//!
//! Every place that needs "how much has been paid" or "is this service
//! paid" goes through this module: the services list, the service edit
//! form, and invoice totals.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::receipt::Receipt;
use crate::service::{PaymentStatus, Service};

/// Sums the paid amounts of `receipts`.
///
/// Each amount goes through [`core_kernel::RawAmount::coerce`]: strings are
/// parsed, and non-numeric, negative or missing amounts count as zero (with
/// a warning logged for the invalid ones). An empty slice sums to zero. The
/// sum saturates instead of overflowing.
pub fn sum_paid(receipts: &[Receipt]) -> Decimal {
    total_paid(receipts)
}

/// [`sum_paid`] over any sequence of borrowed receipts
pub fn total_paid<'a>(receipts: impl IntoIterator<Item = &'a Receipt>) -> Decimal {
    receipts
        .into_iter()
        .fold(Decimal::ZERO, |acc, receipt| acc.saturating_add(receipt.paid_amount()))
}

/// Derives the payment status from a service total and the amount paid.
///
/// - `paid >= total` is [`PaymentStatus::Paid`] (a zero-priced service is paid)
/// - `0 < paid < total` is [`PaymentStatus::PartiallyPaid`]
/// - otherwise [`PaymentStatus::Unpaid`]
pub fn derive_payment_status(total: Decimal, paid: Decimal) -> PaymentStatus {
    if paid >= total {
        PaymentStatus::Paid
    } else if paid > Decimal::ZERO {
        PaymentStatus::PartiallyPaid
    } else {
        PaymentStatus::Unpaid
    }
}

/// State of the payment-status radio group on the service edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentStatusOptions {
    /// The pre-selected status
    pub selected: PaymentStatus,
    pub unpaid_enabled: bool,
    pub partially_paid_enabled: bool,
    /// Whether the "new paid amount" input is shown
    pub shows_amount_input: bool,
}

impl PaymentStatusOptions {
    /// Derives the radio group for a service.
    ///
    /// Once the receipts cover the full price only "paid" can be chosen.
    pub fn for_service(service: &Service) -> Self {
        let selected = service.payment_status();
        let fully_paid = selected == PaymentStatus::Paid;
        Self {
            selected,
            unpaid_enabled: !fully_paid,
            partially_paid_enabled: !fully_paid,
            shows_amount_input: selected == PaymentStatus::PartiallyPaid,
        }
    }

    /// Applies a user choice; disabled choices are ignored
    pub fn choose(self, status: PaymentStatus) -> Self {
        let allowed = match status {
            PaymentStatus::Paid => true,
            PaymentStatus::PartiallyPaid => self.partially_paid_enabled,
            PaymentStatus::Unpaid => self.unpaid_enabled,
        };
        if !allowed {
            return self;
        }
        Self {
            selected: status,
            shows_amount_input: status == PaymentStatus::PartiallyPaid,
            ..self
        }
    }
}
