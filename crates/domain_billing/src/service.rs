//! Services and their payment status
//!
//! A service is a unit of billable work done for a client. Its payment
//! status is never trusted from storage: it is recomputed from the attached
//! receipts on every read.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use core_kernel::{ClientId, EmployeeId, Labels, RawAmount, ServiceId};

use crate::aggregate::{derive_payment_status, sum_paid};
use crate::error::BillingError;
use crate::receipt::Receipt;

/// Payment status of a service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    /// Receipts cover the full price
    Paid,
    /// Some, but not all, of the price has been paid
    PartiallyPaid,
    /// Nothing has been paid
    Unpaid,
}

impl PaymentStatus {
    /// Wire value (`paid`, `partially-paid`, `unpaid`)
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::PartiallyPaid => "partially-paid",
            PaymentStatus::Unpaid => "unpaid",
        }
    }

    /// Label id in the Arabic catalog
    pub fn label_id(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "payment-status-paid",
            PaymentStatus::PartiallyPaid => "payment-status-partially-paid",
            PaymentStatus::Unpaid => "payment-status-unpaid",
        }
    }

    /// Arabic label as shown in the services list
    pub fn label(&self, labels: &Labels) -> String {
        labels.get(self.label_id())
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A billable service with its receipts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    /// Employee who registered the service
    pub employee_id: EmployeeId,
    /// Assigned representative; `0` or `null` from the backend means none
    #[serde(default)]
    pub representative_id: Option<EmployeeId>,
    pub client_id: ClientId,
    #[serde(default)]
    pub service_name: String,
    /// Total price, verbatim from the transport layer
    #[serde(rename = "service_total_price", default)]
    pub total_price: RawAmount,
    /// Status as last stored by the backend; informational only
    #[serde(
        rename = "service_payment_status",
        default,
        deserialize_with = "lenient_status"
    )]
    pub stored_status: Option<PaymentStatus>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub ends_at: Option<String>,
    #[serde(default)]
    pub service_details: Option<String>,
    /// Receipts in backend order
    #[serde(default)]
    pub receipts: Vec<Receipt>,
}

impl Service {
    /// Creates a service with no receipts
    pub fn new(
        id: ServiceId,
        employee_id: EmployeeId,
        client_id: ClientId,
        service_name: impl Into<String>,
        total_price: impl Into<RawAmount>,
    ) -> Self {
        Self {
            id,
            employee_id,
            representative_id: None,
            client_id,
            service_name: service_name.into(),
            total_price: total_price.into(),
            stored_status: None,
            created_at: String::new(),
            ends_at: None,
            service_details: None,
            receipts: Vec::new(),
        }
    }

    /// Attaches the service's receipts
    pub fn with_receipts(mut self, receipts: Vec<Receipt>) -> Self {
        self.receipts = receipts;
        self
    }

    /// Assigns a representative
    pub fn with_representative(mut self, representative_id: EmployeeId) -> Self {
        self.representative_id = Some(representative_id);
        self
    }

    /// Returns the representative, treating id `0` as unassigned
    pub fn representative(&self) -> Option<EmployeeId> {
        self.representative_id.filter(|id| id.value() != 0)
    }

    /// Total price after defensive coercion
    pub fn total_price(&self) -> Decimal {
        self.total_price.coerce()
    }

    /// Sum of all receipts (zero when there are none)
    pub fn paid_amount(&self) -> Decimal {
        sum_paid(&self.receipts)
    }

    /// Sum of all receipts, or `None` when the service has no receipts
    pub fn paid_total(&self) -> Option<Decimal> {
        if self.receipts.is_empty() {
            None
        } else {
            Some(self.paid_amount())
        }
    }

    /// Payment status recomputed from the receipts
    pub fn payment_status(&self) -> PaymentStatus {
        derive_payment_status(self.total_price(), self.paid_amount())
    }

    /// Returns true when the stored status disagrees with the receipts
    pub fn has_stale_status(&self) -> bool {
        self.stored_status
            .is_some_and(|stored| stored != self.payment_status())
    }

    /// Amount still owed, never negative
    pub fn balance_due(&self) -> Decimal {
        self
            .total_price()
            .saturating_sub(self.paid_amount())
            .max(Decimal::ZERO)
    }

    /// Checks a new payment entered on the edit form
    ///
    /// # Errors
    ///
    /// - `BillingError::InvalidPayment` if the amount is zero or negative
    /// - `BillingError::Overpayment` if it exceeds the balance due
    pub fn validate_new_payment(&self, amount: Decimal) -> Result<(), BillingError> {
        if amount <= Decimal::ZERO {
            return Err(BillingError::InvalidPayment(format!(
                "amount must be positive, got {amount}"
            )));
        }

        let balance_due = self.balance_due();
        if amount > balance_due {
            return Err(BillingError::Overpayment {
                amount,
                balance_due,
            });
        }
        Ok(())
    }
}

/// Reads a stored status, treating unknown or empty values as absent
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<PaymentStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value.as_str() {
        "paid" => Some(PaymentStatus::Paid),
        "partially-paid" => Some(PaymentStatus::PartiallyPaid),
        "unpaid" => Some(PaymentStatus::Unpaid),
        other => {
            tracing::debug!(status = other, "ignoring unknown stored payment status");
            None
        }
    }))
}
