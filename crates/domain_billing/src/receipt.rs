//! Receipts
//!
//! A receipt records one payment made against a service. Receipts arrive
//! from the backend already joined with the client, service and employee
//! names; the core treats them as immutable snapshots.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ClientId, EmployeeId, RawAmount, ReceiptId, ServiceId};

/// A payment record as listed on the invoices screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Backend key, also the serial printed on invoices
    pub receipt_id: ReceiptId,
    /// Service the payment was made against
    pub service_id: ServiceId,
    /// Client who received the service
    pub client_id: ClientId,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub service_name: String,
    /// Amount paid, verbatim from the transport layer
    #[serde(rename = "service_paid_amount", default)]
    pub paid_amount: RawAmount,
    /// Employee who recorded the payment
    #[serde(default)]
    pub employee_id: Option<EmployeeId>,
    #[serde(rename = "full_name", default)]
    pub employee_name: String,
    /// Creation timestamp as sent by the backend
    #[serde(default)]
    pub created_at: String,
}

impl Receipt {
    /// Creates a receipt with empty display names
    ///
    /// # Arguments
    ///
    /// * `receipt_id` - Backend key of the receipt
    /// * `service_id` - Service being paid
    /// * `client_id` - Paying client
    /// * `paid_amount` - Amount in dirhams, in any transport shape
    pub fn new(
        receipt_id: ReceiptId,
        service_id: ServiceId,
        client_id: ClientId,
        paid_amount: impl Into<RawAmount>,
    ) -> Self {
        Self {
            receipt_id,
            service_id,
            client_id,
            client_name: String::new(),
            service_name: String::new(),
            paid_amount: paid_amount.into(),
            employee_id: None,
            employee_name: String::new(),
            created_at: String::new(),
        }
    }

    /// Sets the client display name
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = name.into();
        self
    }

    /// Sets the service display name
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Sets the recording employee
    pub fn with_employee(mut self, id: EmployeeId, full_name: impl Into<String>) -> Self {
        self.employee_id = Some(id);
        self.employee_name = full_name.into();
        self
    }

    /// Sets the creation timestamp
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    /// Returns the paid amount after defensive coercion (see [`RawAmount::coerce`])
    pub fn paid_amount(&self) -> Decimal {
        self.paid_amount.coerce()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserializes_backend_row() {
        let json = r#"{
            "selected": false,
            "receipt_id": 9,
            "client_id": 3,
            "client_name": "أحمد",
            "service_id": 4,
            "service_name": "تجديد إقامة",
            "service_paid_amount": "250.00",
            "employee_id": 2,
            "full_name": "سارة علي",
            "created_at": "2024-01-05T10:00:00.000Z"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.receipt_id, ReceiptId::new(9));
        assert_eq!(receipt.service_id, ServiceId::new(4));
        assert_eq!(receipt.employee_name, "سارة علي");
        assert_eq!(receipt.paid_amount(), dec!(250.00));
    }

    #[test]
    fn test_missing_amount_reads_as_zero() {
        let json = r#"{ "receipt_id": 1, "service_id": 1, "client_id": 1 }"#;
        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert!(receipt.paid_amount.is_missing());
        assert_eq!(receipt.paid_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_builder() {
        let receipt = Receipt::new(ReceiptId::new(1), ServiceId::new(2), ClientId::new(3), 100)
            .with_client_name("Client")
            .with_service_name("Visa")
            .with_employee(EmployeeId::new(5), "Employee")
            .with_created_at("2024-01-05");

        assert_eq!(receipt.client_name, "Client");
        assert_eq!(receipt.employee_id, Some(EmployeeId::new(5)));
        assert_eq!(receipt.paid_amount(), dec!(100));
    }
}
