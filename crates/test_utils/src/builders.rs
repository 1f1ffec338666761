//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! Display names are generated with `fake` so tests only spell out the
//! fields they assert on.

use core_kernel::{ClientId, EmployeeId, RawAmount, ReceiptId, ServiceId};
use domain_billing::{Receipt, Service};
use domain_party::{Employee, Role};
use fake::faker::name::en::Name;
use fake::Fake;

use crate::fixtures::CalendarFixtures;

/// Builder for receipts
pub struct TestReceiptBuilder {
    receipt_id: ReceiptId,
    service_id: ServiceId,
    client_id: ClientId,
    client_name: String,
    service_name: String,
    amount: RawAmount,
    employee_id: EmployeeId,
    employee_name: String,
    created_at: String,
}

impl Default for TestReceiptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestReceiptBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            receipt_id: ReceiptId::new(1),
            service_id: ServiceId::new(1),
            client_id: ClientId::new(1),
            client_name: Name().fake(),
            service_name: "Visa renewal".to_string(),
            amount: RawAmount::from(100),
            employee_id: EmployeeId::new(1),
            employee_name: Name().fake(),
            created_at: CalendarFixtures::receipt_timestamp().to_string(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.receipt_id = ReceiptId::new(id);
        self
    }

    pub fn with_service(mut self, id: i64) -> Self {
        self.service_id = ServiceId::new(id);
        self
    }

    pub fn with_client(mut self, id: i64) -> Self {
        self.client_id = ClientId::new(id);
        self
    }

    pub fn with_amount(mut self, amount: impl Into<RawAmount>) -> Self {
        self.amount = amount.into();
        self
    }

    pub fn with_employee(mut self, id: i64, name: impl Into<String>) -> Self {
        self.employee_id = EmployeeId::new(id);
        self.employee_name = name.into();
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    /// Builds the receipt
    pub fn build(self) -> Receipt {
        Receipt::new(self.receipt_id, self.service_id, self.client_id, self.amount)
            .with_client_name(self.client_name)
            .with_service_name(self.service_name)
            .with_employee(self.employee_id, self.employee_name)
            .with_created_at(self.created_at)
    }
}

/// Builder for services
pub struct TestServiceBuilder {
    id: ServiceId,
    employee_id: EmployeeId,
    client_id: ClientId,
    name: String,
    total: RawAmount,
    representative: Option<EmployeeId>,
    paid: Vec<RawAmount>,
}

impl Default for TestServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestServiceBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: ServiceId::new(1),
            employee_id: EmployeeId::new(1),
            client_id: ClientId::new(1),
            name: "Visa renewal".to_string(),
            total: RawAmount::from(1000),
            representative: None,
            paid: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = ServiceId::new(id);
        self
    }

    pub fn with_owner(mut self, id: i64) -> Self {
        self.employee_id = EmployeeId::new(id);
        self
    }

    pub fn with_client(mut self, id: i64) -> Self {
        self.client_id = ClientId::new(id);
        self
    }

    pub fn with_total(mut self, total: impl Into<RawAmount>) -> Self {
        self.total = total.into();
        self
    }

    pub fn with_representative(mut self, id: i64) -> Self {
        self.representative = Some(EmployeeId::new(id));
        self
    }

    /// Adds a receipt paying `amount` against the service
    pub fn with_payment(mut self, amount: impl Into<RawAmount>) -> Self {
        self.paid.push(amount.into());
        self
    }

    /// Builds the service with one receipt per payment, numbered from 1
    pub fn build(self) -> Service {
        let receipts = self
            .paid
            .into_iter()
            .enumerate()
            .map(|(i, amount)| {
                TestReceiptBuilder::new()
                    .with_id(i as i64 + 1)
                    .with_service(self.id.value())
                    .with_client(self.client_id.value())
                    .with_amount(amount)
                    .build()
            })
            .collect();

        let mut service = Service::new(self.id, self.employee_id, self.client_id, self.name, self.total)
            .with_receipts(receipts);
        if let Some(representative) = self.representative {
            service = service.with_representative(representative);
        }
        service
    }
}

/// Builder for employees
pub struct TestEmployeeBuilder {
    id: EmployeeId,
    full_name: String,
    role: Role,
}

impl Default for TestEmployeeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEmployeeBuilder {
    pub fn new() -> Self {
        Self {
            id: EmployeeId::new(1),
            full_name: Name().fake(),
            role: Role::Employee,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = EmployeeId::new(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.full_name = name.into();
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn build(self) -> Employee {
        Employee::new(self.id, self.full_name, self.role)
    }
}
