//! Pre-built Test Fixtures
//!
//! Provides ready-to-use records for the office desk. Ids, amounts and
//! dates are fixed so tests can assert on exact formatted output.

use chrono::NaiveDate;
use core_kernel::{
    ClientId, EmployeeId, FixedClock, OfficeId, RawAmount, ReceiptId, ServiceId, Timezone,
};
use domain_billing::{OfficeDetails, Receipt, Service};
use domain_party::{Customer, Employee, Role};

/// Fixture for amounts in the shapes the backend sends
pub struct AmountFixtures;

impl AmountFixtures {
    /// A numeric amount
    pub fn number() -> RawAmount {
        RawAmount::from(100)
    }

    /// A decimal string, as PostgreSQL `numeric` columns arrive
    pub fn text() -> RawAmount {
        RawAmount::from("250.50")
    }

    /// A value that coerces to zero with a warning
    pub fn garbage() -> RawAmount {
        RawAmount::from("n/a")
    }

    pub fn missing() -> RawAmount {
        RawAmount::Missing
    }
}

/// Fixture for calendar data
pub struct CalendarFixtures;

impl CalendarFixtures {
    /// Issue day used across invoice tests (a Friday)
    pub fn issue_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    /// Clock fixed on [`CalendarFixtures::issue_day`] in Dubai
    pub fn clock() -> FixedClock {
        FixedClock::on(Self::issue_day(), Self::dubai())
    }

    pub fn dubai() -> Timezone {
        Timezone::default()
    }

    /// Receipt timestamp: Thursday 2024-01-04, noon in Dubai
    pub fn receipt_timestamp() -> &'static str {
        "2024-01-04T08:00:00.000Z"
    }
}

/// Fixture for staff records
pub struct StaffFixtures;

impl StaffFixtures {
    pub fn admin() -> Employee {
        Employee::new(EmployeeId::new(1), "أحمد المدير", Role::Admin).with_username("admin")
    }

    pub fn clerk() -> Employee {
        Employee::new(EmployeeId::new(2), "سارة علي", Role::Employee).with_username("sara")
    }

    pub fn representative() -> Employee {
        Employee::new(EmployeeId::new(3), "يوسف حسن", Role::Representative).with_username("yousef")
    }

    pub fn all() -> Vec<Employee> {
        vec![Self::admin(), Self::clerk(), Self::representative()]
    }

    /// Session blob as stored at login for the clerk
    pub fn clerk_blob() -> &'static str {
        r#"{"id":"2","full_name":"سارة علي","role":"employee"}"#
    }

    pub fn admin_blob() -> &'static str {
        r#"{"id":1,"full_name":"أحمد المدير","role":"admin"}"#
    }
}

/// Fixture for customers, receipts and services
pub struct BillingFixtures;

impl BillingFixtures {
    pub fn customer() -> Customer {
        Customer::new(ClientId::new(7), EmployeeId::new(2), "خالد سالم").with_email("khaled@example.ae")
    }

    /// A customer registered by the admin
    pub fn other_customer() -> Customer {
        Customer::new(ClientId::new(8), EmployeeId::new(1), "نور محمد")
    }

    pub fn office() -> OfficeDetails {
        OfficeDetails::new(
            OfficeId::new(1),
            "مركز الطباعة",
            "Typing Center",
            "info@typing-center.ae",
        )
        .with_addresses("دبي، الإمارات", "Dubai, UAE")
        .with_phone("+971 4 123 4567")
        .with_tax_number("100234567800003")
    }

    /// Receipts of [`BillingFixtures::customer`]: 1000 against service 1,
    /// 234.5 against service 2, and a "garbage" amount against service 2
    pub fn receipts() -> Vec<Receipt> {
        vec![
            Self::receipt(10, 1, RawAmount::from(1000)),
            Self::receipt(11, 2, RawAmount::from("234.5")),
            Self::receipt(12, 2, AmountFixtures::garbage()),
        ]
    }

    pub fn receipt(id: i64, service: i64, amount: RawAmount) -> Receipt {
        Receipt::new(ReceiptId::new(id), ServiceId::new(service), ClientId::new(7), amount)
            .with_client_name("خالد سالم")
            .with_service_name(format!("خدمة {service}"))
            .with_employee(EmployeeId::new(2), "سارة علي")
            .with_created_at(CalendarFixtures::receipt_timestamp())
    }

    /// Service 1: fully paid, with a representative
    pub fn paid_service() -> Service {
        Service::new(ServiceId::new(1), EmployeeId::new(2), ClientId::new(7), "خدمة 1", 1000)
            .with_representative(EmployeeId::new(3))
    }

    /// Service 2: partially paid, no representative
    pub fn partial_service() -> Service {
        Service::new(ServiceId::new(2), EmployeeId::new(2), ClientId::new(7), "خدمة 2", "500")
    }

    /// Service 3: owned by the admin for another customer
    pub fn admin_service() -> Service {
        Service::new(ServiceId::new(3), EmployeeId::new(1), ClientId::new(8), "خدمة 3", 300)
    }
}
