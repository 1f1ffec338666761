//! Office directory
//!
//! Joins the raw records the backend serves into the rows the office screens
//! list: customers with the employee who registered them, and services with
//! their receipts, employee and representative names.
//!
//! Name lookups are best effort. A failed lookup leaves the name empty and
//! logs a warning; a failed receipt fetch fails the whole listing.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use core_kernel::{ClientId, EmployeeId, Labels, Money, PortError};
use domain_billing::{OfficeDetails, OfficePort, PaymentStatus, ReceiptPort, Service, ServicePort};
use domain_party::{representative_candidates, Customer, CustomerPort, Employee, EmployeePort, EmployeeSession};

use crate::error::OfficeError;

/// The ports the directory reads through
#[derive(Clone)]
pub struct OfficePorts {
    pub employees: Arc<dyn EmployeePort>,
    pub customers: Arc<dyn CustomerPort>,
    pub services: Arc<dyn ServicePort>,
    pub receipts: Arc<dyn ReceiptPort>,
    pub offices: Arc<dyn OfficePort>,
}

/// A customer row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerEntry {
    pub customer: Customer,
    /// Full name of the registering employee, empty when unknown
    pub employee_name: String,
}

/// A service row with its receipts attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceEntry {
    pub service: Service,
    pub employee_name: String,
    /// Representative name, or the "none" label when unassigned
    pub representative_name: String,
    pub status: PaymentStatus,
    /// Sum of the receipts; `None` when nothing was paid yet
    pub paid_total: Option<Money>,
    /// `paid_total` as printed, or the "none" label
    pub paid_display: String,
}

/// Read-side joins over the office ports
pub struct OfficeDirectory {
    ports: OfficePorts,
    none_label: String,
}

impl OfficeDirectory {
    pub fn new(ports: OfficePorts, labels: &Labels) -> Self {
        Self {
            ports,
            none_label: labels.get("none"),
        }
    }

    /// Every customer with the registering employee's name
    #[tracing::instrument(skip(self))]
    pub async fn customers(&self) -> Result<Vec<CustomerEntry>, OfficeError> {
        let customers = self.ports.customers.list_customers().await?;
        let mut names = NameCache::default();

        let mut entries = Vec::with_capacity(customers.len());
        for customer in customers {
            let employee_name = names.lookup(&self.ports, customer.employee_id).await;
            entries.push(CustomerEntry {
                customer,
                employee_name,
            });
        }
        Ok(entries)
    }

    /// Customers visible to the signed-in employee
    pub async fn customers_for(
        &self,
        session: &EmployeeSession,
    ) -> Result<Vec<CustomerEntry>, OfficeError> {
        let mut entries = self.customers().await?;
        entries.retain(|entry| session.can_view(entry.customer.employee_id));
        Ok(entries)
    }

    /// Services, optionally for one customer, with receipts and names joined
    #[tracing::instrument(skip(self))]
    pub async fn services(&self, customer: Option<ClientId>) -> Result<Vec<ServiceEntry>, OfficeError> {
        let services = self.ports.services.list_services(customer).await?;
        let mut names = NameCache::default();

        let mut entries = Vec::with_capacity(services.len());
        for service in services {
            let receipts = self.ports.receipts.receipts_for_service(service.id).await?;
            let service = service.with_receipts(receipts);

            if service.has_stale_status() {
                tracing::debug!(service_id = %service.id, "stored payment status disagrees with receipts");
            }

            let employee_name = names.lookup(&self.ports, service.employee_id).await;
            let representative_name = match service.representative() {
                Some(id) => names.lookup(&self.ports, id).await,
                None => self.none_label.clone(),
            };

            let paid_total = service.paid_total().map(Money::aed);
            let paid_display = match paid_total {
                Some(paid) => paid.to_string(),
                None => self.none_label.clone(),
            };

            entries.push(ServiceEntry {
                status: service.payment_status(),
                paid_total,
                paid_display,
                employee_name,
                representative_name,
                service,
            });
        }
        Ok(entries)
    }

    /// Services visible to the signed-in employee
    pub async fn services_for(
        &self,
        session: &EmployeeSession,
        customer: Option<ClientId>,
    ) -> Result<Vec<ServiceEntry>, OfficeError> {
        let mut entries = self.services(customer).await?;
        entries.retain(|entry| session.can_view(entry.service.employee_id));
        Ok(entries)
    }

    /// A customer's receipts in backend order
    pub async fn receipts_for_customer(
        &self,
        customer: ClientId,
    ) -> Result<Vec<domain_billing::Receipt>, OfficeError> {
        Ok(self.ports.receipts.receipts_for_customer(customer).await?)
    }

    /// The active letterhead: the first office record
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` when no office record exists.
    #[tracing::instrument(skip(self))]
    pub async fn office_details(&self) -> Result<OfficeDetails, OfficeError> {
        let offices = self.ports.offices.list_office_details().await?;
        offices
            .into_iter()
            .next()
            .ok_or_else(|| PortError::not_found("OfficeDetails", "first").into())
    }

    /// Employees offered in the representative picker
    pub async fn representative_candidates(&self) -> Result<Vec<Employee>, OfficeError> {
        let employees = self.ports.employees.list_employees().await?;
        Ok(representative_candidates(&employees)
            .into_iter()
            .cloned()
            .collect())
    }
}

/// Employee names already looked up during one listing
#[derive(Default)]
struct NameCache {
    names: HashMap<EmployeeId, String>,
}

impl NameCache {
    async fn lookup(&mut self, ports: &OfficePorts, id: EmployeeId) -> String {
        if let Some(name) = self.names.get(&id) {
            return name.clone();
        }

        let name = match ports.employees.get_employee(id).await {
            Ok(employee) => employee.full_name,
            Err(err) => {
                tracing::warn!(employee_id = %id, error = %err, "employee name lookup failed");
                String::new()
            }
        };
        self.names.insert(id, name.clone());
        name
    }
}
