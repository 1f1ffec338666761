//! Billing Domain Ports
//!
//! Port interfaces for the records the billing domain reads from the
//! backend: receipts, services and the office letterhead. The HTTP backend,
//! a local export file, or the in-memory mock can sit behind them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_billing::ports::ReceiptPort;
//! use std::sync::Arc;
//!
//! pub struct InvoicesView {
//!     receipts: Arc<dyn ReceiptPort>,
//! }
//!
//! impl InvoicesView {
//!     pub async fn load(&self, customer: ClientId) -> Result<SelectionSet, PortError> {
//!         Ok(SelectionSet::new(self.receipts.receipts_for_customer(customer).await?))
//!     }
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{ClientId, DomainPort, PortError, ServiceId};

use crate::office::OfficeDetails;
use crate::receipt::Receipt;
use crate::service::Service;

/// Read access to receipts
#[async_trait]
pub trait ReceiptPort: DomainPort {
    /// Receipts paid against one service, in backend order
    async fn receipts_for_service(&self, service_id: ServiceId) -> Result<Vec<Receipt>, PortError>;

    /// Receipts of one customer, in backend order
    async fn receipts_for_customer(&self, client_id: ClientId) -> Result<Vec<Receipt>, PortError>;

    /// Every receipt
    async fn list_receipts(&self) -> Result<Vec<Receipt>, PortError>;
}

/// Read access to services
#[async_trait]
pub trait ServicePort: DomainPort {
    /// Retrieves a service with its receipts
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` when no service has this id.
    async fn get_service(&self, id: ServiceId) -> Result<Service, PortError>;

    /// Lists services, optionally restricted to one customer
    async fn list_services(&self, customer: Option<ClientId>) -> Result<Vec<Service>, PortError>;
}

/// Read access to the office letterhead
#[async_trait]
pub trait OfficePort: DomainPort {
    /// Office records as stored; the first one is the active letterhead
    async fn list_office_details(&self) -> Result<Vec<OfficeDetails>, PortError>;
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory receipts in insertion order
    #[derive(Debug, Default, Clone)]
    pub struct MockReceiptPort {
        receipts: Arc<RwLock<Vec<Receipt>>>,
    }

    impl MockReceiptPort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with receipts for testing
        pub async fn with_receipts(receipts: Vec<Receipt>) -> Self {
            let port = Self::new();
            port.receipts.write().await.extend(receipts);
            port
        }

        pub async fn insert(&self, receipt: Receipt) {
            self.receipts.write().await.push(receipt);
        }
    }

    impl DomainPort for MockReceiptPort {}

    #[async_trait]
    impl ReceiptPort for MockReceiptPort {
        async fn receipts_for_service(&self, service_id: ServiceId) -> Result<Vec<Receipt>, PortError> {
            let receipts = self.receipts.read().await;
            Ok(receipts
                .iter()
                .filter(|r| r.service_id == service_id)
                .cloned()
                .collect())
        }

        async fn receipts_for_customer(&self, client_id: ClientId) -> Result<Vec<Receipt>, PortError> {
            let receipts = self.receipts.read().await;
            Ok(receipts
                .iter()
                .filter(|r| r.client_id == client_id)
                .cloned()
                .collect())
        }

        async fn list_receipts(&self) -> Result<Vec<Receipt>, PortError> {
            Ok(self.receipts.read().await.clone())
        }
    }

    /// In-memory services keyed by id
    #[derive(Debug, Default, Clone)]
    pub struct MockServicePort {
        services: Arc<RwLock<BTreeMap<ServiceId, Service>>>,
    }

    impl MockServicePort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with services for testing
        pub async fn with_services(services: Vec<Service>) -> Self {
            let port = Self::new();
            {
                let mut map = port.services.write().await;
                for service in services {
                    map.insert(service.id, service);
                }
            }
            port
        }
    }

    impl DomainPort for MockServicePort {}

    #[async_trait]
    impl ServicePort for MockServicePort {
        async fn get_service(&self, id: ServiceId) -> Result<Service, PortError> {
            self.services
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found(ServiceId::label(), id))
        }

        async fn list_services(&self, customer: Option<ClientId>) -> Result<Vec<Service>, PortError> {
            let services = self.services.read().await;
            Ok(services
                .values()
                .filter(|s| customer.map_or(true, |client| s.client_id == client))
                .cloned()
                .collect())
        }
    }

    /// In-memory office records
    #[derive(Debug, Default, Clone)]
    pub struct MockOfficePort {
        offices: Arc<RwLock<Vec<OfficeDetails>>>,
    }

    impl MockOfficePort {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn with_office(office: OfficeDetails) -> Self {
            let port = Self::new();
            port.offices.write().await.push(office);
            port
        }
    }

    impl DomainPort for MockOfficePort {}

    #[async_trait]
    impl OfficePort for MockOfficePort {
        async fn list_office_details(&self) -> Result<Vec<OfficeDetails>, PortError> {
            Ok(self.offices.read().await.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::*;
    use super::*;
    use core_kernel::{EmployeeId, ReceiptId};

    fn receipt(id: i64, service: i64, client: i64) -> Receipt {
        Receipt::new(ReceiptId::new(id), ServiceId::new(service), ClientId::new(client), 100)
    }

    #[tokio::test]
    async fn test_receipts_filter_keeps_order() {
        let port = MockReceiptPort::with_receipts(vec![
            receipt(3, 1, 7),
            receipt(1, 2, 8),
            receipt(2, 1, 7),
        ])
        .await;

        let for_service = port.receipts_for_service(ServiceId::new(1)).await.unwrap();
        let ids: Vec<_> = for_service.iter().map(|r| r.receipt_id.value()).collect();
        assert_eq!(ids, vec![3, 2]);

        let for_customer = port.receipts_for_customer(ClientId::new(8)).await.unwrap();
        assert_eq!(for_customer.len(), 1);
        assert_eq!(port.list_receipts().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_missing_service_is_not_found() {
        let port = MockServicePort::new();
        let err = port.get_service(ServiceId::new(9)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_services_by_customer() {
        let port = MockServicePort::with_services(vec![
            Service::new(ServiceId::new(1), EmployeeId::new(1), ClientId::new(1), "a", 10),
            Service::new(ServiceId::new(2), EmployeeId::new(1), ClientId::new(2), "b", 10),
        ])
        .await;

        assert_eq!(port.list_services(None).await.unwrap().len(), 2);
        let only = port.list_services(Some(ClientId::new(2))).await.unwrap();
        assert_eq!(only[0].id, ServiceId::new(2));
    }
}
