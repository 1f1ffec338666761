//! Party Domain Ports
//!
//! Port interfaces for employee and customer records. The HTTP backend
//! (`/employees`, `/customers`) and the in-memory mock both sit behind them,
//! so screens and the directory service never know which one they talk to.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_party::ports::EmployeePort;
//! use std::sync::Arc;
//!
//! pub struct AttendanceSheet {
//!     employees: Arc<dyn EmployeePort>,
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{ClientId, DomainPort, EmployeeId, PortError};

use crate::customer::Customer;
use crate::employee::Employee;

/// Read access to employees
#[async_trait]
pub trait EmployeePort: DomainPort {
    /// Retrieves an employee by id
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` when no employee has this id.
    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, PortError>;

    /// Every employee, in backend order
    async fn list_employees(&self) -> Result<Vec<Employee>, PortError>;
}

/// Read access to customers
#[async_trait]
pub trait CustomerPort: DomainPort {
    /// Retrieves a customer by id
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` when no customer has this id.
    async fn get_customer(&self, id: ClientId) -> Result<Customer, PortError>;

    /// Every customer, in backend order
    async fn list_customers(&self) -> Result<Vec<Customer>, PortError>;
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory mock implementation of EmployeePort
    #[derive(Debug, Default, Clone)]
    pub struct MockEmployeePort {
        employees: Arc<RwLock<Vec<Employee>>>,
    }

    impl MockEmployeePort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with employees for testing
        pub async fn with_employees(employees: Vec<Employee>) -> Self {
            let port = Self::new();
            port.employees.write().await.extend(employees);
            port
        }
    }

    impl DomainPort for MockEmployeePort {}

    #[async_trait]
    impl EmployeePort for MockEmployeePort {
        async fn get_employee(&self, id: EmployeeId) -> Result<Employee, PortError> {
            self.employees
                .read()
                .await
                .iter()
                .find(|e| e.id == id)
                .cloned()
                .ok_or_else(|| PortError::not_found(EmployeeId::label(), id))
        }

        async fn list_employees(&self) -> Result<Vec<Employee>, PortError> {
            Ok(self.employees.read().await.clone())
        }
    }

    /// In-memory mock implementation of CustomerPort
    #[derive(Debug, Default, Clone)]
    pub struct MockCustomerPort {
        customers: Arc<RwLock<Vec<Customer>>>,
    }

    impl MockCustomerPort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with customers for testing
        pub async fn with_customers(customers: Vec<Customer>) -> Self {
            let port = Self::new();
            port.customers.write().await.extend(customers);
            port
        }
    }

    impl DomainPort for MockCustomerPort {}

    #[async_trait]
    impl CustomerPort for MockCustomerPort {
        async fn get_customer(&self, id: ClientId) -> Result<Customer, PortError> {
            self.customers
                .read()
                .await
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or_else(|| PortError::not_found(ClientId::label(), id))
        }

        async fn list_customers(&self) -> Result<Vec<Customer>, PortError> {
            Ok(self.customers.read().await.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::*;
    use super::*;
    use crate::employee::Role;

    #[tokio::test]
    async fn test_mock_employee_lookup() {
        let port = MockEmployeePort::with_employees(vec![
            Employee::new(EmployeeId::new(1), "Ali", Role::Admin),
            Employee::new(EmployeeId::new(2), "Huda", Role::Employee),
        ])
        .await;

        assert_eq!(port.get_employee(EmployeeId::new(2)).await.unwrap().full_name, "Huda");
        assert_eq!(port.list_employees().await.unwrap().len(), 2);

        let err = port.get_employee(EmployeeId::new(9)).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: Employee with id 9");
    }

    #[tokio::test]
    async fn test_mock_customer_lookup() {
        let port = MockCustomerPort::with_customers(vec![Customer::new(
            ClientId::new(4),
            EmployeeId::new(1),
            "Khaled",
        )])
        .await;

        assert_eq!(port.get_customer(ClientId::new(4)).await.unwrap().client_name, "Khaled");
        assert!(port.get_customer(ClientId::new(5)).await.is_err());
    }
}
