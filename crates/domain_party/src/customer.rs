//! Customers of the office

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

use core_kernel::{ClientId, EmployeeId};

use crate::error::PartyError;

/// A customer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Customer {
    pub id: ClientId,
    /// Employee who registered the customer and owns the record
    pub employee_id: EmployeeId,
    #[validate(length(min = 1))]
    pub client_name: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub nationality: String,
    /// Phone number; the backend stores it as a number
    #[serde(default, deserialize_with = "text_or_number")]
    pub phone_number: Option<String>,
    #[validate(email)]
    #[serde(default, deserialize_with = "text_or_number")]
    pub email: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    /// How the customer heard about the office
    #[serde(default)]
    pub office_discovery_method: Option<String>,
}

impl Customer {
    pub fn new(id: ClientId, employee_id: EmployeeId, client_name: impl Into<String>) -> Self {
        Self {
            id,
            employee_id,
            client_name: client_name.into(),
            created_at: String::new(),
            nationality: String::new(),
            phone_number: None,
            email: None,
            job_title: None,
            office_discovery_method: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Validates the record before it is saved
    ///
    /// # Errors
    ///
    /// Returns `PartyError::InvalidCustomer` listing the failing fields.
    pub fn check(&self) -> Result<(), PartyError> {
        self.validate().map_err(|errors| {
            let mut fields: Vec<_> = errors.field_errors().into_keys().map(|f| f.to_string()).collect();
            fields.sort();
            PartyError::InvalidCustomer(fields.join(", "))
        })
    }
}

/// Reads a string or number field; empty strings and `null` are absent
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_phone_is_kept_as_text() {
        let json = r#"{
            "id": 7, "employee_id": 2, "client_name": "خالد",
            "phone_number": 971500000000, "email": ""
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.phone_number.as_deref(), Some("971500000000"));
        assert_eq!(customer.email, None);
        assert!(customer.check().is_ok());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let customer = Customer::new(ClientId::new(1), EmployeeId::new(1), "Name").with_email("nope");
        assert!(matches!(customer.check(), Err(PartyError::InvalidCustomer(f)) if f == "email"));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let customer = Customer::new(ClientId::new(1), EmployeeId::new(1), "");
        assert!(customer.check().is_err());
    }
}
