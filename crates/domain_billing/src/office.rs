//! Office identity printed on invoice letterheads

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

use core_kernel::OfficeId;

use crate::error::BillingError;

/// Bilingual office details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct OfficeDetails {
    pub office_id: OfficeId,
    #[validate(length(min = 1))]
    pub ar_office_name: String,
    #[validate(length(min = 1))]
    pub en_office_name: String,
    #[serde(default)]
    pub ar_office_address: String,
    #[serde(default)]
    pub en_office_address: String,
    #[validate(email)]
    pub office_email: String,
    #[serde(default)]
    pub office_phone: String,
    /// Tax registration number; `0`, `""` and `null` mean unregistered
    #[serde(default, deserialize_with = "lenient_tax_number")]
    pub office_tax_number: Option<String>,
}

impl OfficeDetails {
    pub fn new(
        office_id: OfficeId,
        ar_office_name: impl Into<String>,
        en_office_name: impl Into<String>,
        office_email: impl Into<String>,
    ) -> Self {
        Self {
            office_id,
            ar_office_name: ar_office_name.into(),
            en_office_name: en_office_name.into(),
            ar_office_address: String::new(),
            en_office_address: String::new(),
            office_email: office_email.into(),
            office_phone: String::new(),
            office_tax_number: None,
        }
    }

    pub fn with_addresses(mut self, arabic: impl Into<String>, english: impl Into<String>) -> Self {
        self.ar_office_address = arabic.into();
        self.en_office_address = english.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.office_phone = phone.into();
        self
    }

    pub fn with_tax_number(mut self, tax_number: impl Into<String>) -> Self {
        let tax_number = tax_number.into();
        self.office_tax_number = (!tax_number.trim().is_empty()).then_some(tax_number);
        self
    }

    /// Validates the record before it is printed
    ///
    /// # Errors
    ///
    /// Returns `BillingError::InvalidOfficeDetails` listing the failing fields.
    pub fn check(&self) -> Result<(), BillingError> {
        self.validate().map_err(|errors| {
            let mut fields: Vec<_> = errors.field_errors().into_keys().map(|f| f.to_string()).collect();
            fields.sort();
            BillingError::InvalidOfficeDetails(fields.join(", "))
        })
    }
}

fn lenient_tax_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) if n.as_i64() != Some(0) => Some(n.to_string()),
        Some(Value::String(s)) if !s.trim().is_empty() && s.trim() != "0" => Some(s.trim().to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_tax_number_becomes_text() {
        let json = r#"{
            "office_id": 1,
            "ar_office_name": "مركز الطباعة",
            "en_office_name": "Typing Center",
            "office_email": "info@example.ae",
            "office_tax_number": 100234567800003
        }"#;
        let office: OfficeDetails = serde_json::from_str(json).unwrap();
        assert_eq!(office.office_tax_number.as_deref(), Some("100234567800003"));
    }

    #[test]
    fn test_zero_tax_number_means_none() {
        let json = r#"{
            "office_id": 1,
            "ar_office_name": "a",
            "en_office_name": "b",
            "office_email": "info@example.ae",
            "office_tax_number": 0
        }"#;
        let office: OfficeDetails = serde_json::from_str(json).unwrap();
        assert_eq!(office.office_tax_number, None);
    }

    #[test]
    fn test_check_reports_bad_fields() {
        let office = OfficeDetails::new(OfficeId::new(1), "", "Typing Center", "not-an-email");
        let err = office.check().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid office details: ar_office_name, office_email"
        );
    }

    #[test]
    fn test_valid_office_passes() {
        let office = OfficeDetails::new(OfficeId::new(1), "مركز", "Center", "info@example.ae")
            .with_tax_number("  ");
        assert!(office.check().is_ok());
        assert_eq!(office.office_tax_number, None);
    }
}
