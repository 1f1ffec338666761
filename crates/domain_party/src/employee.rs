//! Office employees and their roles

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{EmployeeId, Labels, RawAmount};

use crate::error::PartyError;

/// Employee role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Sees every record and manages staff
    Admin,
    /// Regular desk employee
    #[default]
    Employee,
    /// Also sees revenues and expenses
    Accountant,
    /// Field representative assigned to services
    Representative,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
            Role::Accountant => "accountant",
            Role::Representative => "representative",
        }
    }

    /// Label id in the Arabic catalog
    pub fn label_id(&self) -> &'static str {
        match self {
            Role::Admin => "role-admin",
            Role::Employee => "role-employee",
            Role::Accountant => "role-accountant",
            Role::Representative => "role-representative",
        }
    }

    /// Arabic role name as shown on the attendance sheet
    pub fn arabic_label(&self, labels: &Labels) -> String {
        labels.get(self.label_id())
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = PartyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "admin" => Ok(Role::Admin),
            "employee" => Ok(Role::Employee),
            "accountant" => Ok(Role::Accountant),
            "representative" => Ok(Role::Representative),
            other => Err(PartyError::UnknownRole(other.to_string())),
        }
    }
}

/// An employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "employee_id")]
    pub id: EmployeeId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub salary_amount: RawAmount,
    #[serde(rename = "comission_percentage", default)]
    pub commission_percentage: RawAmount,
    #[serde(default)]
    pub start_working_date: Option<String>,
    #[serde(default)]
    pub contract_end_date: Option<String>,
    #[serde(default)]
    pub residency_end_date: Option<String>,
}

impl Employee {
    pub fn new(id: EmployeeId, full_name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            username: String::new(),
            role,
            full_name: full_name.into(),
            nationality: String::new(),
            salary_amount: RawAmount::Missing,
            commission_percentage: RawAmount::Missing,
            start_working_date: None,
            contract_end_date: None,
            residency_end_date: None,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Monthly salary after coercion
    pub fn salary(&self) -> Decimal {
        self.salary_amount.coerce()
    }

    /// Commission percentage after coercion
    pub fn commission(&self) -> Decimal {
        self.commission_percentage.coerce()
    }
}

/// Employees offered in the representative dropdown
///
/// One entry per distinct full name, in order of the name's first
/// appearance. For each name the first non-admin employee is taken; names
/// held only by admins are dropped.
pub fn representative_candidates(employees: &[Employee]) -> Vec<&Employee> {
    let mut seen: Vec<&str> = Vec::new();
    let mut candidates = Vec::new();

    for employee in employees {
        let name = employee.full_name.as_str();
        if seen.contains(&name) {
            continue;
        }
        seen.push(name);

        if let Some(candidate) = employees
            .iter()
            .find(|e| e.full_name == name && !e.role.is_admin())
        {
            candidates.push(candidate);
        }
    }
    candidates
}
