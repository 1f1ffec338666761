//! Signed-in employee session
//!
//! After login the backend's employee record is kept as a JSON blob
//! (`employee_data`). `SessionContext` owns the parsed session and is handed
//! to whichever screen needs it; nothing reads the blob behind its back.

use fluent::FluentArgs;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use core_kernel::{EmployeeId, Labels};

use crate::employee::Role;
use crate::error::PartyError;

/// Screens reachable from the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardSection {
    Customers,
    Revenues,
    Discharges,
    Invoices,
    Services,
    AddEmployee,
    Attendance,
    OfficeDetails,
}

impl DashboardSection {
    pub const ALL: [DashboardSection; 8] = [
        DashboardSection::Customers,
        DashboardSection::Revenues,
        DashboardSection::Discharges,
        DashboardSection::Invoices,
        DashboardSection::Services,
        DashboardSection::AddEmployee,
        DashboardSection::Attendance,
        DashboardSection::OfficeDetails,
    ];

    pub fn label_id(&self) -> &'static str {
        match self {
            DashboardSection::Customers => "dashboard-customers",
            DashboardSection::Revenues => "dashboard-revenues",
            DashboardSection::Discharges => "dashboard-discharges",
            DashboardSection::Invoices => "dashboard-invoices",
            DashboardSection::Services => "dashboard-services",
            DashboardSection::AddEmployee => "dashboard-add-employee",
            DashboardSection::Attendance => "dashboard-attendance",
            DashboardSection::OfficeDetails => "dashboard-office-details",
        }
    }

    /// Whether `role` sees this entry on the dashboard
    pub fn is_open_to(&self, role: Role) -> bool {
        match self {
            DashboardSection::Revenues | DashboardSection::Discharges => {
                matches!(role, Role::Admin | Role::Accountant)
            }
            DashboardSection::AddEmployee
            | DashboardSection::Attendance
            | DashboardSection::OfficeDetails => role.is_admin(),
            DashboardSection::Customers | DashboardSection::Invoices | DashboardSection::Services => true,
        }
    }
}

/// The signed-in employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeSession {
    pub id: EmployeeId,
    pub full_name: String,
    pub role: Role,
}

#[derive(Deserialize)]
struct StoredSession {
    id: Value,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

impl EmployeeSession {
    /// Parses the `employee_data` blob stored at login
    ///
    /// `id` may be a number or a numeric string. A missing role means
    /// [`Role::Employee`].
    ///
    /// # Errors
    ///
    /// `PartyError::InvalidSession` for malformed JSON or a non-numeric id,
    /// `PartyError::UnknownRole` for an unrecognised role.
    pub fn from_storage_blob(blob: &str) -> Result<Self, PartyError> {
        let stored: StoredSession = serde_json::from_str(blob)
            .map_err(|e| PartyError::invalid_session(e.to_string()))?;

        let id = match &stored.id {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
        .map(EmployeeId::new)
        .ok_or_else(|| PartyError::invalid_session(format!("employee id {} is not a number", stored.id)))?;

        let role = match stored.role.as_deref() {
            None | Some("") => Role::default(),
            Some(name) => name.parse()?,
        };

        Ok(Self {
            id,
            full_name: stored.full_name.unwrap_or_default(),
            role,
        })
    }

    /// Admins see every record; everyone else only the records they own
    pub fn can_view(&self, owner: EmployeeId) -> bool {
        self.role.is_admin() || owner == self.id
    }

    /// Filters `items` down to those this employee may see
    pub fn visible<'a, T>(&self, items: &'a [T], owner: impl Fn(&T) -> EmployeeId) -> Vec<&'a T> {
        items.iter().filter(|item| self.can_view(owner(*item))).collect()
    }

    /// Dashboard entries for this employee, in menu order
    pub fn sections(&self) -> Vec<DashboardSection> {
        DashboardSection::ALL
            .into_iter()
            .filter(|section| section.is_open_to(self.role))
            .collect()
    }

    /// Dashboard greeting
    pub fn welcome_message(&self, labels: &Labels) -> String {
        let mut args = FluentArgs::new();
        args.set("name", self.full_name.clone());
        labels.get_with("dashboard-welcome", &args)
    }
}

/// Holds the current session for the lifetime of the app
#[derive(Debug, Default)]
pub struct SessionContext {
    current: Option<EmployeeSession>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session from the stored blob, replacing any previous one
    ///
    /// # Errors
    ///
    /// See [`EmployeeSession::from_storage_blob`]; the previous session is
    /// kept when parsing fails.
    pub fn sign_in(&mut self, blob: &str) -> Result<&EmployeeSession, PartyError> {
        let session = EmployeeSession::from_storage_blob(blob)?;
        tracing::info!(employee_id = %session.id, role = %session.role, "employee signed in");
        let current: &EmployeeSession = self.current.insert(session);
        Ok(current)
    }

    pub fn current(&self) -> Option<&EmployeeSession> {
        self.current.as_ref()
    }

    /// The current session, or `PartyError::NotSignedIn`
    pub fn require(&self) -> Result<&EmployeeSession, PartyError> {
        self.current.as_ref().ok_or(PartyError::NotSignedIn)
    }

    /// Ends the session, returning it
    pub fn sign_out(&mut self) -> Option<EmployeeSession> {
        let ended = self.current.take();
        if let Some(session) = &ended {
            tracing::info!(employee_id = %session.id, "employee signed out");
        }
        ended
    }
}
