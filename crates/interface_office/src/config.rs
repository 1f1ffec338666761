//! Application configuration

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use core_kernel::{DateFormatError, ReceiptId, Timezone};

use crate::error::OfficeError;

/// Environment variable prefix (`OFFICE_TIMEZONE`, `OFFICE_RECEIPTS_FILE`, ...)
pub const ENV_PREFIX: &str = "OFFICE";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// IANA timezone used for "today" and displayed dates
    pub timezone: String,
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
    /// JSON array of receipts to print
    #[serde(default)]
    pub receipts_file: Option<PathBuf>,
    /// JSON office record (or array of records)
    #[serde(default)]
    pub details_file: Option<PathBuf>,
    /// Comma-separated receipt ids; all receipts when unset
    #[serde(default)]
    pub select: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timezone: "Asia/Dubai".to_string(),
            log_level: "info".to_string(),
            receipts_file: None,
            details_file: None,
            select: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `OFFICE_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from an explicit variable map, as if it were the environment
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, config::ConfigError> {
        Self::load(config::Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn load(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("timezone", defaults.timezone)?
            .set_default("log_level", defaults.log_level)?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Parsed display timezone
    pub fn timezone(&self) -> Result<Timezone, DateFormatError> {
        self.timezone.parse()
    }

    /// Receipt ids requested for printing, or `None` for all
    ///
    /// # Errors
    ///
    /// `OfficeError::Selection` when an entry is not an integer.
    pub fn selected_ids(&self) -> Result<Option<Vec<ReceiptId>>, OfficeError> {
        let Some(raw) = self.select.as_deref() else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }

        raw.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<ReceiptId>()
                    .map_err(|_| OfficeError::Selection(format!("{part:?} is not a receipt id")))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}
