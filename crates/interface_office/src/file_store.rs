//! Local JSON exports behind the data access ports
//!
//! The invoice binary prints from files saved off the backend: a JSON array
//! of receipts and the office record. The office file may hold a single
//! object or the array the backend returns.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use core_kernel::{ClientId, DomainPort, PortError, ServiceId};
use domain_billing::{OfficeDetails, OfficePort, Receipt, ReceiptPort};

/// Receipts and office details read from JSON files on every call
#[derive(Debug, Clone, Default)]
pub struct JsonFileStore {
    receipts_file: Option<PathBuf>,
    details_file: Option<PathBuf>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

impl JsonFileStore {
    pub fn new(receipts_file: Option<PathBuf>, details_file: Option<PathBuf>) -> Self {
        Self {
            receipts_file,
            details_file,
        }
    }

    async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, PortError> {
        let bytes = tokio::fs::read(path).await.map_err(|err| PortError::Connection {
            message: format!("cannot read {}", path.display()),
            source: Some(Box::new(err)),
        })?;

        serde_json::from_slice(&bytes).map_err(|err| {
            PortError::transformation(format!("{}: {err}", path.display()))
        })
    }

    async fn receipts(&self) -> Result<Vec<Receipt>, PortError> {
        let Some(path) = &self.receipts_file else {
            return Err(PortError::validation("no receipts file configured"));
        };
        let receipts: Vec<Receipt> = Self::read_json(path).await?;
        tracing::debug!(path = %path.display(), count = receipts.len(), "loaded receipts");
        Ok(receipts)
    }
}

impl DomainPort for JsonFileStore {}

#[async_trait]
impl ReceiptPort for JsonFileStore {
    async fn receipts_for_service(&self, service_id: ServiceId) -> Result<Vec<Receipt>, PortError> {
        let mut receipts = self.receipts().await?;
        receipts.retain(|r| r.service_id == service_id);
        Ok(receipts)
    }

    async fn receipts_for_customer(&self, client_id: ClientId) -> Result<Vec<Receipt>, PortError> {
        let mut receipts = self.receipts().await?;
        receipts.retain(|r| r.client_id == client_id);
        Ok(receipts)
    }

    async fn list_receipts(&self) -> Result<Vec<Receipt>, PortError> {
        self.receipts().await
    }
}

#[async_trait]
impl OfficePort for JsonFileStore {
    async fn list_office_details(&self) -> Result<Vec<OfficeDetails>, PortError> {
        let Some(path) = &self.details_file else {
            return Err(PortError::validation("no office details file configured"));
        };
        let records: OneOrMany<OfficeDetails> = Self::read_json(path).await?;
        Ok(records.into())
    }
}
