use crate::domain::{AppointmentRecord, ContactRecord, RecordStore, StoreError};
use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;

use super::config::StoreConfig;

const CONTACT_TABLE: &str = "contact_messages";
const APPOINTMENT_TABLE: &str = "appointments";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP adapter for the hosted record store. Inserts are POSTs of the
/// serialized record to `{base_url}/rest/v1/{table}`; non-2xx bodies are
/// surfaced verbatim as the failure reason.
pub struct HostedStore {
    client: Client,
    config: Option<StoreConfig>,
}

impl HostedStore {
    pub fn new(config: Option<StoreConfig>) -> Result<Self, StoreError> {
        if config.is_none() {
            tracing::warn!("record store not configured; submissions will fail");
        }
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn insert<T: Serialize>(&self, table: &str, record: &T) -> Result<(), StoreError> {
        let config = self.config.as_ref().ok_or(StoreError::NotConfigured)?;
        let url = format!("{}/rest/v1/{}", config.base_url.trim_end_matches('/'), table);

        let response = self
            .client
            .post(&url)
            .header("apikey", &config.api_key)
            .header("Authorization", format!("Bearer {}", config.api_key))
            .json(record)
            .send()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(table, "record accepted");
            Ok(())
        } else {
            let body = response.text().unwrap_or_default();
            let reason = if body.trim().is_empty() {
                format!("record store rejected the insert ({status})")
            } else {
                body
            };
            Err(StoreError::Rejected(reason))
        }
    }
}

impl RecordStore for HostedStore {
    fn insert_contact(&self, record: &ContactRecord) -> Result<(), StoreError> {
        self.insert(CONTACT_TABLE, record)
    }

    fn insert_appointment(&self, record: &AppointmentRecord) -> Result<(), StoreError> {
        self.insert(APPOINTMENT_TABLE, record)
    }
}
