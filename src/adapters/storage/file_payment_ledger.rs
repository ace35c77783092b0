//! File-based Payment Ledger Adapter
//!
//! Stores every ledger entry in a single JSON document, an object keyed by
//! external reference. Read-modify-write cycles are serialized by an
//! in-process mutex; there is no cross-process locking.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

use super::atomic_write::write_atomic;
use crate::domain::foundation::Timestamp;
use crate::domain::payment::{LedgerEntry, PaymentStatus, StatusChange};
use crate::ports::{LedgerError, PaymentLedger};

type Entries = BTreeMap<String, LedgerEntry>;

/// File-backed payment ledger
#[derive(Debug, Clone)]
pub struct FilePaymentLedger {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FilePaymentLedger {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    async fn read_entries(&self) -> Result<Entries, LedgerError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(LedgerError::IoError(e.to_string())),
        };
        if json.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&json).map_err(|e| LedgerError::DeserializationFailed(e.to_string()))
    }

    async fn write_entries(&self, entries: &Entries) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| LedgerError::SerializationFailed(e.to_string()))?;

        write_atomic(&self.path, json.as_bytes())
            .await
            .map_err(|e| LedgerError::IoError(e.to_string()))
    }
}

#[async_trait]
impl PaymentLedger for FilePaymentLedger {
    async fn record(&self, entry: LedgerEntry) -> Result<(), LedgerError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;

        let entry = match entries.get(&entry.external_reference) {
            Some(previous) => entry.superseding(previous),
            None => entry,
        };
        entries.insert(entry.external_reference.clone(), entry);

        self.write_entries(&entries).await
    }

    async fn find(&self, external_reference: &str) -> Result<Option<LedgerEntry>, LedgerError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_entries().await?.remove(external_reference))
    }

    async fn find_by_payment_id(
        &self,
        payment_id: &str,
    ) -> Result<Option<LedgerEntry>, LedgerError> {
        let _guard = self.lock.lock().await;
        Ok(self
            .read_entries()
            .await?
            .into_values()
            .find(|entry| entry.payment_id == payment_id))
    }

    async fn list(&self) -> Result<Vec<LedgerEntry>, LedgerError> {
        let _guard = self.lock.lock().await;
        let mut entries: Vec<LedgerEntry> = self.read_entries().await?.into_values().collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    async fn update_status(
        &self,
        external_reference: &str,
        status: PaymentStatus,
        status_detail: Option<String>,
        now: Timestamp,
    ) -> Result<Option<StatusChange>, LedgerError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;

        let Some(entry) = entries.get_mut(external_reference) else {
            return Ok(None);
        };
        let change = entry.apply_status(status, status_detail, now).map_err(|e| {
            LedgerError::InvalidTransition {
                external_reference: external_reference.to_string(),
                reason: e.to_string(),
            }
        })?;

        if change == StatusChange::Updated {
            self.write_entries(&entries).await?;
        }
        Ok(Some(change))
    }
}
