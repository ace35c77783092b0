//! In-Memory Credential Store Adapter
//!
//! Holds the credential record in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::credentials::CredentialRecord;
use crate::ports::{CredentialStore, CredentialStoreError};

/// In-memory credential store
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    record: Arc<RwLock<Option<CredentialRecord>>>,
    fail_writes: Arc<RwLock<bool>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `record`.
    pub fn with_record(record: CredentialRecord) -> Self {
        Self {
            record: Arc::new(RwLock::new(Some(record))),
            ..Self::default()
        }
    }

    /// Make subsequent `save` calls fail (useful for tests).
    pub async fn fail_writes(&self, fail: bool) {
        *self.fail_writes.write().await = fail;
    }

    /// Current record without going through the port.
    pub async fn snapshot(&self) -> Option<CredentialRecord> {
        self.record.read().await.clone()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn load(&self) -> Option<CredentialRecord> {
        self.record.read().await.clone()
    }

    async fn save(&self, record: &CredentialRecord) -> Result<(), CredentialStoreError> {
        if *self.fail_writes.read().await {
            return Err(CredentialStoreError::IoError("simulated write failure".to_string()));
        }
        *self.record.write().await = Some(record.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        *self.record.write().await = None;
        Ok(())
    }
}
