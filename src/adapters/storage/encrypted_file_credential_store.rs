//! Encrypted File Credential Store Adapter
//!
//! Keeps the credential record as one AES-GCM encrypted JSON document on
//! disk. Nothing is cached: every call reads or writes the file.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::atomic_write::write_atomic;
use crate::adapters::crypto::CredentialCipher;
use crate::domain::credentials::CredentialRecord;
use crate::ports::{CredentialStore, CredentialStoreError};

/// File-backed credential store
#[derive(Debug, Clone)]
pub struct EncryptedFileCredentialStore {
    path: PathBuf,
    cipher: CredentialCipher,
}

impl EncryptedFileCredentialStore {
    /// Create a store writing to `path`.
    ///
    /// # Example
    /// ```ignore
    /// let store = EncryptedFileCredentialStore::new("credentials.enc", cipher);
    /// ```
    pub fn new<P: AsRef<Path>>(path: P, cipher: CredentialCipher) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cipher,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CredentialStore for EncryptedFileCredentialStore {
    async fn load(&self) -> Option<CredentialRecord> {
        let encoded = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read credentials file");
                return None;
            }
        };

        let json = match self.cipher.decrypt(&encoded) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to decrypt credentials");
                return None;
            }
        };

        match serde_json::from_str(&json) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to parse credentials");
                None
            }
        }
    }

    async fn save(&self, record: &CredentialRecord) -> Result<(), CredentialStoreError> {
        let json = serde_json::to_string(record)
            .map_err(|e| CredentialStoreError::SerializationFailed(e.to_string()))?;

        let encrypted = self
            .cipher
            .encrypt(&json)
            .map_err(|e| CredentialStoreError::SerializationFailed(e.to_string()))?;

        write_atomic(&self.path, encrypted.as_bytes())
            .await
            .map_err(|e| {
                tracing::error!(path = %self.path.display(), error = %e, "Failed to write credentials file");
                CredentialStoreError::IoError(e.to_string())
            })?;

        tracing::debug!(environment = %record.environment, "Credentials saved");
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "Credentials removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CredentialStoreError::IoError(e.to_string())),
        }
    }
}
