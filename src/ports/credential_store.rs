//! Credential Store Port - persistence of the single credential record.

use async_trait::async_trait;

use crate::domain::credentials::CredentialRecord;

/// Errors that can occur while writing the credential record.
#[derive(Debug, thiserror::Error)]
pub enum CredentialStoreError {
    #[error("Failed to serialize credentials: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for the encrypted credential record.
///
/// Implementations must not cache the record: every call goes to storage.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Load the stored record.
    ///
    /// Returns `None` when nothing is stored or the stored data cannot be
    /// read, decrypted or parsed. Such failures are logged, not returned.
    async fn load(&self) -> Option<CredentialRecord>;

    /// Replace the stored record.
    async fn save(&self, record: &CredentialRecord) -> Result<(), CredentialStoreError>;

    /// Remove the stored record. Succeeds when nothing is stored.
    async fn clear(&self) -> Result<(), CredentialStoreError>;
}
