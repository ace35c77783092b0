//! Payment Ledger Port - server-side record of created payments.

use async_trait::async_trait;

use crate::domain::foundation::Timestamp;
use crate::domain::payment::{LedgerEntry, PaymentStatus, StatusChange};

/// Errors that can occur during ledger operations
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Failed to serialize ledger: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize ledger: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Invalid transition for {external_reference}: {reason}")]
    InvalidTransition {
        external_reference: String,
        reason: String,
    },
}

/// Port for the payment ledger, keyed by external reference.
#[async_trait]
pub trait PaymentLedger: Send + Sync {
    /// Insert an entry, or supersede the one with the same external reference.
    async fn record(&self, entry: LedgerEntry) -> Result<(), LedgerError>;

    /// Find an entry by external reference.
    async fn find(&self, external_reference: &str) -> Result<Option<LedgerEntry>, LedgerError>;

    /// Find an entry by provider payment id.
    async fn find_by_payment_id(&self, payment_id: &str)
        -> Result<Option<LedgerEntry>, LedgerError>;

    /// All entries, newest first.
    async fn list(&self) -> Result<Vec<LedgerEntry>, LedgerError>;

    /// Apply a status to an existing entry.
    ///
    /// Returns `None` when the reference is unknown.
    ///
    /// # Errors
    /// Returns `LedgerError::InvalidTransition` if the state machine forbids
    /// the change; the stored entry is left untouched.
    async fn update_status(
        &self,
        external_reference: &str,
        status: PaymentStatus,
        status_detail: Option<String>,
        now: Timestamp,
    ) -> Result<Option<StatusChange>, LedgerError>;
}
