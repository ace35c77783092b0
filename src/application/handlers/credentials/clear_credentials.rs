//! ClearCredentialsHandler - Command handler for removing stored credentials.

use std::sync::Arc;

use crate::domain::credentials::CredentialError;
use crate::ports::CredentialStore;

/// Command to remove the stored credentials.
#[derive(Debug, Clone, Default)]
pub struct ClearCredentialsCommand;

/// Handler for clearing credentials. Idempotent.
pub struct ClearCredentialsHandler {
    store: Arc<dyn CredentialStore>,
}

impl ClearCredentialsHandler {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _cmd: ClearCredentialsCommand) -> Result<(), CredentialError> {
        self.store.clear().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to remove credentials");
            CredentialError::StoreWriteFailed
        })
    }
}
