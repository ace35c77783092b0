//! SaveCredentialsHandler - Command handler for storing provider credentials.

use std::sync::Arc;

use secrecy::SecretString;

use crate::domain::credentials::{validate_credentials, CredentialError, CredentialRecord};
use crate::domain::foundation::Timestamp;
use crate::ports::{CredentialStore, PaymentGateway};

/// Command to save a credential triple.
#[derive(Clone)]
pub struct SaveCredentialsCommand {
    pub access_token: Option<String>,
    pub public_key: Option<String>,
    pub environment: Option<String>,
}

impl std::fmt::Debug for SaveCredentialsCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaveCredentialsCommand")
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("public_key", &self.public_key)
            .field("environment", &self.environment)
            .finish()
    }
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveCredentialsResult {
    /// Whether the connectivity test passed. A failed test still saves.
    pub is_valid: bool,
    pub test_message: String,
}

/// Handler for saving credentials.
///
/// Validates the triple, tests it against the provider, then overwrites the
/// stored record with the outcome.
pub struct SaveCredentialsHandler {
    store: Arc<dyn CredentialStore>,
    gateway: Arc<dyn PaymentGateway>,
}

impl SaveCredentialsHandler {
    pub fn new(store: Arc<dyn CredentialStore>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { store, gateway }
    }

    pub async fn handle(
        &self,
        cmd: SaveCredentialsCommand,
    ) -> Result<SaveCredentialsResult, CredentialError> {
        // 1. Validate format
        let credentials = validate_credentials(
            cmd.access_token.as_deref(),
            cmd.public_key.as_deref(),
            cmd.environment.as_deref(),
        )?;

        // 2. Test against the provider
        let token = SecretString::new(credentials.access_token.clone());
        let test = self
            .gateway
            .test_connection(&token, credentials.environment)
            .await;

        // 3. Overwrite the stored record
        let environment = credentials.environment;
        let record = CredentialRecord::from_validated(credentials, &test, Timestamp::now());
        self.store.save(&record).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to save credentials");
            CredentialError::StoreWriteFailed
        })?;

        tracing::info!(%environment, is_valid = test.success, "Credentials saved");

        Ok(SaveCredentialsResult {
            is_valid: test.success,
            test_message: test.message,
        })
    }
}
