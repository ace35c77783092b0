//! TestCredentialsHandler - Command handler for ad-hoc connectivity tests.

use std::sync::Arc;

use secrecy::SecretString;

use crate::domain::credentials::{
    ConnectionTest, CredentialError, CredentialValidationError, ProviderEnvironment,
};
use crate::domain::foundation::Timestamp;
use crate::ports::{CredentialStore, PaymentGateway};

/// Command to test an access token.
#[derive(Clone)]
pub struct TestCredentialsCommand {
    pub access_token: Option<String>,
    /// Inferred from the token prefix when absent.
    pub environment: Option<String>,
}

impl std::fmt::Debug for TestCredentialsCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCredentialsCommand")
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("environment", &self.environment)
            .finish()
    }
}

/// Handler for testing credentials.
///
/// When the tested token is the stored one, the stored record's validity
/// is updated with the outcome.
pub struct TestCredentialsHandler {
    store: Arc<dyn CredentialStore>,
    gateway: Arc<dyn PaymentGateway>,
}

impl TestCredentialsHandler {
    pub fn new(store: Arc<dyn CredentialStore>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { store, gateway }
    }

    pub async fn handle(&self, cmd: TestCredentialsCommand) -> Result<ConnectionTest, CredentialError> {
        let access_token = cmd
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(CredentialError::MissingAccessToken)?;

        let environment = match cmd.environment.as_deref().filter(|e| !e.is_empty()) {
            Some(env) => env
                .parse::<ProviderEnvironment>()
                .map_err(CredentialValidationError::UnknownEnvironment)?,
            None => ProviderEnvironment::for_token(&access_token),
        };

        let token = SecretString::new(access_token.clone());
        let test = self.gateway.test_connection(&token, environment).await;

        if let Some(mut record) = self.store.load().await {
            if record.matches_token(&access_token) {
                record.apply_test(&test, Timestamp::now());
                if let Err(e) = self.store.save(&record).await {
                    tracing::warn!(error = %e, "Failed to update stored credential status");
                }
            }
        }

        Ok(test)
    }
}
