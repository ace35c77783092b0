//! The stored credential record.

use serde::{Deserialize, Serialize};

use super::{ProviderEnvironment, ValidatedCredentials};
use crate::domain::foundation::Timestamp;

/// Outcome of a connectivity check against the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionTest {
    pub success: bool,
    pub message: String,
}

impl ConnectionTest {
    pub fn succeeded(environment: ProviderEnvironment) -> Self {
        Self {
            success: true,
            message: format!("Conexão bem-sucedida com ambiente {}", environment),
        }
    }

    pub fn failed(reason: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            message: format!("Erro na conexão: {}", reason),
        }
    }
}

/// The single set of provider credentials for this deployment.
///
/// Persisted as camelCase JSON inside the encrypted credential file. Saving
/// always replaces the whole record.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    pub access_token: String,
    pub public_key: String,
    pub environment: ProviderEnvironment,
    #[serde(default)]
    pub is_configured: bool,
    #[serde(default)]
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_tested: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_message: Option<String>,
}

impl CredentialRecord {
    /// Build the record written by a save, stamped with the test that ran
    /// just before it.
    pub fn from_validated(
        credentials: ValidatedCredentials,
        test: &ConnectionTest,
        tested_at: Timestamp,
    ) -> Self {
        Self {
            is_configured: !credentials.access_token.is_empty()
                && !credentials.public_key.is_empty(),
            access_token: credentials.access_token,
            public_key: credentials.public_key,
            environment: credentials.environment,
            is_valid: test.success,
            last_tested: Some(tested_at),
            test_message: Some(test.message.clone()),
        }
    }

    /// True when `token` is the stored access token.
    pub fn matches_token(&self, token: &str) -> bool {
        self.access_token == token
    }

    /// Record the outcome of a later connectivity test.
    pub fn apply_test(&mut self, test: &ConnectionTest, tested_at: Timestamp) {
        self.is_valid = test.success;
        self.last_tested = Some(tested_at);
        self.test_message = Some(test.message.clone());
    }
}

impl std::fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("access_token", &"[REDACTED]")
            .field("public_key", &self.public_key)
            .field("environment", &self.environment)
            .field("is_configured", &self.is_configured)
            .field("is_valid", &self.is_valid)
            .field("last_tested", &self.last_tested)
            .field("test_message", &self.test_message)
            .finish()
    }
}
