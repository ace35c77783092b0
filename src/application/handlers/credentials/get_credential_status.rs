//! GetCredentialStatusHandler - Query handler for the admin status panel.

use std::sync::Arc;

use crate::domain::credentials::ProviderEnvironment;
use crate::domain::foundation::Timestamp;
use crate::ports::CredentialStore;

/// Query for the credential status.
#[derive(Debug, Clone, Default)]
pub struct GetCredentialStatusQuery;

/// Redacted view of the stored credentials. Never carries the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialStatus {
    /// Nothing stored, or the stored file is unreadable.
    Demo,
    Configured {
        environment: ProviderEnvironment,
        is_valid: bool,
        last_tested: Option<Timestamp>,
    },
}

impl CredentialStatus {
    pub fn is_configured(&self) -> bool {
        matches!(self, CredentialStatus::Configured { .. })
    }
}

pub struct GetCredentialStatusHandler {
    store: Arc<dyn CredentialStore>,
}

impl GetCredentialStatusHandler {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: GetCredentialStatusQuery) -> CredentialStatus {
        match self.store.load().await {
            Some(record) => CredentialStatus::Configured {
                environment: record.environment,
                is_valid: record.is_valid,
                last_tested: record.last_tested,
            },
            None => CredentialStatus::Demo,
        }
    }
}
