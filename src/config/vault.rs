//! Credential vault configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Length of the AES-256 key in bytes.
pub const ENCRYPTION_KEY_LEN: usize = 32;

/// Where and how credentials and the payment ledger are persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct VaultConfig {
    /// Hex-encoded 32-byte key (64 hex characters).
    ///
    /// Required; startup fails without it.
    pub encryption_key: Option<SecretString>,

    /// Encrypted credential file
    #[serde(default = "default_credentials_path")]
    pub credentials_path: PathBuf,

    /// Payment ledger file
    #[serde(default = "default_ledger_path")]
    pub ledger_path: PathBuf,
}

impl VaultConfig {
    /// Decode the configured key into raw bytes.
    pub fn key_bytes(&self) -> Result<[u8; ENCRYPTION_KEY_LEN], ValidationError> {
        let key = self
            .encryption_key
            .as_ref()
            .ok_or(ValidationError::MissingRequired("ENCRYPTION_KEY"))?;

        let bytes = hex::decode(key.expose_secret().trim())
            .map_err(|_| ValidationError::InvalidEncryptionKey)?;

        bytes
            .try_into()
            .map_err(|_| ValidationError::InvalidEncryptionKey)
    }

    /// Validate vault configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.key_bytes()?;

        if self.credentials_path.as_os_str().is_empty() {
            return Err(ValidationError::InvalidStoragePath("credentials_path"));
        }
        if self.ledger_path.as_os_str().is_empty() {
            return Err(ValidationError::InvalidStoragePath("ledger_path"));
        }
        if self.credentials_path == self.ledger_path {
            return Err(ValidationError::InvalidStoragePath(
                "ledger_path must differ from credentials_path",
            ));
        }
        Ok(())
    }
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            encryption_key: None,
            credentials_path: default_credentials_path(),
            ledger_path: default_ledger_path(),
        }
    }
}

fn default_credentials_path() -> PathBuf {
    PathBuf::from("credentials.enc")
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from("payments.json")
}
