//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid log format (expected 'pretty' or 'json')")]
    InvalidLogFormat,

    #[error("Encryption key must be 32 bytes encoded as 64 hex characters")]
    InvalidEncryptionKey,

    #[error("Invalid storage path: {0}")]
    InvalidStoragePath(&'static str),

    #[error("Invalid payment API base URL")]
    InvalidApiBaseUrl,

    #[error("Invalid public base URL")]
    InvalidPublicBaseUrl,

    #[error("Public base URL must use HTTPS in production")]
    PublicBaseUrlMustBeHttps,
}
