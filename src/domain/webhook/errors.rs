//! Webhook error types.
//!
//! None of these reach the provider: the receiver always answers 200 and only
//! logs them.

use thiserror::Error;

/// Errors that occur while authenticating or reading a notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebhookError {
    /// Signature header present but the HMAC does not match.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Signature header absent while a secret is configured.
    #[error("Missing signature header")]
    MissingSignature,

    /// Failed to parse the signature header or notification body.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Required field missing from the notification.
    #[error("Missing field: {0}")]
    MissingField(&'static str),
}
