//! Webhook domain.
//!
//! Parsing of provider notifications and HMAC verification of their
//! `x-signature` header.

mod errors;
mod notification;
mod signature;

pub use errors::WebhookError;
pub use notification::Notification;
pub use signature::{signature_manifest, SignatureHeader, WebhookVerifier};

#[cfg(test)]
pub use signature::compute_test_signature;
