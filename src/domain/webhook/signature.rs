//! Mercado Pago webhook signature verification.
//!
//! The provider signs each notification with HMAC-SHA256 over a manifest
//! built from the payment id, the `x-request-id` header and the timestamp
//! carried in `x-signature`.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::WebhookError;

/// Parsed components of the `x-signature` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    /// Timestamp exactly as sent; it is part of the signed manifest.
    pub timestamp: String,
    /// v1 signature (HMAC-SHA256).
    pub v1_signature: Vec<u8>,
}

impl SignatureHeader {
    /// Parses an `x-signature` header string.
    ///
    /// Format: `ts=<timestamp>,v1=<signature>`
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::ParseError` if the header format is invalid.
    pub fn parse(header: &str) -> Result<Self, WebhookError> {
        let mut timestamp: Option<String> = None;
        let mut v1_signature: Option<Vec<u8>> = None;

        for part in header.split(',') {
            let (key, value) = part
                .trim()
                .split_once('=')
                .ok_or_else(|| WebhookError::ParseError("invalid header format".to_string()))?;

            match key.trim() {
                "ts" => {
                    let value = value.trim();
                    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
                        return Err(WebhookError::ParseError("invalid timestamp".to_string()));
                    }
                    timestamp = Some(value.to_string());
                }
                "v1" => {
                    v1_signature = Some(hex::decode(value.trim()).map_err(|_| {
                        WebhookError::ParseError("invalid v1 signature hex".to_string())
                    })?);
                }
                _ => {}
            }
        }

        let timestamp =
            timestamp.ok_or_else(|| WebhookError::ParseError("missing timestamp".to_string()))?;
        let v1_signature = v1_signature
            .ok_or_else(|| WebhookError::ParseError("missing v1 signature".to_string()))?;

        Ok(SignatureHeader {
            timestamp,
            v1_signature,
        })
    }
}

/// Builds the string the provider signs.
///
/// Alphanumeric ids are signed in lowercase. Parts whose value is absent are
/// left out of the manifest entirely.
pub fn signature_manifest(data_id: Option<&str>, request_id: Option<&str>, ts: &str) -> String {
    let mut manifest = String::new();
    if let Some(id) = data_id.filter(|id| !id.is_empty()) {
        manifest.push_str(&format!("id:{};", id.to_ascii_lowercase()));
    }
    if let Some(request_id) = request_id.filter(|r| !r.is_empty()) {
        manifest.push_str(&format!("request-id:{};", request_id));
    }
    manifest.push_str(&format!("ts:{};", ts));
    manifest
}

/// Verifier for Mercado Pago webhook signatures.
pub struct WebhookVerifier {
    secret: SecretString,
}

impl WebhookVerifier {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Checks `signature_header` against the notification identifiers.
    ///
    /// # Errors
    ///
    /// - `ParseError` - header is malformed
    /// - `InvalidSignature` - HMAC does not match
    pub fn verify(
        &self,
        signature_header: &str,
        data_id: Option<&str>,
        request_id: Option<&str>,
    ) -> Result<(), WebhookError> {
        let header = SignatureHeader::parse(signature_header)?;
        let manifest = signature_manifest(data_id, request_id, &header.timestamp);
        let expected = self.compute_signature(&manifest)?;

        if !constant_time_compare(&expected, &header.v1_signature) {
            return Err(WebhookError::InvalidSignature);
        }
        Ok(())
    }

    fn compute_signature(&self, manifest: &str) -> Result<Vec<u8>, WebhookError> {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret.expose_secret().as_bytes())
            .map_err(|e| WebhookError::ParseError(e.to_string()))?;
        mac.update(manifest.as_bytes());
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

/// Performs constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Computes a valid `x-signature` header for use in test fixtures.
#[cfg(test)]
pub fn compute_test_signature(
    secret: &str,
    data_id: Option<&str>,
    request_id: Option<&str>,
    ts: &str,
) -> String {
    let manifest = signature_manifest(data_id, request_id, ts);
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key");
    mac.update(manifest.as_bytes());
    format!("ts={},v1={}", ts, hex::encode(mac.finalize().into_bytes()))
}
