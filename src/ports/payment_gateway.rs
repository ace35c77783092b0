//! Payment gateway port for the external PIX provider.
//!
//! Defines the contract for the Mercado Pago integration: a connectivity
//! check, PIX payment creation and payment lookup. The access token is passed
//! on every call because it lives in the encrypted credential store, not in
//! the adapter.

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::credentials::{ConnectionTest, ProviderEnvironment};

/// Port for payment provider integrations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Check that `access_token` is accepted by the provider.
    ///
    /// Never fails: transport and HTTP errors become a failed `ConnectionTest`.
    async fn test_connection(
        &self,
        access_token: &SecretString,
        environment: ProviderEnvironment,
    ) -> ConnectionTest;

    /// Create a PIX payment.
    ///
    /// Returns the provider's payment object verbatim.
    async fn create_payment(
        &self,
        access_token: &SecretString,
        order: PixPaymentOrder,
    ) -> Result<Value, GatewayError>;

    /// Fetch a payment by provider id.
    async fn get_payment(
        &self,
        access_token: &SecretString,
        payment_id: &str,
    ) -> Result<ProviderPayment, GatewayError>;
}

/// Everything the provider needs to create one PIX payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixPaymentOrder {
    pub amount: f64,
    pub description: String,
    pub payer_email: String,
    pub payer_first_name: String,
    pub payer_last_name: String,
    /// Also sent as the idempotency key.
    pub external_reference: String,
    pub notification_url: String,
    pub couple_names: String,
    /// Stringified product id, or `multiple`.
    pub product_tag: String,
}

/// The part of a provider payment object this server reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderPayment {
    pub id: String,
    pub status: String,
    pub status_detail: Option<String>,
    pub external_reference: Option<String>,
}

impl ProviderPayment {
    /// Extract the known fields from a raw payment object.
    ///
    /// Returns `None` when `id` or `status` is missing.
    pub fn from_json(value: &Value) -> Option<Self> {
        let id = match value.get("id")? {
            Value::Number(n) => n.to_string(),
            Value::String(s) if !s.is_empty() => s.clone(),
            _ => return None,
        };
        let status = value.get("status")?.as_str()?.to_string();
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Some(Self {
            id,
            status,
            status_detail: text("status_detail"),
            external_reference: text("external_reference"),
        })
    }
}

/// Errors from payment gateway operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayError {
    /// Error code for categorization.
    pub code: GatewayErrorCode,

    /// Human-readable message, the provider's own when it sent one.
    pub message: String,

    /// HTTP status returned by the provider, if any.
    pub status: Option<u16>,
}

impl GatewayError {
    pub fn new(code: GatewayErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
        }
    }

    /// Provider answered with a non-success status.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            ..Self::new(GatewayErrorCode::HttpStatus, message)
        }
    }

    /// Request never produced a response.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::NetworkError, message)
    }

    /// Request was never sent because its input is unusable.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::InvalidRequest, message)
    }

    /// Provider answered 2xx with a body we could not read.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::InvalidResponse, message)
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({}): {}", self.code, status, self.message),
            None => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Gateway error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// Non-2xx response.
    HttpStatus,

    /// Unreadable success response.
    InvalidResponse,

    /// Refused before sending, e.g. a malformed payment id.
    InvalidRequest,
}

impl std::fmt::Display for GatewayErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GatewayErrorCode::NetworkError => "network_error",
            GatewayErrorCode::HttpStatus => "http_status",
            GatewayErrorCode::InvalidResponse => "invalid_response",
            GatewayErrorCode::InvalidRequest => "invalid_request",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payment_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn PaymentGateway) {}
    }

    #[test]
    fn provider_payment_reads_numeric_id() {
        let value = json!({
            "id": 1234567890u64,
            "status": "approved",
            "status_detail": "accredited",
            "external_reference": "gift-1-1"
        });

        let payment = ProviderPayment::from_json(&value).unwrap();

        assert_eq!(payment.id, "1234567890");
        assert_eq!(payment.status, "approved");
        assert_eq!(payment.status_detail.as_deref(), Some("accredited"));
        assert_eq!(payment.external_reference.as_deref(), Some("gift-1-1"));
    }

    #[test]
    fn provider_payment_requires_id_and_status() {
        assert!(ProviderPayment::from_json(&json!({"status": "pending"})).is_none());
        assert!(ProviderPayment::from_json(&json!({"id": 1})).is_none());
    }

    #[test]
    fn empty_optional_fields_become_none() {
        let payment =
            ProviderPayment::from_json(&json!({"id": "9", "status": "pending", "external_reference": ""}))
                .unwrap();
        assert!(payment.external_reference.is_none());
        assert!(payment.status_detail.is_none());
    }

    #[test]
    fn gateway_error_display() {
        let err = GatewayError::http(401, "invalid access token");
        assert_eq!(err.to_string(), "http_status (401): invalid access token");
        assert_eq!(err.status, Some(401));

        let err = GatewayError::network("connection refused");
        assert_eq!(err.to_string(), "network_error: connection refused");
    }
}
