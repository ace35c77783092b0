//! HTTP DTOs for payment endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::PaymentStatusView;
use crate::domain::payment::PaymentRequest;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Checkout request. Absent fields fall through to request validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub payer_email: String,
    #[serde(default)]
    pub payer_name: String,
    #[serde(default)]
    pub external_reference: String,
    #[serde(default)]
    pub product_id: Option<i64>,
}

impl From<CreatePaymentRequest> for PaymentRequest {
    fn from(request: CreatePaymentRequest) -> Self {
        Self {
            amount: request.amount,
            description: request.description,
            payer_email: request.payer_email,
            payer_name: request.payer_name,
            external_reference: request.external_reference,
            product_id: request.product_id,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Provider status of one payment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusResponse {
    pub status: String,
    pub status_detail: Option<String>,
}

impl From<PaymentStatusView> for PaymentStatusResponse {
    fn from(view: PaymentStatusView) -> Self {
        Self {
            status: view.status,
            status_detail: view.status_detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_reads_camel_case() {
        let request: CreatePaymentRequest = serde_json::from_str(
            r#"{"amount":120.5,"description":"Panelas","payerEmail":"a@b.com",
                "payerName":"Ana","externalReference":"gift-1","productId":4}"#,
        )
        .unwrap();
        let request = PaymentRequest::from(request);
        assert_eq!(request.amount, 120.5);
        assert_eq!(request.payer_email, "a@b.com");
        assert_eq!(request.product_id, Some(4));
    }

    #[test]
    fn status_response_keeps_null_detail() {
        let json = serde_json::to_value(PaymentStatusResponse {
            status: "pending".to_string(),
            status_detail: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"status": "pending", "statusDetail": null}));
    }
}
