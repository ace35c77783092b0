//! Mercado Pago REST API wire types.
//!
//! Only the request body is typed; payment responses are passed on to the
//! browser verbatim and read through `ProviderPayment::from_json`.

use serde::{Deserialize, Serialize};

use crate::ports::PixPaymentOrder;

/// Body of `POST /v1/payments` for a PIX payment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePaymentBody {
    pub transaction_amount: f64,
    pub description: String,
    pub payment_method_id: &'static str,
    pub payer: Payer,
    pub external_reference: String,
    pub notification_url: String,
    pub metadata: PaymentMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payer {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentMetadata {
    pub wedding_gift: bool,
    pub couple_names: String,
    pub product_id: String,
}

impl From<PixPaymentOrder> for CreatePaymentBody {
    fn from(order: PixPaymentOrder) -> Self {
        Self {
            transaction_amount: order.amount,
            description: order.description,
            payment_method_id: "pix",
            payer: Payer {
                email: order.payer_email,
                first_name: order.payer_first_name,
                last_name: order.payer_last_name,
            },
            external_reference: order.external_reference,
            notification_url: order.notification_url,
            metadata: PaymentMetadata {
                wedding_gift: true,
                couple_names: order.couple_names,
                product_id: order.product_tag,
            },
        }
    }
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Best human-readable message, if the body carried one.
    pub fn best_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.is_empty())
            .or(self.error.filter(|e| !e.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> PixPaymentOrder {
        PixPaymentOrder {
            amount: 199.9,
            description: "Presente: Aparelho de jantar".to_string(),
            payer_email: "avo@example.com".to_string(),
            payer_first_name: "Dona".to_string(),
            payer_last_name: "Lurdes".to_string(),
            external_reference: "gift-9-1700".to_string(),
            notification_url: "https://casamento.example/api/mercadopago/webhook".to_string(),
            couple_names: "Kriscia e Iverson".to_string(),
            product_tag: "9".to_string(),
        }
    }

    #[test]
    fn body_matches_provider_shape() {
        let body = serde_json::to_value(CreatePaymentBody::from(order())).unwrap();

        assert_eq!(body["transaction_amount"], 199.9);
        assert_eq!(body["payment_method_id"], "pix");
        assert_eq!(body["payer"]["first_name"], "Dona");
        assert_eq!(body["payer"]["last_name"], "Lurdes");
        assert_eq!(body["external_reference"], "gift-9-1700");
        assert_eq!(body["metadata"]["wedding_gift"], true);
        assert_eq!(body["metadata"]["couple_names"], "Kriscia e Iverson");
        assert_eq!(body["metadata"]["product_id"], "9");
    }

    #[test]
    fn error_body_prefers_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message":"invalid payer","error":"bad_request"}"#).unwrap();
        assert_eq!(body.best_message().as_deref(), Some("invalid payer"));

        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"bad_request"}"#).unwrap();
        assert_eq!(body.best_message().as_deref(), Some("bad_request"));

        assert!(ApiErrorBody::default().best_message().is_none());
    }
}
