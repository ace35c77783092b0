//! PIX payment requests as submitted by the gift checkout.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Last name sent to the provider when the payer typed a single word.
pub const DEFAULT_LAST_NAME: &str = "Silva";

/// A guest's request to pay for one or more gifts via PIX.
///
/// Transient: only the ledger entry derived from the provider's answer is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Amount in BRL.
    pub amount: f64,
    pub description: String,
    pub payer_email: String,
    pub payer_name: String,
    /// Caller-chosen idempotency key, also the ledger key.
    pub external_reference: String,
    /// Gift being paid for. Absent when the cart holds several gifts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
}

impl PaymentRequest {
    /// Reject requests the provider would refuse anyway.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ValidationError::not_positive("amount", self.amount));
        }
        let required = [
            ("description", &self.description),
            ("payerEmail", &self.payer_email),
            ("payerName", &self.payer_name),
            ("externalReference", &self.external_reference),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::empty_field(field));
            }
        }
        if !self.payer_email.contains('@') {
            return Err(ValidationError::invalid_format("payerEmail", "missing @"));
        }
        Ok(())
    }

    /// Payer first and last name as the provider expects them.
    pub fn payer_names(&self) -> PayerName {
        PayerName::split(&self.payer_name)
    }

    /// Product identifier for payment metadata.
    pub fn product_tag(&self) -> String {
        self.product_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "multiple".to_string())
    }
}

/// Check that `id` is a bare provider payment id: ASCII letters, digits,
/// `-` or `_`. Anything else could escape the payment path on the provider.
pub fn validate_payment_id(id: &str) -> Result<&str, ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::empty_field("paymentId"));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::invalid_format(
            "paymentId",
            "only letters, digits, '-' and '_' are allowed",
        ));
    }
    Ok(id)
}

/// A full name split into the provider's first/last fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayerName {
    pub first: String,
    pub last: String,
}

impl PayerName {
    /// First word is the first name, the remaining words the last name.
    pub fn split(full_name: &str) -> Self {
        let mut words = full_name.split_whitespace();
        let first = words.next().unwrap_or_default().to_string();
        let rest: Vec<&str> = words.collect();
        let last = if rest.is_empty() {
            DEFAULT_LAST_NAME.to_string()
        } else {
            rest.join(" ")
        };
        Self { first, last }
    }
}
