//! CreatePaymentHandler - Command handler for creating PIX payments.

use std::sync::Arc;

use serde_json::Value;

use super::provider_access::configured_token;
use crate::domain::foundation::Timestamp;
use crate::domain::payment::{LedgerEntry, PaymentError, PaymentRequest, PaymentStatus};
use crate::ports::{
    CredentialStore, GatewayError, GatewayErrorCode, PaymentGateway, PaymentLedger,
    PixPaymentOrder, ProviderPayment,
};

/// Command to create a PIX payment.
#[derive(Debug, Clone)]
pub struct CreatePaymentCommand {
    pub request: PaymentRequest,
    /// Absolute URL the provider posts notifications to.
    pub notification_url: String,
}

/// Handler for creating PIX payments.
///
/// Returns the provider's payment object untouched so the checkout can read
/// the QR code from it.
pub struct CreatePaymentHandler {
    store: Arc<dyn CredentialStore>,
    gateway: Arc<dyn PaymentGateway>,
    ledger: Arc<dyn PaymentLedger>,
    couple_names: String,
}

impl CreatePaymentHandler {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        gateway: Arc<dyn PaymentGateway>,
        ledger: Arc<dyn PaymentLedger>,
        couple_names: impl Into<String>,
    ) -> Self {
        Self {
            store,
            gateway,
            ledger,
            couple_names: couple_names.into(),
        }
    }

    pub async fn handle(&self, cmd: CreatePaymentCommand) -> Result<Value, PaymentError> {
        // 1. Credentials
        let token = configured_token(self.store.as_ref()).await?;

        // 2. Validate request
        let request = cmd.request;
        request.validate()?;

        // 3. Create with the provider
        let names = request.payer_names();
        let order = PixPaymentOrder {
            amount: request.amount,
            description: request.description.clone(),
            payer_email: request.payer_email.clone(),
            payer_first_name: names.first,
            payer_last_name: names.last,
            external_reference: request.external_reference.clone(),
            notification_url: cmd.notification_url,
            couple_names: self.couple_names.clone(),
            product_tag: request.product_tag(),
        };
        let response = self
            .gateway
            .create_payment(&token, order)
            .await
            .map_err(|e| {
                tracing::error!(
                    external_reference = %request.external_reference,
                    error = %e,
                    "Provider refused payment"
                );
                upstream_payment_error(e)
            })?;

        // 4. Record in the ledger
        self.record(&request, &response).await;

        Ok(response)
    }

    async fn record(&self, request: &PaymentRequest, response: &Value) {
        let Some(payment) = ProviderPayment::from_json(response) else {
            tracing::warn!(
                external_reference = %request.external_reference,
                "Provider response lacks id or status, payment not recorded"
            );
            return;
        };

        let entry = LedgerEntry::from_created(
            request,
            payment.id.clone(),
            PaymentStatus::from_provider(&payment.status),
            payment.status_detail,
            Timestamp::now(),
        );
        match self.ledger.record(entry).await {
            Ok(()) => tracing::info!(
                external_reference = %request.external_reference,
                payment_id = %payment.id,
                amount = request.amount,
                "Payment created"
            ),
            Err(e) => tracing::error!(
                external_reference = %request.external_reference,
                payment_id = %payment.id,
                error = %e,
                "Payment created but not recorded"
            ),
        }
    }
}

fn upstream_payment_error(error: GatewayError) -> PaymentError {
    match (error.code, error.status) {
        (GatewayErrorCode::HttpStatus, Some(status)) => PaymentError::UpstreamPayment {
            status,
            message: error.message,
        },
        _ => PaymentError::Network(error.message),
    }
}
