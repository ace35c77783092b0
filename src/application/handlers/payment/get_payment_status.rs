//! GetPaymentStatusHandler - Query handler for polling a payment.

use std::sync::Arc;

use super::provider_access::{configured_token, sync_ledger};
use crate::domain::payment::{validate_payment_id, PaymentError};
use crate::ports::{CredentialStore, GatewayErrorCode, PaymentGateway, PaymentLedger};

/// Query for one payment's provider status.
#[derive(Debug, Clone)]
pub struct GetPaymentStatusQuery {
    pub payment_id: String,
}

/// Provider status as shown to the checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentStatusView {
    /// Raw provider status, e.g. `in_process`.
    pub status: String,
    pub status_detail: Option<String>,
}

/// Handler for payment status lookups.
///
/// Polling doubles as a ledger refresh for deployments without webhooks.
pub struct GetPaymentStatusHandler {
    store: Arc<dyn CredentialStore>,
    gateway: Arc<dyn PaymentGateway>,
    ledger: Arc<dyn PaymentLedger>,
}

impl GetPaymentStatusHandler {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        gateway: Arc<dyn PaymentGateway>,
        ledger: Arc<dyn PaymentLedger>,
    ) -> Self {
        Self {
            store,
            gateway,
            ledger,
        }
    }

    pub async fn handle(&self, query: GetPaymentStatusQuery) -> Result<PaymentStatusView, PaymentError> {
        let token = configured_token(self.store.as_ref()).await?;
        let payment_id = validate_payment_id(&query.payment_id)?;

        let payment = self
            .gateway
            .get_payment(&token, payment_id)
            .await
            .map_err(|e| {
                tracing::warn!(payment_id, error = %e, "Payment lookup failed");
                match (e.code, e.status) {
                    (GatewayErrorCode::HttpStatus, Some(status)) => {
                        PaymentError::UpstreamLookup { status }
                    }
                    _ => PaymentError::Network(e.message),
                }
            })?;

        sync_ledger(self.ledger.as_ref(), &payment).await;

        Ok(PaymentStatusView {
            status: payment.status,
            status_detail: payment.status_detail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mercadopago::MockPaymentGateway;
    use crate::adapters::storage::{InMemoryCredentialStore, InMemoryPaymentLedger};
    use crate::domain::credentials::{
        validate_credentials, ConnectionTest, CredentialRecord, ProviderEnvironment,
    };
    use crate::domain::foundation::Timestamp;
    use crate::domain::payment::{LedgerEntry, PaymentRequest, PaymentStatus};
    use crate::ports::{GatewayError, ProviderPayment};

    fn configured() -> InMemoryCredentialStore {
        InMemoryCredentialStore::with_record(CredentialRecord::from_validated(
            validate_credentials(Some("TEST-tok"), Some("TEST-pub"), Some("sandbox")).unwrap(),
            &ConnectionTest::succeeded(ProviderEnvironment::Sandbox),
            Timestamp::now(),
        ))
    }

    fn handler(
        store: InMemoryCredentialStore,
        gateway: &MockPaymentGateway,
        ledger: &InMemoryPaymentLedger,
    ) -> GetPaymentStatusHandler {
        GetPaymentStatusHandler::new(
            Arc::new(store),
            Arc::new(gateway.clone()),
            Arc::new(ledger.clone()),
        )
    }

    fn query(id: &str) -> GetPaymentStatusQuery {
        GetPaymentStatusQuery {
            payment_id: id.to_string(),
        }
    }

    #[tokio::test]
    async fn returns_provider_status_and_refreshes_ledger() {
        let gateway = MockPaymentGateway::new();
        gateway.add_payment(ProviderPayment {
            id: "42".to_string(),
            status: "approved".to_string(),
            status_detail: Some("accredited".to_string()),
            external_reference: Some("gift-1".to_string()),
        });
        let ledger = InMemoryPaymentLedger::new();
        let request = PaymentRequest {
            amount: 99.9,
            description: "Cafeteira".to_string(),
            payer_email: "tio@example.com".to_string(),
            payer_name: "Tio João".to_string(),
            external_reference: "gift-1".to_string(),
            product_id: Some(1),
        };
        ledger
            .record(LedgerEntry::from_created(
                &request,
                "42",
                PaymentStatus::Pending,
                None,
                Timestamp::now(),
            ))
            .await
            .unwrap();

        let view = handler(configured(), &gateway, &ledger)
            .handle(query("42"))
            .await
            .unwrap();

        assert_eq!(view.status, "approved");
        assert_eq!(view.status_detail.as_deref(), Some("accredited"));
        let entry = ledger.find("gift-1").await.unwrap().unwrap();
        assert_eq!(entry.status, PaymentStatus::Approved);
    }

    #[tokio::test]
    async fn unknown_payment_is_lookup_error() {
        let gateway = MockPaymentGateway::new();

        let err = handler(configured(), &gateway, &InMemoryPaymentLedger::new())
            .handle(query("404404"))
            .await
            .unwrap_err();

        assert_eq!(err, PaymentError::UpstreamLookup { status: 404 });
        assert_eq!(err.to_string(), "Erro ao consultar pagamento: 404");
    }

    #[tokio::test]
    async fn network_failure_is_reported() {
        let gateway = MockPaymentGateway::new();
        gateway.set_error("get_payment", GatewayError::network("timed out"));

        let err = handler(configured(), &gateway, &InMemoryPaymentLedger::new())
            .handle(query("1"))
            .await
            .unwrap_err();

        assert_eq!(err, PaymentError::Network("timed out".to_string()));
    }

    #[tokio::test]
    async fn requires_credentials() {
        let gateway = MockPaymentGateway::new();

        let err = handler(InMemoryCredentialStore::new(), &gateway, &InMemoryPaymentLedger::new())
            .handle(query("1"))
            .await
            .unwrap_err();

        assert_eq!(err, PaymentError::NotConfigured);
        assert_eq!(gateway.call_count("get_payment"), 0);
    }

    #[tokio::test]
    async fn rejects_ids_that_leave_the_payment_path() {
        let gateway = MockPaymentGateway::new();

        let err = handler(configured(), &gateway, &InMemoryPaymentLedger::new())
            .handle(query("../../users/me"))
            .await
            .unwrap_err();

        assert!(matches!(err, PaymentError::Validation(_)));
        assert_eq!(gateway.call_count("get_payment"), 0);
    }
}
