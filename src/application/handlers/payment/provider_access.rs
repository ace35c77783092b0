//! Shared steps of the payment handlers: loading the provider token and
//! reconciling the ledger with what the provider reports.

use secrecy::SecretString;

use crate::domain::foundation::Timestamp;
use crate::domain::payment::{PaymentError, PaymentStatus, StatusChange};
use crate::ports::{CredentialStore, LedgerError, PaymentLedger, ProviderPayment};

/// Access token of the stored record, if one is configured.
pub(super) async fn configured_token(
    store: &dyn CredentialStore,
) -> Result<SecretString, PaymentError> {
    match store.load().await {
        Some(record) if record.is_configured => Ok(SecretString::new(record.access_token)),
        _ => Err(PaymentError::NotConfigured),
    }
}

/// Bring the ledger entry of `payment` in line with the provider's status.
///
/// Never fails: unknown references are skipped and refused transitions
/// are logged.
pub(super) async fn sync_ledger(ledger: &dyn PaymentLedger, payment: &ProviderPayment) {
    let external_reference = match payment.external_reference.as_deref() {
        Some(reference) => reference.to_string(),
        None => match ledger.find_by_payment_id(&payment.id).await {
            Ok(Some(entry)) => entry.external_reference,
            Ok(None) => {
                tracing::debug!(payment_id = %payment.id, "Payment not in ledger");
                return;
            }
            Err(e) => {
                tracing::warn!(payment_id = %payment.id, error = %e, "Ledger lookup failed");
                return;
            }
        },
    };

    let status = PaymentStatus::from_provider(&payment.status);
    let result = ledger
        .update_status(
            &external_reference,
            status,
            payment.status_detail.clone(),
            Timestamp::now(),
        )
        .await;

    match result {
        Ok(Some(StatusChange::Updated)) => {
            tracing::info!(
                %external_reference,
                payment_id = %payment.id,
                status = status.as_str(),
                "Ledger entry updated"
            );
        }
        Ok(Some(StatusChange::Unchanged)) => {}
        Ok(None) => {
            tracing::debug!(%external_reference, "External reference not in ledger");
        }
        Err(LedgerError::InvalidTransition { reason, .. }) => {
            tracing::warn!(
                %external_reference,
                provider_status = %payment.status,
                %reason,
                "Ignoring status the ledger refuses"
            );
        }
        Err(e) => {
            tracing::error!(%external_reference, error = %e, "Failed to update ledger entry");
        }
    }
}
