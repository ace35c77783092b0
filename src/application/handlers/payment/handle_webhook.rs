//! HandleWebhookHandler - Command handler for provider notifications.
//!
//! Every notification is acknowledged. Only a signed `payment` notification
//! whose signature checks out leads to a provider fetch and a ledger update.

use std::sync::Arc;

use super::provider_access::{configured_token, sync_ledger};
use crate::domain::payment::validate_payment_id;
use crate::domain::webhook::{Notification, WebhookError, WebhookVerifier};
use crate::ports::{CredentialStore, PaymentGateway, PaymentLedger};

/// Longest slice of a raw notification body written to the log.
const MAX_LOGGED_BODY: usize = 2048;

/// Command carrying one raw notification.
#[derive(Debug, Clone, Default)]
pub struct HandleWebhookCommand {
    pub body: Vec<u8>,
    /// `x-signature` header.
    pub signature: Option<String>,
    /// `x-request-id` header.
    pub request_id: Option<String>,
    /// `data.id` query parameter.
    pub query_data_id: Option<String>,
}

/// What became of a notification. Informational only; the HTTP answer is
/// always 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// Verified payment notification applied to the ledger.
    Processed { payment_id: String },
    /// Verified, but not a payment notification.
    Ignored,
    /// Accepted without acting on it.
    Unverified,
    /// Verified payment notification whose processing failed.
    Failed,
}

/// Handler for provider notifications.
pub struct HandleWebhookHandler {
    verifier: Option<Arc<WebhookVerifier>>,
    store: Arc<dyn CredentialStore>,
    gateway: Arc<dyn PaymentGateway>,
    ledger: Arc<dyn PaymentLedger>,
}

impl HandleWebhookHandler {
    pub fn new(
        verifier: Option<Arc<WebhookVerifier>>,
        store: Arc<dyn CredentialStore>,
        gateway: Arc<dyn PaymentGateway>,
        ledger: Arc<dyn PaymentLedger>,
    ) -> Self {
        Self {
            verifier,
            store,
            gateway,
            ledger,
        }
    }

    pub async fn handle(&self, cmd: HandleWebhookCommand) -> WebhookOutcome {
        tracing::debug!(
            size = cmd.body.len(),
            body = %body_preview(&cmd.body),
            "Webhook body"
        );
        let notification = match Notification::parse(&cmd.body, cmd.query_data_id.as_deref()) {
            Ok(notification) => notification,
            Err(e) => {
                tracing::warn!(error = %e, "Unreadable webhook body");
                return WebhookOutcome::Unverified;
            }
        };
        tracing::info!(
            kind = ?notification.kind,
            action = ?notification.action,
            data_id = ?notification.data_id,
            "Webhook received"
        );

        if let Err(e) = self.verify(&cmd, &notification) {
            tracing::warn!(error = %e, data_id = ?notification.data_id, "Webhook not verified");
            return WebhookOutcome::Unverified;
        }

        if !notification.is_payment() {
            return WebhookOutcome::Ignored;
        }

        match self.process_payment(&notification).await {
            Ok(payment_id) => WebhookOutcome::Processed { payment_id },
            Err(e) => {
                tracing::error!(error = %e, data_id = ?notification.data_id, "Webhook processing failed");
                WebhookOutcome::Failed
            }
        }
    }

    fn verify(
        &self,
        cmd: &HandleWebhookCommand,
        notification: &Notification,
    ) -> Result<(), WebhookError> {
        let verifier = self.verifier.as_ref().ok_or(WebhookError::MissingSignature)?;
        let signature = cmd
            .signature
            .as_deref()
            .ok_or(WebhookError::MissingSignature)?;
        verifier.verify(
            signature,
            notification.data_id.as_deref(),
            cmd.request_id.as_deref(),
        )
    }

    async fn process_payment(&self, notification: &Notification) -> Result<String, String> {
        let payment_id = notification.payment_id().map_err(|e| e.to_string())?;
        let payment_id = validate_payment_id(payment_id).map_err(|e| e.to_string())?;
        let token = configured_token(self.store.as_ref())
            .await
            .map_err(|e| e.to_string())?;
        let payment = self
            .gateway
            .get_payment(&token, payment_id)
            .await
            .map_err(|e| e.to_string())?;

        sync_ledger(self.ledger.as_ref(), &payment).await;
        Ok(payment.id)
    }
}

/// Body as logged: lossy UTF-8, cut at `MAX_LOGGED_BODY` bytes.
fn body_preview(body: &[u8]) -> String {
    let cut = &body[..body.len().min(MAX_LOGGED_BODY)];
    let mut preview = String::from_utf8_lossy(cut).into_owned();
    if body.len() > MAX_LOGGED_BODY {
        preview.push_str("...");
    }
    preview
}
