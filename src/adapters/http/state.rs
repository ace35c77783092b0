//! Shared application state for the HTTP adapters.

use std::sync::Arc;

use secrecy::ExposeSecret;

use crate::adapters::crypto::CredentialCipher;
use crate::adapters::mercadopago::{MercadoPagoConfig, MercadoPagoGateway};
use crate::adapters::storage::{EncryptedFileCredentialStore, FilePaymentLedger};
use crate::application::handlers::{
    ClearCredentialsHandler, CreatePaymentHandler, GetCredentialStatusHandler,
    GetLedgerEntryHandler, GetPaymentStatusHandler, HandleWebhookHandler, ListLedgerHandler,
    SaveCredentialsHandler, TestCredentialsHandler,
};
use crate::config::{AppConfig, ValidationError};
use crate::domain::webhook::WebhookVerifier;
use crate::ports::{CredentialStore, PaymentGateway, PaymentLedger};

/// Shared application state containing all dependencies.
///
/// Cloned for each request; every dependency is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub credential_store: Arc<dyn CredentialStore>,
    pub payment_gateway: Arc<dyn PaymentGateway>,
    pub payment_ledger: Arc<dyn PaymentLedger>,
    /// Present only when a webhook secret is configured.
    pub webhook_verifier: Option<Arc<WebhookVerifier>>,
    /// Names attached to payment metadata.
    pub couple_names: String,
    /// Public URL used for webhook callbacks; derived per request when unset.
    pub public_base_url: Option<String>,
}

impl AppState {
    /// Wire the production adapters described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the encryption key is missing or malformed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ValidationError> {
        let cipher = CredentialCipher::new(&config.vault.key_bytes()?);
        let gateway = MercadoPagoGateway::new(
            MercadoPagoConfig::new().with_base_url(config.payment.api_base_url.clone()),
        );
        let webhook_verifier = config
            .payment
            .webhook_secret
            .as_ref()
            .filter(|secret| !secret.expose_secret().is_empty())
            .map(|secret| Arc::new(WebhookVerifier::new(secret.clone())));

        Ok(Self {
            credential_store: Arc::new(EncryptedFileCredentialStore::new(
                &config.vault.credentials_path,
                cipher,
            )),
            payment_gateway: Arc::new(gateway),
            payment_ledger: Arc::new(FilePaymentLedger::new(&config.vault.ledger_path)),
            webhook_verifier,
            couple_names: config.payment.couple_names.clone(),
            public_base_url: config.payment.public_base_url.clone(),
        })
    }

    // Credentials

    pub fn credential_status_handler(&self) -> GetCredentialStatusHandler {
        GetCredentialStatusHandler::new(self.credential_store.clone())
    }

    pub fn save_credentials_handler(&self) -> SaveCredentialsHandler {
        SaveCredentialsHandler::new(self.credential_store.clone(), self.payment_gateway.clone())
    }

    pub fn test_credentials_handler(&self) -> TestCredentialsHandler {
        TestCredentialsHandler::new(self.credential_store.clone(), self.payment_gateway.clone())
    }

    pub fn clear_credentials_handler(&self) -> ClearCredentialsHandler {
        ClearCredentialsHandler::new(self.credential_store.clone())
    }

    // Payments

    pub fn create_payment_handler(&self) -> CreatePaymentHandler {
        CreatePaymentHandler::new(
            self.credential_store.clone(),
            self.payment_gateway.clone(),
            self.payment_ledger.clone(),
            self.couple_names.clone(),
        )
    }

    pub fn payment_status_handler(&self) -> GetPaymentStatusHandler {
        GetPaymentStatusHandler::new(
            self.credential_store.clone(),
            self.payment_gateway.clone(),
            self.payment_ledger.clone(),
        )
    }

    pub fn webhook_handler(&self) -> HandleWebhookHandler {
        HandleWebhookHandler::new(
            self.webhook_verifier.clone(),
            self.credential_store.clone(),
            self.payment_gateway.clone(),
            self.payment_ledger.clone(),
        )
    }

    pub fn list_ledger_handler(&self) -> ListLedgerHandler {
        ListLedgerHandler::new(self.payment_ledger.clone())
    }

    pub fn ledger_entry_handler(&self) -> GetLedgerEntryHandler {
        GetLedgerEntryHandler::new(self.payment_ledger.clone())
    }
}
