//! Payment configuration

use secrecy::SecretString;
use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration (Mercado Pago)
///
/// The access token itself is not configured here: it is entered by the
/// admin at runtime and kept in the encrypted credential file.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Base URL for the Mercado Pago REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Webhook signing secret. Notifications are only acted upon when set.
    pub webhook_secret: Option<SecretString>,

    /// Public URL of this service, used for the webhook `notification_url`.
    /// Derived from the incoming request when unset.
    pub public_base_url: Option<String>,

    /// Names attached to payment metadata
    #[serde(default = "default_couple_names")]
    pub couple_names: String,
}

impl PaymentConfig {
    /// Check whether webhook notifications can be authenticated
    pub fn verifies_webhooks(&self) -> bool {
        self.webhook_secret.is_some()
    }

    /// Validate payment configuration
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        if !is_http_url(&self.api_base_url) {
            return Err(ValidationError::InvalidApiBaseUrl);
        }

        if let Some(url) = &self.public_base_url {
            if !is_http_url(url) {
                return Err(ValidationError::InvalidPublicBaseUrl);
            }
            if production && !url.starts_with("https://") {
                return Err(ValidationError::PublicBaseUrlMustBeHttps);
            }
        }

        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            webhook_secret: None,
            public_base_url: None,
            couple_names: default_couple_names(),
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn default_api_base_url() -> String {
    "https://api.mercadopago.com".to_string()
}

fn default_couple_names() -> String {
    "Kriscia e Iverson".to_string()
}
