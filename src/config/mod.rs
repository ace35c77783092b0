//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `GIFT_REGISTRY` prefix and nested values use double underscores as separators.
//!
//! A few plain variables are honoured for compatibility with existing deployments:
//!
//! | Variable | Maps to |
//! |----------|---------|
//! | `PORT` | `server.port` |
//! | `ENCRYPTION_KEY` | `vault.encryption_key` |
//! | `MERCADOPAGO_WEBHOOK_SECRET` | `payment.webhook_secret` |
//!
//! # Example
//!
//! ```no_run
//! use gift_registry::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod payment;
mod server;
mod vault;

pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use server::{Environment, ServerConfig};
pub use vault::{VaultConfig, ENCRYPTION_KEY_LEN};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Credential vault configuration (encryption key, file paths)
    #[serde(default)]
    pub vault: VaultConfig,

    /// Payment configuration (Mercado Pago)
    #[serde(default)]
    pub payment: PaymentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GIFT_REGISTRY` prefix
    /// 3. Applies the plain `PORT`, `ENCRYPTION_KEY` and
    ///    `MERCADOPAGO_WEBHOOK_SECRET` overrides
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `GIFT_REGISTRY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `GIFT_REGISTRY__VAULT__CREDENTIALS_PATH=/data/credentials.enc`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    /// Semantic checks (such as the required encryption key) happen in
    /// [`AppConfig::validate()`].
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GIFT_REGISTRY")
                    .separator("__"),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("vault.encryption_key", std::env::var("ENCRYPTION_KEY").ok())?
            .set_override_option(
                "payment.webhook_secret",
                std::env::var("MERCADOPAGO_WEBHOOK_SECRET").ok(),
            )?
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step, as done at startup.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation of configuration:
    /// - Port and log format
    /// - Presence and shape of the encryption key
    /// - URL formats, HTTPS for public URLs in production
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.vault.validate()?;
        self.payment.validate(self.is_production())?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const TEST_KEY: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    fn clear_env() {
        env::remove_var("ENCRYPTION_KEY");
        env::remove_var("PORT");
        env::remove_var("MERCADOPAGO_WEBHOOK_SECRET");
        env::remove_var("GIFT_REGISTRY__SERVER__PORT");
        env::remove_var("GIFT_REGISTRY__SERVER__ENVIRONMENT");
        env::remove_var("GIFT_REGISTRY__VAULT__CREDENTIALS_PATH");
    }

    #[test]
    fn test_load_defaults_with_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ENCRYPTION_KEY", TEST_KEY);
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.vault.encryption_key.is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_encryption_key_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("ENCRYPTION_KEY"))
        ));
    }

    #[test]
    fn test_plain_port_variable() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ENCRYPTION_KEY", TEST_KEY);
        env::set_var("PORT", "4000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 4000);
    }

    #[test]
    fn test_prefixed_variables() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ENCRYPTION_KEY", TEST_KEY);
        env::set_var("GIFT_REGISTRY__SERVER__ENVIRONMENT", "production");
        env::set_var("GIFT_REGISTRY__VAULT__CREDENTIALS_PATH", "/tmp/vault.enc");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert_eq!(
            config.vault.credentials_path,
            std::path::PathBuf::from("/tmp/vault.enc")
        );
    }

    #[test]
    fn test_webhook_secret_variable() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ENCRYPTION_KEY", TEST_KEY);
        env::set_var("MERCADOPAGO_WEBHOOK_SECRET", "whsecret");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().payment.verifies_webhooks());
    }
}
