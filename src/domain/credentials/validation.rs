//! Credential format validation.
//!
//! Pure prefix checks, no I/O. Messages are shown verbatim in the admin UI.

use thiserror::Error;

use super::ProviderEnvironment;

/// Why a credential triple was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialValidationError {
    #[error("Todos os campos são obrigatórios")]
    MissingFields,

    #[error("Credenciais de sandbox devem começar com TEST-")]
    SandboxPrefix,

    #[error("Credenciais de produção devem começar com APP_USR-")]
    ProductionPrefix,

    /// Carries the rejected value for logging; the message stays fixed.
    #[error("Ambiente inválido")]
    UnknownEnvironment(String),
}

/// A credential triple that passed validation.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidatedCredentials {
    pub access_token: String,
    pub public_key: String,
    pub environment: ProviderEnvironment,
}

impl std::fmt::Debug for ValidatedCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedCredentials")
            .field("access_token", &"[REDACTED]")
            .field("public_key", &self.public_key)
            .field("environment", &self.environment)
            .finish()
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Validate a credential triple as submitted by the admin form.
///
/// All three fields are required. Both the access token and the public key
/// must carry the prefix of the chosen environment. Nothing else is checked.
pub fn validate_credentials(
    access_token: Option<&str>,
    public_key: Option<&str>,
    environment: Option<&str>,
) -> Result<ValidatedCredentials, CredentialValidationError> {
    let (Some(access_token), Some(public_key), Some(environment)) = (
        present(access_token),
        present(public_key),
        present(environment),
    ) else {
        return Err(CredentialValidationError::MissingFields);
    };

    let environment: ProviderEnvironment = environment
        .parse()
        .map_err(CredentialValidationError::UnknownEnvironment)?;

    let prefix = environment.credential_prefix();
    if !access_token.starts_with(prefix) || !public_key.starts_with(prefix) {
        return Err(match environment {
            ProviderEnvironment::Sandbox => CredentialValidationError::SandboxPrefix,
            ProviderEnvironment::Production => CredentialValidationError::ProductionPrefix,
        });
    }

    Ok(ValidatedCredentials {
        access_token: access_token.to_string(),
        public_key: public_key.to_string(),
        environment,
    })
}
