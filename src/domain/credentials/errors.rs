//! Credential operation errors.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Validation | 400 |
//! | MissingAccessToken | 400 |
//! | StoreWriteFailed | 500 |

use thiserror::Error;

use super::CredentialValidationError;
use crate::domain::foundation::ErrorCode;

/// Errors raised by credential commands.
///
/// Read failures are absent on purpose: an unreadable credential file is
/// reported as "not configured", never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error(transparent)]
    Validation(#[from] CredentialValidationError),

    #[error("Access Token é obrigatório")]
    MissingAccessToken,

    #[error("Erro ao salvar credenciais")]
    StoreWriteFailed,
}

impl CredentialError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CredentialError::Validation(_) | CredentialError::MissingAccessToken => {
                ErrorCode::ValidationFailed
            }
            CredentialError::StoreWriteFailed => ErrorCode::StoreWriteFailed,
        }
    }
}
