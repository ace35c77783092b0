//! Credentials domain.
//!
//! The single Mercado Pago credential record, its environment namespaces and
//! the prefix rules a submitted credential triple must satisfy.

mod environment;
mod errors;
mod record;
mod validation;

pub use environment::ProviderEnvironment;
pub use errors::CredentialError;
pub use record::{ConnectionTest, CredentialRecord};
pub use validation::{validate_credentials, CredentialValidationError, ValidatedCredentials};
