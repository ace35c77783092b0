//! Credential handlers.
//!
//! ## Commands
//! - Saving a credential triple (validated and connection-tested)
//! - Testing an access token
//! - Clearing the stored credentials
//!
//! ## Queries
//! - Redacted credential status

mod clear_credentials;
mod get_credential_status;
mod save_credentials;
mod test_credentials;

// Commands
pub use clear_credentials::{ClearCredentialsCommand, ClearCredentialsHandler};
pub use save_credentials::{SaveCredentialsCommand, SaveCredentialsHandler, SaveCredentialsResult};
pub use test_credentials::{TestCredentialsCommand, TestCredentialsHandler};

// Queries
pub use get_credential_status::{
    CredentialStatus, GetCredentialStatusHandler, GetCredentialStatusQuery,
};
