//! HTTP DTOs for credential endpoints.
//!
//! Field names are camelCase to match what the admin panel sends and reads.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{CredentialStatus, SaveCredentialsResult};
use crate::domain::credentials::ConnectionTest;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to save credentials. Missing fields are reported by validation,
/// not by the JSON extractor.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCredentialsRequest {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
}

/// Request to test an access token.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCredentialsRequest {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Credential status. Never includes the token or the public key.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialStatusResponse {
    pub is_configured: bool,
    /// `sandbox`, `production`, or `demo` when nothing is stored.
    pub environment: String,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_tested: Option<String>,
}

impl From<CredentialStatus> for CredentialStatusResponse {
    fn from(status: CredentialStatus) -> Self {
        match status {
            CredentialStatus::Demo => Self {
                is_configured: false,
                environment: "demo".to_string(),
                is_valid: false,
                last_tested: None,
            },
            CredentialStatus::Configured {
                environment,
                is_valid,
                last_tested,
            } => Self {
                is_configured: true,
                environment: environment.to_string(),
                is_valid,
                last_tested: last_tested.map(|t| t.to_rfc3339()),
            },
        }
    }
}

/// Response for a successful save.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCredentialsResponse {
    pub success: bool,
    pub message: String,
    pub is_valid: bool,
    pub test_message: String,
}

impl From<SaveCredentialsResult> for SaveCredentialsResponse {
    fn from(result: SaveCredentialsResult) -> Self {
        Self {
            success: true,
            message: "Credenciais salvas com sucesso".to_string(),
            is_valid: result.is_valid,
            test_message: result.test_message,
        }
    }
}

/// Outcome of a connection test.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionTestResponse {
    pub success: bool,
    pub message: String,
}

impl From<ConnectionTest> for ConnectionTestResponse {
    fn from(test: ConnectionTest) -> Self {
        Self {
            success: test.success,
            message: test.message,
        }
    }
}

/// Response for removing credentials.
#[derive(Debug, Clone, Serialize)]
pub struct ClearCredentialsResponse {
    pub success: bool,
    pub message: String,
}

impl ClearCredentialsResponse {
    pub fn removed() -> Self {
        Self {
            success: true,
            message: "Credenciais removidas com sucesso".to_string(),
        }
    }
}
