//! HTTP handlers for credential endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    ClearCredentialsCommand, GetCredentialStatusQuery, SaveCredentialsCommand,
    TestCredentialsCommand,
};

use super::dto::{
    ClearCredentialsResponse, ConnectionTestResponse, CredentialStatusResponse,
    SaveCredentialsRequest, SaveCredentialsResponse, TestCredentialsRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/credentials/status - Redacted credential status
pub async fn get_credential_status(State(state): State<AppState>) -> impl IntoResponse {
    let status = state
        .credential_status_handler()
        .handle(GetCredentialStatusQuery)
        .await;

    Json(CredentialStatusResponse::from(status))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/credentials - Validate, test and store credentials
pub async fn save_credentials(
    State(state): State<AppState>,
    Json(request): Json<SaveCredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SaveCredentialsCommand {
        access_token: request.access_token,
        public_key: request.public_key,
        environment: request.environment,
    };

    let result = state.save_credentials_handler().handle(cmd).await?;

    Ok(Json(SaveCredentialsResponse::from(result)))
}

/// POST /api/credentials/test - Test an access token against the provider
pub async fn test_credentials(
    State(state): State<AppState>,
    Json(request): Json<TestCredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = TestCredentialsCommand {
        access_token: request.access_token,
        environment: request.environment,
    };

    let test = state.test_credentials_handler().handle(cmd).await?;

    Ok(Json(ConnectionTestResponse::from(test)))
}

/// DELETE /api/credentials - Remove stored credentials
pub async fn clear_credentials(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .clear_credentials_handler()
        .handle(ClearCredentialsCommand)
        .await?;

    Ok(Json(ClearCredentialsResponse::removed()))
}
