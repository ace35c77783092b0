//! API error type shared by all HTTP handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::credentials::CredentialError;
use crate::domain::foundation::ErrorCode;
use crate::domain::payment::PaymentError;

/// Generic message for failures whose detail must not reach the client.
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// Error body: `{ "error": <message>, "code": <MACHINE_CODE> }`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message, shown as-is by the admin UI.
    pub error: String,
    /// Error code for programmatic handling.
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
        }
    }

    pub fn internal() -> Self {
        Self::new(ErrorCode::InternalError, INTERNAL_ERROR_MESSAGE)
    }
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    Credential(CredentialError),
    Payment(PaymentError),
}

impl From<CredentialError> for ApiError {
    fn from(err: CredentialError) -> Self {
        Self::Credential(err)
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        Self::Payment(err)
    }
}

impl ApiError {
    fn code(&self) -> ErrorCode {
        match self {
            ApiError::Credential(e) => e.code(),
            ApiError::Payment(e) => e.code(),
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Credential(e) => e.to_string(),
            ApiError::Payment(PaymentError::Ledger(_)) => INTERNAL_ERROR_MESSAGE.to_string(),
            ApiError::Payment(e) => e.to_string(),
        }
    }
}

/// HTTP status for an error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::NotConfigured => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::UpstreamPaymentError
        | ErrorCode::UpstreamLookupError
        | ErrorCode::UpstreamUnavailable
        | ErrorCode::StoreWriteFailed
        | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.code();
        let body = ErrorResponse::new(code, self.message());
        (status_for(code), Json(body)).into_response()
    }
}
