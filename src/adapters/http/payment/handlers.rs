//! HTTP handlers for payment endpoints.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Json, Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    CreatePaymentCommand, GetLedgerEntryQuery, GetPaymentStatusQuery, HandleWebhookCommand,
    ListLedgerQuery,
};

use super::dto::{CreatePaymentRequest, PaymentStatusResponse};

/// Path the provider posts notifications to.
pub const WEBHOOK_PATH: &str = "/api/mercadopago/webhook";

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/mercadopago/payments - Create a PIX payment
pub async fn create_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreatePaymentCommand {
        request: request.into(),
        notification_url: notification_url(state.public_base_url.as_deref(), &headers),
    };

    let payment = state.create_payment_handler().handle(cmd).await?;

    Ok(Json(payment))
}

/// POST /api/mercadopago/webhook - Provider notifications, always 200
pub async fn handle_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    body: Bytes,
) -> impl IntoResponse {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let cmd = HandleWebhookCommand {
        body: body.to_vec(),
        signature: header_value("x-signature"),
        request_id: header_value("x-request-id"),
        query_data_id: params.get("data.id").or_else(|| params.get("id")).cloned(),
    };

    let outcome = state.webhook_handler().handle(cmd).await;
    tracing::debug!(?outcome, "Webhook handled");

    (StatusCode::OK, "OK")
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/mercadopago/payments/:id - Provider status of a payment
pub async fn get_payment_status(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let view = state
        .payment_status_handler()
        .handle(GetPaymentStatusQuery { payment_id })
        .await?;

    Ok(Json(PaymentStatusResponse::from(view)))
}

/// GET /api/mercadopago/ledger - Every recorded payment, newest first
pub async fn list_ledger(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let entries = state.list_ledger_handler().handle(ListLedgerQuery).await?;
    Ok(Json(entries))
}

/// GET /api/mercadopago/ledger/:external_reference - One recorded payment
pub async fn get_ledger_entry(
    State(state): State<AppState>,
    Path(external_reference): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = state
        .ledger_entry_handler()
        .handle(GetLedgerEntryQuery { external_reference })
        .await?;

    Ok(Json(entry))
}

// ════════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════════

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Webhook URL handed to the provider.
///
/// Uses the configured public base URL, else the request's
/// `X-Forwarded-Proto` (default `http`) and `Host`.
pub fn notification_url(public_base_url: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(base) = public_base_url {
        return format!("{}{}", base.trim_end_matches('/'), WEBHOOK_PATH);
    }

    let scheme = header_str(headers, "x-forwarded-proto")
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("http");
    let host = header_str(headers, header::HOST.as_str()).unwrap_or("localhost");

    format!("{}://{}{}", scheme, host, WEBHOOK_PATH)
}
