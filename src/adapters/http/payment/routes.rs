//! Axum router configuration for payment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_payment, get_ledger_entry, get_payment_status, handle_webhook, list_ledger,
};
use crate::adapters::http::state::AppState;

/// Create the payment router, mounted at `/api/mercadopago`.
///
/// # Routes
/// - `POST /payments` - Create a PIX payment
/// - `GET /payments/:id` - Provider status of a payment
/// - `POST /webhook` - Provider notifications (signature checked when configured)
/// - `GET /ledger` - Recorded payments
/// - `GET /ledger/:external_reference` - One recorded payment
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/payments", post(create_payment))
        .route("/payments/:id", get(get_payment_status))
        .route("/webhook", post(handle_webhook))
        .route("/ledger", get(list_ledger))
        .route("/ledger/:external_reference", get(get_ledger_entry))
}
