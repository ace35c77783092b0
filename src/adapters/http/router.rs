//! Top-level router: mounts every endpoint group and the tower middleware.

use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use super::credentials::credential_routes;
use super::error::ErrorResponse;
use super::payment::payment_routes;
use super::state::AppState;

/// Header carrying the id assigned to each request. `x-request-id` is left
/// to the provider, whose webhook signature covers it.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Sequential request ids, prefixed with the process start second.
#[derive(Clone)]
pub struct CorrelationIds {
    prefix: i64,
    next: Arc<AtomicU64>,
}

impl CorrelationIds {
    pub fn new() -> Self {
        Self {
            prefix: chrono::Utc::now().timestamp(),
            next: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for CorrelationIds {
    fn default() -> Self {
        Self::new()
    }
}

impl MakeRequestId for CorrelationIds {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        HeaderValue::from_str(&format!("{:x}-{}", self.prefix, n))
            .ok()
            .map(RequestId::new)
    }
}

/// GET /health
async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "Handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::DELETE, Method::OPTIONS];
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(cors::Any)
            .allow_methods(methods)
            .allow_headers(cors::Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(cors::Any)
    }
}

/// Build the complete application router.
///
/// `cors_origins` restricts cross-origin access; any origin is allowed when
/// it is empty.
pub fn api_router(state: AppState, cors_origins: &[String]) -> Router {
    let correlation_header = HeaderName::from_static(CORRELATION_ID_HEADER);

    Router::new()
        .route("/health", get(health))
        .nest("/api/credentials", credential_routes())
        .nest("/api/mercadopago", payment_routes())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(correlation_header.clone()))
        .layer(SetRequestIdLayer::new(correlation_header, CorrelationIds::new()))
        .layer(cors_layer(cors_origins))
        .with_state(state)
}
