//! Axum router configuration for credential endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{clear_credentials, get_credential_status, save_credentials, test_credentials};
use crate::adapters::http::state::AppState;

/// Create the credentials router, mounted at `/api/credentials`.
///
/// # Routes
/// - `GET /status` - Redacted status
/// - `POST /` - Save credentials
/// - `DELETE /` - Remove credentials
/// - `POST /test` - Test an access token
pub fn credential_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(save_credentials).delete(clear_credentials))
        .route("/status", get(get_credential_status))
        .route("/test", post(test_credentials))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::adapters::mercadopago::MockPaymentGateway;
    use crate::adapters::storage::{InMemoryCredentialStore, InMemoryPaymentLedger};

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn test_state(store: &InMemoryCredentialStore, gateway: &MockPaymentGateway) -> AppState {
        AppState {
            credential_store: Arc::new(store.clone()),
            payment_gateway: Arc::new(gateway.clone()),
            payment_ledger: Arc::new(InMemoryPaymentLedger::new()),
            webhook_verifier: None,
            couple_names: "Kriscia e Iverson".to_string(),
            public_base_url: None,
        }
    }

    fn app(store: &InMemoryCredentialStore, gateway: &MockPaymentGateway) -> Router {
        Router::new()
            .nest("/api/credentials", credential_routes())
            .with_state(test_state(store, gateway))
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Router Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn status_defaults_to_demo() {
        let (status, json) = send(
            app(&InMemoryCredentialStore::new(), &MockPaymentGateway::new()),
            Method::GET,
            "/api/credentials/status",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({"isConfigured": false, "environment": "demo", "isValid": false})
        );
    }

    #[tokio::test]
    async fn save_then_status_reports_sandbox() {
        let store = InMemoryCredentialStore::new();
        let gateway = MockPaymentGateway::new();

        let (status, json) = send(
            app(&store, &gateway),
            Method::POST,
            "/api/credentials",
            Some(json!({
                "accessToken": "TEST-123",
                "publicKey": "TEST-456",
                "environment": "sandbox"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Credenciais salvas com sucesso");
        assert_eq!(json["isValid"], true);

        let (_, json) = send(app(&store, &gateway), Method::GET, "/api/credentials/status", None).await;
        assert_eq!(json["isConfigured"], true);
        assert_eq!(json["environment"], "sandbox");
        assert!(json["lastTested"].is_string());
        assert!(json.get("accessToken").is_none());
    }

    #[tokio::test]
    async fn save_with_wrong_prefix_is_400() {
        let (status, json) = send(
            app(&InMemoryCredentialStore::new(), &MockPaymentGateway::new()),
            Method::POST,
            "/api/credentials",
            Some(json!({
                "accessToken": "APP_USR-1",
                "publicKey": "APP_USR-2",
                "environment": "sandbox"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Credenciais de sandbox devem começar com TEST-");
    }

    #[tokio::test]
    async fn save_write_failure_is_500() {
        let store = InMemoryCredentialStore::new();
        store.fail_writes(true).await;

        let (status, json) = send(
            app(&store, &MockPaymentGateway::new()),
            Method::POST,
            "/api/credentials",
            Some(json!({
                "accessToken": "TEST-1",
                "publicKey": "TEST-2",
                "environment": "sandbox"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Erro ao salvar credenciais");
        assert_eq!(json["code"], "STORE_WRITE_FAILED");
    }

    #[tokio::test]
    async fn test_without_token_is_400() {
        let (status, json) = send(
            app(&InMemoryCredentialStore::new(), &MockPaymentGateway::new()),
            Method::POST,
            "/api/credentials/test",
            Some(json!({"environment": "sandbox"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Access Token é obrigatório");
    }

    #[tokio::test]
    async fn test_reports_connection_failure_as_200() {
        let gateway = MockPaymentGateway::new();
        gateway.reject_token("TEST-bad");

        let (status, json) = send(
            app(&InMemoryCredentialStore::new(), &gateway),
            Method::POST,
            "/api/credentials/test",
            Some(json!({"accessToken": "TEST-bad", "environment": "sandbox"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Erro na conexão: Erro 401: Unauthorized");
    }

    #[tokio::test]
    async fn delete_without_file_succeeds() {
        let (status, json) = send(
            app(&InMemoryCredentialStore::new(), &MockPaymentGateway::new()),
            Method::DELETE,
            "/api/credentials",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Credenciais removidas com sucesso");
    }
}
