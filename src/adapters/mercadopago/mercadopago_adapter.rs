//! Mercado Pago payment gateway adapter.
//!
//! Implements the `PaymentGateway` port over the Mercado Pago REST API using
//! bearer-token authentication. Each call is a single round trip: no retries.
//!
//! # Configuration
//!
//! ```ignore
//! let config = MercadoPagoConfig::new().with_base_url("http://localhost:9999");
//! let gateway = MercadoPagoGateway::new(config);
//! ```

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::domain::credentials::{ConnectionTest, ProviderEnvironment};
use crate::domain::payment::validate_payment_id;
use crate::ports::{GatewayError, PaymentGateway, PixPaymentOrder, ProviderPayment};

use super::api_types::{ApiErrorBody, CreatePaymentBody};

/// Production API host.
pub const DEFAULT_API_BASE_URL: &str = "https://api.mercadopago.com";

/// Mercado Pago API configuration.
#[derive(Debug, Clone)]
pub struct MercadoPagoConfig {
    /// Base URL for the API (default: https://api.mercadopago.com).
    api_base_url: String,
}

impl MercadoPagoConfig {
    pub fn new() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl Default for MercadoPagoConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Mercado Pago payment gateway.
pub struct MercadoPagoGateway {
    config: MercadoPagoConfig,
    http_client: reqwest::Client,
}

impl MercadoPagoGateway {
    pub fn new(config: MercadoPagoConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }
}

/// Canonical reason phrase for a status, e.g. `Unauthorized`.
fn reason_phrase(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown")
}

#[async_trait]
impl PaymentGateway for MercadoPagoGateway {
    async fn test_connection(
        &self,
        access_token: &SecretString,
        environment: ProviderEnvironment,
    ) -> ConnectionTest {
        let result = self
            .http_client
            .get(self.url("/v1/account/settings"))
            .bearer_auth(access_token.expose_secret())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                tracing::info!(%environment, "Mercado Pago connection test succeeded");
                ConnectionTest::succeeded(environment)
            }
            Ok(response) => {
                let status = response.status();
                tracing::warn!(%environment, status = status.as_u16(), "Mercado Pago connection test rejected");
                ConnectionTest::failed(format!("Erro {}: {}", status.as_u16(), reason_phrase(status)))
            }
            Err(e) => {
                tracing::warn!(%environment, error = %e, "Mercado Pago connection test failed");
                ConnectionTest::failed(e)
            }
        }
    }

    async fn create_payment(
        &self,
        access_token: &SecretString,
        order: PixPaymentOrder,
    ) -> Result<Value, GatewayError> {
        let idempotency_key = order.external_reference.clone();
        let body = CreatePaymentBody::from(order);

        let response = self
            .http_client
            .post(self.url("/v1/payments"))
            .bearer_auth(access_token.expose_secret())
            .header("X-Idempotency-Key", &idempotency_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body: ApiErrorBody = response.json().await.unwrap_or_default();
            let message = error_body
                .best_message()
                .unwrap_or_else(|| reason_phrase(status).to_string());
            tracing::error!(
                status = status.as_u16(),
                error = %message,
                external_reference = %idempotency_key,
                "Mercado Pago create_payment failed"
            );
            return Err(GatewayError::http(status.as_u16(), message));
        }

        response.json().await.map_err(|e| {
            GatewayError::invalid_response(format!("Failed to parse Mercado Pago response: {}", e))
        })
    }

    async fn get_payment(
        &self,
        access_token: &SecretString,
        payment_id: &str,
    ) -> Result<ProviderPayment, GatewayError> {
        let payment_id =
            validate_payment_id(payment_id).map_err(|e| GatewayError::invalid_request(e.to_string()))?;

        let response = self
            .http_client
            .get(self.url(&format!("/v1/payments/{}", payment_id)))
            .bearer_auth(access_token.expose_secret())
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), payment_id, "Mercado Pago get_payment failed");
            return Err(GatewayError::http(status.as_u16(), reason_phrase(status)));
        }

        let value: Value = response.json().await.map_err(|e| {
            GatewayError::invalid_response(format!("Failed to parse Mercado Pago response: {}", e))
        })?;

        ProviderPayment::from_json(&value)
            .ok_or_else(|| GatewayError::invalid_response("payment without id or status"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Path;
    use axum::http::{HeaderMap, StatusCode as AxumStatus};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use crate::ports::GatewayErrorCode;

    /// Serve `router` on an ephemeral port and return its base URL.
    async fn spawn_provider(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn token() -> SecretString {
        SecretString::new("TEST-token".to_string())
    }

    fn order() -> PixPaymentOrder {
        PixPaymentOrder {
            amount: 75.5,
            description: "Panela de pressão".to_string(),
            payer_email: "x@example.com".to_string(),
            payer_first_name: "Bia".to_string(),
            payer_last_name: "Silva".to_string(),
            external_reference: "gift-1-99".to_string(),
            notification_url: "http://localhost/api/mercadopago/webhook".to_string(),
            couple_names: "Kriscia e Iverson".to_string(),
            product_tag: "1".to_string(),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn config_defaults_to_production_host() {
        assert_eq!(MercadoPagoConfig::new().api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn config_with_base_url_trims_trailing_slash() {
        let config = MercadoPagoConfig::new().with_base_url("http://localhost:8080/");
        assert_eq!(config.api_base_url(), "http://localhost:8080");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Connection Test
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn connection_test_succeeds_on_2xx() {
        let base = spawn_provider(Router::new().route(
            "/v1/account/settings",
            get(|headers: HeaderMap| async move {
                let auth = headers.get("authorization").unwrap().to_str().unwrap().to_string();
                assert_eq!(auth, "Bearer TEST-token");
                Json(json!({}))
            }),
        ))
        .await;
        let gateway = MercadoPagoGateway::new(MercadoPagoConfig::new().with_base_url(base));

        let test = gateway.test_connection(&token(), ProviderEnvironment::Sandbox).await;

        assert!(test.success);
        assert_eq!(test.message, "Conexão bem-sucedida com ambiente sandbox");
    }

    #[tokio::test]
    async fn connection_test_reports_status_and_reason() {
        let base = spawn_provider(Router::new().route(
            "/v1/account/settings",
            get(|| async { AxumStatus::UNAUTHORIZED }),
        ))
        .await;
        let gateway = MercadoPagoGateway::new(MercadoPagoConfig::new().with_base_url(base));

        let test = gateway.test_connection(&token(), ProviderEnvironment::Production).await;

        assert!(!test.success);
        assert_eq!(test.message, "Erro na conexão: Erro 401: Unauthorized");
    }

    #[tokio::test]
    async fn connection_test_reports_network_failure() {
        let gateway = MercadoPagoGateway::new(
            MercadoPagoConfig::new().with_base_url("http://127.0.0.1:1"),
        );

        let test = gateway.test_connection(&token(), ProviderEnvironment::Sandbox).await;

        assert!(!test.success);
        assert!(test.message.starts_with("Erro na conexão: "));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Payment Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn create_payment_sends_idempotency_key_and_returns_body() {
        let seen: Arc<Mutex<Option<(String, Value)>>> = Arc::default();
        let captured = seen.clone();
        let base = spawn_provider(Router::new().route(
            "/v1/payments",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let captured = captured.clone();
                async move {
                    let key = headers
                        .get("x-idempotency-key")
                        .map(|v| v.to_str().unwrap().to_string())
                        .unwrap_or_default();
                    *captured.lock().unwrap() = Some((key, body));
                    (
                        AxumStatus::CREATED,
                        Json(json!({
                            "id": 1319,
                            "status": "pending",
                            "point_of_interaction": {"transaction_data": {"qr_code": "000201"}}
                        })),
                    )
                }
            }),
        ))
        .await;
        let gateway = MercadoPagoGateway::new(MercadoPagoConfig::new().with_base_url(base));

        let payment = gateway.create_payment(&token(), order()).await.unwrap();

        assert_eq!(payment["id"], 1319);
        assert_eq!(payment["point_of_interaction"]["transaction_data"]["qr_code"], "000201");
        let (key, body) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(key, "gift-1-99");
        assert_eq!(body["payment_method_id"], "pix");
        assert_eq!(body["metadata"]["product_id"], "1");
    }

    #[tokio::test]
    async fn create_payment_surfaces_provider_message() {
        let base = spawn_provider(Router::new().route(
            "/v1/payments",
            post(|| async {
                (
                    AxumStatus::BAD_REQUEST,
                    Json(json!({"message": "payer.email must be a valid email"})),
                )
            }),
        ))
        .await;
        let gateway = MercadoPagoGateway::new(MercadoPagoConfig::new().with_base_url(base));

        let err = gateway.create_payment(&token(), order()).await.unwrap_err();

        assert_eq!(err.status, Some(400));
        assert_eq!(err.message, "payer.email must be a valid email");
    }

    #[tokio::test]
    async fn create_payment_falls_back_to_reason_phrase() {
        let base = spawn_provider(Router::new().route(
            "/v1/payments",
            post(|| async { AxumStatus::BAD_GATEWAY }),
        ))
        .await;
        let gateway = MercadoPagoGateway::new(MercadoPagoConfig::new().with_base_url(base));

        let err = gateway.create_payment(&token(), order()).await.unwrap_err();

        assert_eq!(err.status, Some(502));
        assert_eq!(err.message, "Bad Gateway");
    }

    #[tokio::test]
    async fn get_payment_reads_status() {
        let base = spawn_provider(Router::new().route(
            "/v1/payments/:id",
            get(|Path(id): Path<String>| async move {
                Json(json!({
                    "id": id.parse::<u64>().unwrap(),
                    "status": "approved",
                    "status_detail": "accredited",
                    "external_reference": "gift-1-99"
                }))
            }),
        ))
        .await;
        let gateway = MercadoPagoGateway::new(MercadoPagoConfig::new().with_base_url(base));

        let payment = gateway.get_payment(&token(), "777").await.unwrap();

        assert_eq!(payment.id, "777");
        assert_eq!(payment.status, "approved");
        assert_eq!(payment.external_reference.as_deref(), Some("gift-1-99"));
    }

    #[tokio::test]
    async fn get_payment_not_found_is_http_error() {
        let base = spawn_provider(Router::new().route(
            "/v1/payments/:id",
            get(|| async { AxumStatus::NOT_FOUND }),
        ))
        .await;
        let gateway = MercadoPagoGateway::new(MercadoPagoConfig::new().with_base_url(base));

        let err = gateway.get_payment(&token(), "1").await.unwrap_err();

        assert_eq!(err.status, Some(404));
    }

    #[tokio::test]
    async fn get_payment_refuses_ids_outside_payment_path() {
        let hits: Arc<Mutex<Vec<String>>> = Arc::default();
        let seen = hits.clone();
        let base = spawn_provider(Router::new().fallback(move |uri: axum::http::Uri| {
            let seen = seen.clone();
            async move {
                seen.lock().unwrap().push(uri.path().to_string());
                Json(json!({"id": 1, "status": "approved"}))
            }
        }))
        .await;
        let gateway = MercadoPagoGateway::new(MercadoPagoConfig::new().with_base_url(base));

        let err = gateway.get_payment(&token(), "../../users/me").await.unwrap_err();

        assert_eq!(err.code, GatewayErrorCode::InvalidRequest);
        assert!(hits.lock().unwrap().is_empty());
    }
}
