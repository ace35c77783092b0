//! Mock payment gateway for testing.
//!
//! Provides a configurable mock implementation of `PaymentGateway` for unit
//! and integration tests. Supports:
//! - Pre-configured payments and connection results
//! - Error injection
//! - Call tracking

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::domain::credentials::{ConnectionTest, ProviderEnvironment};
use crate::ports::{GatewayError, PaymentGateway, PixPaymentOrder, ProviderPayment};

/// Mock payment gateway for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentGateway::new();
/// mock.add_payment(ProviderPayment { id: "1".into(), status: "approved".into(), .. });
/// mock.set_error("create_payment", GatewayError::http(400, "bad payer"));
/// ```
#[derive(Clone, Default)]
pub struct MockPaymentGateway {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Payments returned by `get_payment`, by id.
    payments: HashMap<String, ProviderPayment>,

    /// Id assigned to the next created payment.
    next_payment_id: u64,

    /// Tokens `test_connection` rejects.
    rejected_tokens: Vec<String>,

    /// Specific errors by method name.
    method_errors: HashMap<String, GatewayError>,

    /// Orders received by `create_payment`.
    orders: Vec<PixPaymentOrder>,

    /// Track method calls for assertions.
    call_log: Vec<MethodCall>,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Make `test_connection` fail with 401 for `token`.
    pub fn reject_token(&self, token: impl Into<String>) {
        self.state().rejected_tokens.push(token.into());
    }

    /// Add a payment to the "provider".
    pub fn add_payment(&self, payment: ProviderPayment) {
        let id = payment.id.clone();
        self.state().payments.insert(id, payment);
    }

    /// Make `method` fail with `error` until cleared.
    pub fn set_error(&self, method: &str, error: GatewayError) {
        self.state().method_errors.insert(method.to_string(), error);
    }

    pub fn clear_errors(&self) {
        self.state().method_errors.clear();
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Assertions
    // ════════════════════════════════════════════════════════════════════════════

    pub fn calls(&self) -> Vec<MethodCall> {
        self.state().call_log.clone()
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.state()
            .call_log
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    /// Orders received by `create_payment`, oldest first.
    pub fn orders(&self) -> Vec<PixPaymentOrder> {
        self.state().orders.clone()
    }

    fn record_call(&self, method: &str, args: Vec<String>) -> Option<GatewayError> {
        let mut state = self.state();
        state.call_log.push(MethodCall {
            method: method.to_string(),
            args,
        });
        state.method_errors.get(method).cloned()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn test_connection(
        &self,
        access_token: &SecretString,
        environment: ProviderEnvironment,
    ) -> ConnectionTest {
        let token = access_token.expose_secret().to_string();
        if let Some(error) = self.record_call("test_connection", vec![environment.to_string()]) {
            return ConnectionTest::failed(error.message);
        }
        if self.state().rejected_tokens.contains(&token) {
            return ConnectionTest::failed("Erro 401: Unauthorized");
        }
        ConnectionTest::succeeded(environment)
    }

    async fn create_payment(
        &self,
        _access_token: &SecretString,
        order: PixPaymentOrder,
    ) -> Result<Value, GatewayError> {
        if let Some(error) =
            self.record_call("create_payment", vec![order.external_reference.clone()])
        {
            return Err(error);
        }

        let mut state = self.state();
        state.next_payment_id += 1;
        let id = 1_000_000 + state.next_payment_id;
        state.payments.insert(
            id.to_string(),
            ProviderPayment {
                id: id.to_string(),
                status: "pending".to_string(),
                status_detail: Some("pending_waiting_transfer".to_string()),
                external_reference: Some(order.external_reference.clone()),
            },
        );
        let response = json!({
            "id": id,
            "status": "pending",
            "status_detail": "pending_waiting_transfer",
            "transaction_amount": order.amount,
            "external_reference": order.external_reference,
            "point_of_interaction": {
                "transaction_data": {
                    "qr_code": format!("00020126-mock-{}", id),
                    "qr_code_base64": "iVBORw0KGgo="
                }
            }
        });
        state.orders.push(order);
        Ok(response)
    }

    async fn get_payment(
        &self,
        _access_token: &SecretString,
        payment_id: &str,
    ) -> Result<ProviderPayment, GatewayError> {
        if let Some(error) = self.record_call("get_payment", vec![payment_id.to_string()]) {
            return Err(error);
        }
        self.state()
            .payments
            .get(payment_id)
            .cloned()
            .ok_or_else(|| GatewayError::http(404, "Not Found"))
    }
}
