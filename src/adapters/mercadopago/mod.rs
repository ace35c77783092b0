//! Mercado Pago payment gateway adapter.
//!
//! Implements the `PaymentGateway` port for Mercado Pago, including:
//! - Credential connectivity checks
//! - PIX payment creation with idempotency keys
//! - Payment lookup
//!
//! # Security
//!
//! - The access token is passed per call as a `secrecy::SecretString` and
//!   never logged

mod api_types;
mod mercadopago_adapter;
mod mock_payment_gateway;

pub use api_types::{CreatePaymentBody, Payer, PaymentMetadata};
pub use mercadopago_adapter::{MercadoPagoConfig, MercadoPagoGateway, DEFAULT_API_BASE_URL};
pub use mock_payment_gateway::{MethodCall, MockPaymentGateway};
