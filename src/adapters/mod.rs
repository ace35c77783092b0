//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `crypto` - AES-256-GCM cipher for the credential file
//! - `storage` - Encrypted credential file and payment ledger (file and in-memory)
//! - `mercadopago` - Mercado Pago REST client and a mock gateway
//! - `http` - Axum routes, DTOs and middleware

pub mod crypto;
pub mod http;
pub mod mercadopago;
pub mod storage;

pub use crypto::CredentialCipher;
pub use mercadopago::{MercadoPagoConfig, MercadoPagoGateway, MockPaymentGateway};
pub use storage::{
    EncryptedFileCredentialStore, FilePaymentLedger, InMemoryCredentialStore,
    InMemoryPaymentLedger,
};
