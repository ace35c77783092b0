//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CredentialStore` - the encrypted provider credential record
//! - `PaymentGateway` - the Mercado Pago REST API
//! - `PaymentLedger` - server-side record of created payments

mod credential_store;
mod payment_gateway;
mod payment_ledger;

pub use credential_store::{CredentialStore, CredentialStoreError};
pub use payment_gateway::{
    GatewayError, GatewayErrorCode, PaymentGateway, PixPaymentOrder, ProviderPayment,
};
pub use payment_ledger::{LedgerError, PaymentLedger};
