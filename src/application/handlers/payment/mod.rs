//! Payment handlers.
//!
//! ## Commands
//! - Creating a PIX payment
//! - Receiving provider notifications
//!
//! ## Queries
//! - Provider status of one payment
//! - Ledger listing and lookup

mod create_payment;
mod get_payment_status;
mod handle_webhook;
mod ledger_queries;
mod provider_access;

// Commands
pub use create_payment::{CreatePaymentCommand, CreatePaymentHandler};
pub use handle_webhook::{HandleWebhookCommand, HandleWebhookHandler, WebhookOutcome};

// Queries
pub use get_payment_status::{GetPaymentStatusHandler, GetPaymentStatusQuery, PaymentStatusView};
pub use ledger_queries::{
    GetLedgerEntryHandler, GetLedgerEntryQuery, ListLedgerHandler, ListLedgerQuery,
};
