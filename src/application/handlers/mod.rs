//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod credentials;
pub mod payment;

pub use credentials::{
    ClearCredentialsCommand, ClearCredentialsHandler, CredentialStatus,
    GetCredentialStatusHandler, GetCredentialStatusQuery, SaveCredentialsCommand,
    SaveCredentialsHandler, SaveCredentialsResult, TestCredentialsCommand,
    TestCredentialsHandler,
};
pub use payment::{
    CreatePaymentCommand, CreatePaymentHandler, GetLedgerEntryHandler, GetLedgerEntryQuery,
    GetPaymentStatusHandler, GetPaymentStatusQuery, HandleWebhookCommand, HandleWebhookHandler,
    ListLedgerHandler, ListLedgerQuery, PaymentStatusView, WebhookOutcome,
};
