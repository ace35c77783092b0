//! Gift Registry - Credential vault and PIX payment proxy
//!
//! Keeps a single set of Mercado Pago credentials encrypted on disk and
//! proxies PIX payment creation, status lookups and webhook notifications
//! to the Mercado Pago API, so the browser never holds the provider token.
//! Payments are recorded in a server-side ledger that verified webhooks keep
//! current.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
