//! HTTP adapter for payment endpoints.
//!
//! - `POST /api/mercadopago/payments` - Create a PIX payment
//! - `GET /api/mercadopago/payments/:id` - Payment status
//! - `POST /api/mercadopago/webhook` - Provider notifications
//! - `GET /api/mercadopago/ledger` - Recorded payments
//! - `GET /api/mercadopago/ledger/:external_reference` - One recorded payment

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{notification_url, WEBHOOK_PATH};
pub use routes::payment_routes;
