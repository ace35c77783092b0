//! HTTP adapter for credential endpoints.
//!
//! - `GET /api/credentials/status` - Redacted status
//! - `POST /api/credentials` - Save credentials
//! - `POST /api/credentials/test` - Test an access token
//! - `DELETE /api/credentials` - Remove credentials

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::credential_routes;
