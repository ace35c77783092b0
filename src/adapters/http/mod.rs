//! HTTP adapters - REST API implementations.
//!
//! Each endpoint group has its own module with DTOs, handlers and routes.
//! [`api_router`] assembles them with the shared middleware stack.

pub mod credentials;
pub mod error;
pub mod payment;
pub mod router;
pub mod state;

// Re-export key types for convenience
pub use error::{ApiError, ErrorResponse};
pub use router::{api_router, CORRELATION_ID_HEADER};
pub use state::AppState;
