//! Payment operation errors.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotConfigured | 400 |
//! | Validation | 400 |
//! | NotFound | 404 |
//! | UpstreamPayment | 500 |
//! | UpstreamLookup | 500 |
//! | Network | 500 |
//! | Ledger | 500 |

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised by payment commands and queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaymentError {
    #[error("Mercado Pago não configurado")]
    NotConfigured,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Pagamento não encontrado: {0}")]
    NotFound(String),

    #[error("Erro na API do Mercado Pago: {status} - {message}")]
    UpstreamPayment { status: u16, message: String },

    #[error("Erro ao consultar pagamento: {status}")]
    UpstreamLookup { status: u16 },

    #[error("Erro de comunicação com o Mercado Pago: {0}")]
    Network(String),

    #[error("Erro ao consultar registro de pagamentos")]
    Ledger(String),
}

impl PaymentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PaymentError::NotConfigured => ErrorCode::NotConfigured,
            PaymentError::Validation(_) => ErrorCode::ValidationFailed,
            PaymentError::NotFound(_) => ErrorCode::NotFound,
            PaymentError::UpstreamPayment { .. } => ErrorCode::UpstreamPaymentError,
            PaymentError::UpstreamLookup { .. } => ErrorCode::UpstreamLookupError,
            PaymentError::Network(_) => ErrorCode::UpstreamUnavailable,
            PaymentError::Ledger(_) => ErrorCode::InternalError,
        }
    }
}
