//! Ledger query handlers.

use std::sync::Arc;

use crate::domain::payment::{LedgerEntry, PaymentError};
use crate::ports::PaymentLedger;

/// Query for every ledger entry.
#[derive(Debug, Clone, Default)]
pub struct ListLedgerQuery;

/// Query for one entry by external reference.
#[derive(Debug, Clone)]
pub struct GetLedgerEntryQuery {
    pub external_reference: String,
}

pub struct ListLedgerHandler {
    ledger: Arc<dyn PaymentLedger>,
}

impl ListLedgerHandler {
    pub fn new(ledger: Arc<dyn PaymentLedger>) -> Self {
        Self { ledger }
    }

    /// Newest first.
    pub async fn handle(&self, _query: ListLedgerQuery) -> Result<Vec<LedgerEntry>, PaymentError> {
        self.ledger.list().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to list ledger");
            PaymentError::Ledger(e.to_string())
        })
    }
}

pub struct GetLedgerEntryHandler {
    ledger: Arc<dyn PaymentLedger>,
}

impl GetLedgerEntryHandler {
    pub fn new(ledger: Arc<dyn PaymentLedger>) -> Self {
        Self { ledger }
    }

    pub async fn handle(&self, query: GetLedgerEntryQuery) -> Result<LedgerEntry, PaymentError> {
        self.ledger
            .find(&query.external_reference)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to read ledger");
                PaymentError::Ledger(e.to_string())
            })?
            .ok_or(PaymentError::NotFound(query.external_reference))
    }
}
