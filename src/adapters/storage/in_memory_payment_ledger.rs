//! In-Memory Payment Ledger Adapter
//!
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::Timestamp;
use crate::domain::payment::{LedgerEntry, PaymentStatus, StatusChange};
use crate::ports::{LedgerError, PaymentLedger};

/// In-memory payment ledger
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentLedger {
    entries: Arc<RwLock<HashMap<String, LedgerEntry>>>,
}

impl InMemoryPaymentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl PaymentLedger for InMemoryPaymentLedger {
    async fn record(&self, entry: LedgerEntry) -> Result<(), LedgerError> {
        let mut entries = self.entries.write().await;
        let entry = match entries.get(&entry.external_reference) {
            Some(previous) => entry.superseding(previous),
            None => entry,
        };
        entries.insert(entry.external_reference.clone(), entry);
        Ok(())
    }

    async fn find(&self, external_reference: &str) -> Result<Option<LedgerEntry>, LedgerError> {
        Ok(self.entries.read().await.get(external_reference).cloned())
    }

    async fn find_by_payment_id(
        &self,
        payment_id: &str,
    ) -> Result<Option<LedgerEntry>, LedgerError> {
        Ok(self
            .entries
            .read()
            .await
            .values()
            .find(|entry| entry.payment_id == payment_id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<LedgerEntry>, LedgerError> {
        let mut entries: Vec<LedgerEntry> = self.entries.read().await.values().cloned().collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    async fn update_status(
        &self,
        external_reference: &str,
        status: PaymentStatus,
        status_detail: Option<String>,
        now: Timestamp,
    ) -> Result<Option<StatusChange>, LedgerError> {
        let mut entries = self.entries.write().await;
        let Some(entry) = entries.get_mut(external_reference) else {
            return Ok(None);
        };

        let mut updated = entry.clone();
        let change = updated.apply_status(status, status_detail, now).map_err(|e| {
            LedgerError::InvalidTransition {
                external_reference: external_reference.to_string(),
                reason: e.to_string(),
            }
        })?;
        *entry = updated;
        Ok(Some(change))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentRequest;

    fn entry(reference: &str) -> LedgerEntry {
        let request = PaymentRequest {
            amount: 60.0,
            description: "Taças".to_string(),
            payer_email: "amiga@example.com".to_string(),
            payer_name: "Amiga".to_string(),
            external_reference: reference.to_string(),
            product_id: None,
        };
        LedgerEntry::from_created(&request, "555", PaymentStatus::Pending, None, Timestamp::now())
    }

    #[tokio::test]
    async fn record_find_update() {
        let ledger = InMemoryPaymentLedger::new();
        ledger.record(entry("ref-a")).await.unwrap();
        assert_eq!(ledger.len().await, 1);

        let change = ledger
            .update_status("ref-a", PaymentStatus::Approved, None, Timestamp::now())
            .await
            .unwrap();

        assert_eq!(change, Some(StatusChange::Updated));
        assert_eq!(
            ledger.find_by_payment_id("555").await.unwrap().unwrap().status,
            PaymentStatus::Approved
        );
    }

    #[tokio::test]
    async fn rejected_transition_is_an_error() {
        let ledger = InMemoryPaymentLedger::new();
        ledger.record(entry("ref-a")).await.unwrap();
        ledger
            .update_status("ref-a", PaymentStatus::Cancelled, None, Timestamp::now())
            .await
            .unwrap();

        let result = ledger
            .update_status("ref-a", PaymentStatus::Pending, None, Timestamp::now())
            .await;

        assert!(matches!(result, Err(LedgerError::InvalidTransition { .. })));
        assert!(!ledger.is_empty().await);
    }
}
