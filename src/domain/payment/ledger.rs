//! Ledger entries: the server-side record of every payment created.

use serde::{Deserialize, Serialize};

use super::{PaymentRequest, PaymentStatus};
use crate::domain::foundation::{StateMachine, Timestamp, ValidationError};

/// One payment as known to this server, keyed by its external reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub external_reference: String,
    /// Provider payment id.
    pub payment_id: String,
    pub amount: f64,
    pub description: String,
    pub payer_name: String,
    pub payer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_detail: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Result of applying a provider status to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// Status or detail changed.
    Updated,
    /// Already in that state.
    Unchanged,
}

impl LedgerEntry {
    /// Entry for a payment the provider just created.
    pub fn from_created(
        request: &PaymentRequest,
        payment_id: impl Into<String>,
        status: PaymentStatus,
        status_detail: Option<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            external_reference: request.external_reference.clone(),
            payment_id: payment_id.into(),
            amount: request.amount,
            description: request.description.clone(),
            payer_name: request.payer_name.clone(),
            payer_email: request.payer_email.clone(),
            product_id: request.product_id,
            status,
            status_detail,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replacement for `previous` when the same reference is recorded again.
    ///
    /// Keeps the original creation time and never moves a settled status
    /// backwards.
    pub fn superseding(mut self, previous: &LedgerEntry) -> Self {
        self.created_at = previous.created_at;
        if !previous.status.can_transition_to(&self.status) {
            self.status = previous.status;
            self.status_detail = previous.status_detail.clone();
        }
        self
    }

    /// Move the entry to `status` if the state machine allows it.
    ///
    /// Settled entries never go back to pending; the caller decides whether
    /// to log and ignore the returned error.
    pub fn apply_status(
        &mut self,
        status: PaymentStatus,
        status_detail: Option<String>,
        now: Timestamp,
    ) -> Result<StatusChange, ValidationError> {
        if self.status == status && self.status_detail == status_detail {
            return Ok(StatusChange::Unchanged);
        }
        if self.status != status {
            self.status = self.status.transition_to(status)?;
        }
        self.status_detail = status_detail;
        self.updated_at = now;
        Ok(StatusChange::Updated)
    }
}
