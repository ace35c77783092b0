//! Payment status state machine.
//!
//! Tracks a PIX payment from creation until the provider settles it.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Ledger status of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Created at the provider, waiting for the guest to pay the QR code.
    Pending,

    /// Money received.
    Approved,

    /// Provider refused the payment.
    Rejected,

    /// Expired, cancelled, refunded or charged back.
    Cancelled,
}

impl PaymentStatus {
    /// Map a Mercado Pago payment status onto the ledger status.
    ///
    /// `in_process`, `authorized`, `in_mediation` and unknown values all
    /// count as still pending.
    pub fn from_provider(status: &str) -> Self {
        match status {
            "approved" => PaymentStatus::Approved,
            "rejected" => PaymentStatus::Rejected,
            "cancelled" | "refunded" | "charged_back" => PaymentStatus::Cancelled,
            _ => PaymentStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Approved => "approved",
            PaymentStatus::Rejected => "rejected",
            PaymentStatus::Cancelled => "cancelled",
        }
    }
}

impl StateMachine for PaymentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PaymentStatus::*;
        matches!(
            (self, target),
            (Pending, Pending)
                | (Pending, Approved)
                | (Pending, Rejected)
                | (Pending, Cancelled)
                // Refund or chargeback after settlement
                | (Approved, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PaymentStatus::*;
        match self {
            Pending => vec![Pending, Approved, Rejected, Cancelled],
            Approved => vec![Cancelled],
            Rejected | Cancelled => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_provider_statuses() {
        assert_eq!(PaymentStatus::from_provider("approved"), PaymentStatus::Approved);
        assert_eq!(PaymentStatus::from_provider("rejected"), PaymentStatus::Rejected);
        assert_eq!(PaymentStatus::from_provider("refunded"), PaymentStatus::Cancelled);
        assert_eq!(PaymentStatus::from_provider("charged_back"), PaymentStatus::Cancelled);
        assert_eq!(PaymentStatus::from_provider("cancelled"), PaymentStatus::Cancelled);
        assert_eq!(PaymentStatus::from_provider("in_process"), PaymentStatus::Pending);
        assert_eq!(PaymentStatus::from_provider("something_new"), PaymentStatus::Pending);
    }

    #[test]
    fn pending_can_settle_any_way() {
        let status = PaymentStatus::Pending;
        assert_eq!(
            status.transition_to(PaymentStatus::Approved),
            Ok(PaymentStatus::Approved)
        );
        assert!(status.can_transition_to(&PaymentStatus::Rejected));
        assert!(status.can_transition_to(&PaymentStatus::Cancelled));
        assert!(status.can_transition_to(&PaymentStatus::Pending));
    }

    #[test]
    fn approved_can_only_be_reversed() {
        let status = PaymentStatus::Approved;
        assert!(status.can_transition_to(&PaymentStatus::Cancelled));
        assert!(status.transition_to(PaymentStatus::Pending).is_err());
        assert!(status.transition_to(PaymentStatus::Rejected).is_err());
    }

    #[test]
    fn rejected_and_cancelled_are_terminal() {
        assert!(PaymentStatus::Rejected.is_terminal());
        assert!(PaymentStatus::Cancelled.is_terminal());
        assert!(!PaymentStatus::Pending.is_terminal());
        assert!(!PaymentStatus::Approved.is_terminal());
    }

    #[test]
    fn transitions_are_consistent() {
        for status in [
            PaymentStatus::Pending,
            PaymentStatus::Approved,
            PaymentStatus::Rejected,
            PaymentStatus::Cancelled,
        ] {
            for target in status.valid_transitions() {
                assert!(status.can_transition_to(&target));
            }
        }
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Approved).unwrap(),
            "\"approved\""
        );
        assert_eq!(PaymentStatus::Cancelled.as_str(), "cancelled");
    }
}
