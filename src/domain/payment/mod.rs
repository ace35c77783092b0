//! Payment domain.
//!
//! PIX payment requests, the ledger status state machine and the ledger
//! entries that record every payment this server created.

mod errors;
mod ledger;
mod request;
mod status;

pub use errors::PaymentError;
pub use ledger::{LedgerEntry, StatusChange};
pub use request::{validate_payment_id, PayerName, PaymentRequest, DEFAULT_LAST_NAME};
pub use status::PaymentStatus;
