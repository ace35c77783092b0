//! Storage Adapters
//!
//! Implementations of the `CredentialStore` and `PaymentLedger` ports.
//!
//! ## Available Adapters
//!
//! - **EncryptedFileCredentialStore** - AES-GCM encrypted credential file
//! - **InMemoryCredentialStore** - credential record in memory (testing/development)
//! - **FilePaymentLedger** - payment ledger as a JSON file
//! - **InMemoryPaymentLedger** - payment ledger in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{EncryptedFileCredentialStore, FilePaymentLedger};
//!
//! let store = EncryptedFileCredentialStore::new("credentials.enc", cipher);
//! let ledger = FilePaymentLedger::new("payments.json");
//! ```

mod atomic_write;
mod encrypted_file_credential_store;
mod file_payment_ledger;
mod in_memory_credential_store;
mod in_memory_payment_ledger;

pub use encrypted_file_credential_store::EncryptedFileCredentialStore;
pub use file_payment_ledger::FilePaymentLedger;
pub use in_memory_credential_store::InMemoryCredentialStore;
pub use in_memory_payment_ledger::InMemoryPaymentLedger;
