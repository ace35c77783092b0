//! Crypto Adapters
//!
//! Symmetric encryption for data stored at rest.

mod aes_cipher;

pub use aes_cipher::{CredentialCipher, DecryptionError, EncryptionError};
