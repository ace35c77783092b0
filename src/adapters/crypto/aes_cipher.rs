//! AES-256-GCM encryption of the credential file contents.
//!
//! Output format is `nonce_hex:ciphertext_hex`, with a fresh 12-byte nonce
//! per call. The GCM tag is part of the ciphertext, so tampering and wrong
//! keys are detected on decrypt.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use rand::Rng;
use thiserror::Error;

use crate::config::ENCRYPTION_KEY_LEN;

/// 12-byte nonce size for AES-GCM
const NONCE_SIZE: usize = 12;

/// Errors from decrypting a stored value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecryptionError {
    #[error("missing ':' separator")]
    MissingSeparator,

    #[error("invalid hex encoding")]
    InvalidHex,

    #[error("nonce must be 12 bytes")]
    InvalidNonce,

    #[error("authentication failed (wrong key or tampered data)")]
    AuthenticationFailed,

    #[error("plaintext is not valid UTF-8")]
    InvalidUtf8,
}

/// Encryption failed inside the cipher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("encryption failed")]
pub struct EncryptionError;

/// Symmetric cipher holding the process-wide credential key.
#[derive(Clone)]
pub struct CredentialCipher {
    cipher: Aes256Gcm,
}

impl CredentialCipher {
    pub fn new(key: &[u8; ENCRYPTION_KEY_LEN]) -> Self {
        Self {
            cipher: Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key)),
        }
    }

    /// Encrypt `plaintext` under a fresh random nonce.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, EncryptionError> {
        let mut nonce_bytes = [0u8; NONCE_SIZE];
        rand::thread_rng().fill(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|_| EncryptionError)?;

        Ok(format!("{}:{}", hex::encode(nonce_bytes), hex::encode(ciphertext)))
    }

    /// Decrypt a value produced by [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, encoded: &str) -> Result<String, DecryptionError> {
        let (nonce_hex, ciphertext_hex) = encoded
            .trim()
            .split_once(':')
            .ok_or(DecryptionError::MissingSeparator)?;

        let nonce_bytes = hex::decode(nonce_hex).map_err(|_| DecryptionError::InvalidHex)?;
        if nonce_bytes.len() != NONCE_SIZE {
            return Err(DecryptionError::InvalidNonce);
        }
        let ciphertext = hex::decode(ciphertext_hex).map_err(|_| DecryptionError::InvalidHex)?;

        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(&nonce_bytes), ciphertext.as_ref())
            .map_err(|_| DecryptionError::AuthenticationFailed)?;

        String::from_utf8(plaintext).map_err(|_| DecryptionError::InvalidUtf8)
    }
}

impl std::fmt::Debug for CredentialCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CredentialCipher([REDACTED])")
    }
}
