pub use aes_gcm::Error as AesGcmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("Key derivation needs at least one iteration")]
    InvalidIterations,

    #[error("Encryption error")]
    EncryptionFailed(AesGcmError),

    /// Wrong password or tampered data, the authentication tag did not verify
    #[error("Decryption failed: wrong password or corrupted data")]
    AuthenticationFailed,

    #[error("Encrypted payload too short: {len} bytes, at least {min} bytes expected")]
    PayloadTooShort { len: usize, min: usize },
}
