//! # Payload Cipher
//!
//! Password based authenticated encryption for hidden payloads.
//! Keys are derived with PBKDF2-HMAC-SHA256 and the data is sealed with AES-256-GCM.
//!
//! The serialized layout is `salt (16) | iv (12) | ciphertext`, where the
//! ciphertext already carries the 16 byte authentication tag.
//!
//! ```rust
//! use stegframe_cipher::{decrypt_data, encrypt_data};
//!
//! let sealed = encrypt_data("hunter42", b"lorem ipsum").unwrap();
//! assert_eq!(decrypt_data("hunter42", &sealed).unwrap(), b"lorem ipsum");
//! assert!(decrypt_data("hunter43", &sealed).is_err());
//! ```

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroizing;

pub mod error;

pub use crate::error::CipherError;

/// Fixed protocol constant, encrypt and decrypt have to agree on it
pub const PBKDF2_ITERATIONS: u32 = 200_000;
pub const SALT_LEN: usize = 16;
pub const IV_LEN: usize = 12;
pub const TAG_LEN: usize = 16;
pub const KEY_LEN: usize = 32;

/// Bytes an encrypted payload adds on top of the plain data
pub const ENCRYPTION_OVERHEAD: usize = SALT_LEN + IV_LEN + TAG_LEN;

pub type Result<T> = std::result::Result<T, CipherError>;
pub type Key = Zeroizing<[u8; KEY_LEN]>;

/// salt, iv and ciphertext (tag included) of one sealed payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedPayload {
    pub salt: [u8; SALT_LEN],
    pub iv: [u8; IV_LEN],
    pub ciphertext: Vec<u8>,
}

impl EncryptedPayload {
    /// serializes as `salt | iv | ciphertext`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(SALT_LEN + IV_LEN + self.ciphertext.len());
        buf.extend_from_slice(&self.salt);
        buf.extend_from_slice(&self.iv);
        buf.extend_from_slice(&self.ciphertext);

        buf
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < ENCRYPTION_OVERHEAD {
            return Err(CipherError::PayloadTooShort {
                len: data.len(),
                min: ENCRYPTION_OVERHEAD,
            });
        }
        let (salt, rest) = data.split_at(SALT_LEN);
        let (iv, ciphertext) = rest.split_at(IV_LEN);

        let mut payload = Self {
            salt: [0u8; SALT_LEN],
            iv: [0u8; IV_LEN],
            ciphertext: ciphertext.to_vec(),
        };
        payload.salt.copy_from_slice(salt);
        payload.iv.copy_from_slice(iv);

        Ok(payload)
    }

    /// length of the serialized form
    pub fn serialized_len(&self) -> usize {
        SALT_LEN + IV_LEN + self.ciphertext.len()
    }
}

/// PBKDF2-HMAC-SHA256 of the password into a 256 bit key
pub fn derive_key(password: &str, salt: &[u8], iterations: u32) -> Result<Key> {
    if iterations == 0 {
        return Err(CipherError::InvalidIterations);
    }
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut *key);

    Ok(key)
}

/// encrypt with a fresh random salt and iv, never reused between calls
pub fn encrypt(plain: &[u8], password: &str) -> Result<EncryptedPayload> {
    let mut salt = [0u8; SALT_LEN];
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut salt);
    OsRng.fill_bytes(&mut iv);

    encrypt_with(plain, password, &salt, &iv)
}

/// encrypt with caller provided salt and iv
///
/// Only meant for reproducible output, e.g. known answer tests.
/// Reusing a salt/iv pair with the same password breaks AES-GCM.
pub fn encrypt_with(
    plain: &[u8],
    password: &str,
    salt: &[u8; SALT_LEN],
    iv: &[u8; IV_LEN],
) -> Result<EncryptedPayload> {
    let key = derive_key(password, salt, PBKDF2_ITERATIONS)?;
    let cipher = Aes256Gcm::new(aes_gcm::Key::<Aes256Gcm>::from_slice(&key[..]));
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(iv), plain)
        .map_err(CipherError::EncryptionFailed)?;

    Ok(EncryptedPayload {
        salt: *salt,
        iv: *iv,
        ciphertext,
    })
}

/// decrypt and authenticate, a failing tag check is always an error
pub fn decrypt(payload: &EncryptedPayload, password: &str) -> Result<Vec<u8>> {
    if payload.ciphertext.len() < TAG_LEN {
        return Err(CipherError::PayloadTooShort {
            len: payload.serialized_len(),
            min: ENCRYPTION_OVERHEAD,
        });
    }
    let key = derive_key(password, &payload.salt, PBKDF2_ITERATIONS)?;
    let cipher = Aes256Gcm::new(aes_gcm::Key::<Aes256Gcm>::from_slice(&key[..]));

    cipher
        .decrypt(Nonce::from_slice(&payload.iv), payload.ciphertext.as_slice())
        .map_err(|_| CipherError::AuthenticationFailed)
}

/// encrypt data with password into the serialized `salt | iv | ciphertext` layout
pub fn encrypt_data(password: &str, data: &[u8]) -> Result<Vec<u8>> {
    Ok(encrypt(data, password)?.to_bytes())
}

/// decrypt data in the serialized `salt | iv | ciphertext` layout
pub fn decrypt_data(password: &str, data: &[u8]) -> Result<Vec<u8>> {
    decrypt(&EncryptedPayload::from_bytes(data)?, password)
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    const SALT: [u8; SALT_LEN] = hex!("000102030405060708090a0b0c0d0e0f");
    const IV: [u8; IV_LEN] = hex!("6465666768696a6b6c6d6e6f");

    #[test]
    fn test_key_derivation_matches_rfc7914_vector() {
        let key = derive_key("passwd", b"salt", 1).unwrap();
        assert_eq!(
            *key,
            hex!("55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc")
        );

        let key = derive_key("password", b"salt", 4096).unwrap();
        assert_eq!(
            *key,
            hex!("c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a")
        );
    }

    #[test]
    fn test_key_derivation_rejects_zero_iterations() {
        assert!(matches!(
            derive_key("pw", &SALT, 0),
            Err(CipherError::InvalidIterations)
        ));
    }

    #[test]
    fn test_protocol_key_for_fixed_salt() {
        let key = derive_key("pw123", &SALT, PBKDF2_ITERATIONS).unwrap();
        assert_eq!(
            *key,
            hex!("c0d6ab4003fdaa5fd5072c8508e20f54674e6a097610f11c2aa3ee878f41eb9a")
        );
    }

    #[test]
    fn test_known_answer_encryption() {
        let payload = encrypt_with(b"secret", "pw123", &SALT, &IV).unwrap();

        assert_eq!(
            payload.ciphertext,
            hex!("d754b092390ac9863fb93370a465ac67faf97469dd98")
        );
        assert_eq!(payload.serialized_len(), SALT_LEN + IV_LEN + 6 + TAG_LEN);
        assert_eq!(decrypt(&payload, "pw123").unwrap(), b"secret");
    }

    #[test]
    fn test_encryption_round_trip() {
        let password = "resistance is futile";
        let data = b"lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

        let cipher_data = encrypt_data(password, data).unwrap();
        let decipher_data = decrypt_data(password, &cipher_data).unwrap();

        assert_eq!(cipher_data.len(), data.len() + ENCRYPTION_OVERHEAD);
        assert_ne!(&cipher_data[SALT_LEN + IV_LEN..], &data[..]);
        assert_eq!(data, decipher_data.as_slice());
    }

    #[test]
    fn test_empty_plain_text_round_trip() {
        let sealed = encrypt(b"", "pw").unwrap();
        assert_eq!(sealed.ciphertext.len(), TAG_LEN);
        assert_eq!(decrypt(&sealed, "pw").unwrap(), b"");
    }

    #[test]
    fn test_salt_and_iv_are_fresh_per_call() {
        let a = encrypt(b"same", "pw").unwrap();
        let b = encrypt(b"same", "pw").unwrap();

        assert_ne!(a.salt, b.salt);
        assert_ne!(a.iv, b.iv);
        assert_ne!(a.ciphertext, b.ciphertext);
    }

    #[test]
    fn test_wrong_password_fails_authentication() {
        let sealed = encrypt_data("pw123", b"secret").unwrap();

        assert!(matches!(
            decrypt_data("pw124", &sealed),
            Err(CipherError::AuthenticationFailed)
        ));
    }

    #[test]
    fn test_tampered_ciphertext_fails_authentication() {
        let mut sealed = encrypt_data("pw123", b"secret").unwrap();
        let last = sealed.len() - 1;
        sealed[last] ^= 0x01;

        assert!(matches!(
            decrypt_data("pw123", &sealed),
            Err(CipherError::AuthenticationFailed)
        ));
    }

    #[test]
    fn test_too_short_payload_is_rejected() {
        let err = decrypt_data("pw", &[0u8; ENCRYPTION_OVERHEAD - 1]).unwrap_err();
        assert!(matches!(
            err,
            CipherError::PayloadTooShort { len: 43, min: 44 }
        ));
    }

    #[test]
    fn test_serialized_layout() {
        let payload = EncryptedPayload {
            salt: SALT,
            iv: IV,
            ciphertext: vec![0xaa; TAG_LEN],
        };
        let bytes = payload.to_bytes();

        assert_eq!(&bytes[..SALT_LEN], &SALT);
        assert_eq!(&bytes[SALT_LEN..SALT_LEN + IV_LEN], &IV);
        assert_eq!(EncryptedPayload::from_bytes(&bytes).unwrap(), payload);
    }
}
