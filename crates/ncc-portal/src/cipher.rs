use aes_gcm_siv::{
    aead::{Aead, AeadCore, OsRng},
    Aes256GcmSiv, KeyInit, Nonce,
};
use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine};

const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Base64 decoding error: {0}")]
    Base64Decode(#[from] base64::DecodeError),
    #[error("Cipher secret invalid length: {0}")]
    CipherKeyInvalidLength(#[from] crypto_common::InvalidLength),
    #[error("Encryption failure")]
    Encrypt,
    #[error("Ciphertext shorter than nonce and tag")]
    TruncatedCiphertext,
    #[error("Decryption failure - ciphertext not produced by this key/scheme")]
    Decrypt,
    #[error("Decrypted bytes are not valid utf8: {0}")]
    DecryptedInvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Field codec for the sensitive student columns. Holds the process-wide
/// master key, read-only after startup and safe to share across calls.
pub struct Cipher(Aes256GcmSiv);

impl Cipher {
    pub fn from_base64_encoded(secret: &str) -> Result<Self, Error> {
        let key = STANDARD_NO_PAD.decode(secret.as_bytes())?;
        Ok(Self(Aes256GcmSiv::new_from_slice(&key)?))
    }

    /// Encrypts one sensitive field value under a fresh random nonce, which
    /// is prepended to the ciphertext. Re-encrypting the same plaintext
    /// yields a different ciphertext.
    pub fn encrypt(&self, plaintext: &str) -> Result<Vec<u8>, Error> {
        let nonce = Aes256GcmSiv::generate_nonce(&mut OsRng);
        let ciphertext = self
            .0
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|_| Error::Encrypt)?;
        let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&ciphertext);
        Ok(out)
    }

    /// Reverses [`Cipher::encrypt`]. Fails on truncated, tampered, or
    /// foreign ciphertext.
    pub fn decrypt(&self, data: &[u8]) -> Result<String, Error> {
        if data.len() < NONCE_LEN + TAG_LEN {
            return Err(Error::TruncatedCiphertext);
        }
        let (nonce, ciphertext) = data.split_at(NONCE_LEN);
        let plaintext = self
            .0
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| Error::Decrypt)?;
        String::from_utf8(plaintext).map_err(Into::into)
    }
}

impl std::fmt::Debug for Cipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Cipher")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cipher() -> Cipher {
        let key = Aes256GcmSiv::generate_key(&mut OsRng);
        let encoded = STANDARD_NO_PAD.encode(key.as_slice());
        Cipher::from_base64_encoded(&encoded).expect("generated key should parse")
    }

    #[test]
    fn round_trip_returns_the_original_plaintext() {
        let cipher = test_cipher();
        for value in ["123456789012", "ABCDE1234F", "00011122233", "षष्ठ"] {
            let encrypted = cipher.encrypt(value).expect("encryption should succeed");
            assert_eq!(cipher.decrypt(&encrypted).expect("decryption"), value);
        }
    }

    #[test]
    fn identical_plaintext_encrypts_to_distinct_ciphertext() {
        let cipher = test_cipher();
        let first = cipher.encrypt("123456789012").expect("encryption");
        let second = cipher.encrypt("123456789012").expect("encryption");
        assert_ne!(first, second, "nonces must be fresh per call");
    }

    #[test]
    fn foreign_ciphertext_is_rejected() {
        let ours = test_cipher();
        let theirs = test_cipher();
        let encrypted = theirs.encrypt("123456789012").expect("encryption");
        assert!(matches!(ours.decrypt(&encrypted), Err(Error::Decrypt)));
    }

    #[test]
    fn tampered_ciphertext_is_rejected() {
        let cipher = test_cipher();
        let mut encrypted = cipher.encrypt("123456789012").expect("encryption");
        let last = encrypted.len() - 1;
        encrypted[last] ^= 0x01;
        assert!(matches!(cipher.decrypt(&encrypted), Err(Error::Decrypt)));
    }

    #[test]
    fn truncated_ciphertext_is_rejected_without_panicking() {
        let cipher = test_cipher();
        assert!(matches!(
            cipher.decrypt(b"short"),
            Err(Error::TruncatedCiphertext)
        ));
        assert!(matches!(
            cipher.decrypt(&[]),
            Err(Error::TruncatedCiphertext)
        ));
    }

    #[test]
    fn malformed_base64_secret_is_rejected() {
        assert!(matches!(
            Cipher::from_base64_encoded("not valid base64!!!"),
            Err(Error::Base64Decode(_))
        ));
    }

    #[test]
    fn wrong_length_secret_is_rejected() {
        let encoded = STANDARD_NO_PAD.encode(b"too-short");
        assert!(matches!(
            Cipher::from_base64_encoded(&encoded),
            Err(Error::CipherKeyInvalidLength(_))
        ));
    }
}
