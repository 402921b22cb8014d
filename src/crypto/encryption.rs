//! AES-256-GCM encryption/decryption
//!
//! Provides password-based authenticated encryption of text payloads. The
//! result is a self-contained wire blob, `nonce(12) || ciphertext || tag(16)`,
//! exchanged as lowercase hex.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};

use crate::error::{WhisperError, WhisperResult};

use super::hex_format::decode_wire_hex;
use super::{derive_key, DerivedKey};

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag in bytes
pub const TAG_SIZE: usize = 16;

/// Smallest valid wire blob: a nonce and the tag of an empty message
pub const MIN_WIRE_BYTES: usize = NONCE_SIZE + TAG_SIZE;

/// Hex length of a wire blob carrying `plaintext_len` bytes of plaintext
pub fn encrypted_hex_len(plaintext_len: usize) -> usize {
    2 * (NONCE_SIZE + plaintext_len + TAG_SIZE)
}

/// A decoded wire blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireBlob {
    /// Per-message random nonce
    pub nonce: [u8; NONCE_SIZE],
    /// Ciphertext with the authentication tag appended
    pub sealed: Vec<u8>,
}

impl WireBlob {
    /// Parse a blob from hex, with or without a `0x` prefix
    ///
    /// Fails with a format error before any cryptography runs.
    pub fn from_hex(s: &str) -> WhisperResult<Self> {
        let bytes = decode_wire_hex(s, 2 * MIN_WIRE_BYTES)?;
        Self::from_bytes(&bytes)
    }

    /// Split raw bytes into nonce and sealed payload
    pub fn from_bytes(bytes: &[u8]) -> WhisperResult<Self> {
        if bytes.len() < MIN_WIRE_BYTES {
            return Err(WhisperError::format("data too short"));
        }

        let (nonce_bytes, sealed) = bytes.split_at(NONCE_SIZE);
        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(nonce_bytes);

        Ok(Self {
            nonce,
            sealed: sealed.to_vec(),
        })
    }

    /// Concatenate nonce and sealed payload
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.sealed);
        out
    }

    /// Lowercase hex, no prefix, no separators
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Total length in bytes
    pub fn len(&self) -> usize {
        NONCE_SIZE + self.sealed.len()
    }

    /// A wire blob always carries at least a nonce and a tag
    pub fn is_empty(&self) -> bool {
        false
    }
}

fn cipher_for(key: &DerivedKey) -> WhisperResult<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| WhisperError::Platform(format!("Failed to create cipher: {}", e)))
}

fn seal(plaintext: &[u8], key: &DerivedKey, nonce: [u8; NONCE_SIZE]) -> WhisperResult<WireBlob> {
    let cipher = cipher_for(key)?;

    let sealed = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|e| WhisperError::Platform(format!("Encryption failed: {}", e)))?;

    Ok(WireBlob { nonce, sealed })
}

/// Encrypt raw bytes under an already-derived key
///
/// Generates a fresh random nonce for every call.
pub fn encrypt_with_key(plaintext: &[u8], key: &DerivedKey) -> WhisperResult<WireBlob> {
    let mut nonce = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce);
    seal(plaintext, key, nonce)
}

/// Decrypt a wire blob under an already-derived key
///
/// Never returns data unless the authentication tag verified.
pub fn decrypt_with_key(blob: &WireBlob, key: &DerivedKey) -> WhisperResult<Vec<u8>> {
    let cipher = cipher_for(key)?;

    cipher
        .decrypt(Nonce::from_slice(&blob.nonce), blob.sealed.as_ref())
        .map_err(|_| WhisperError::Authentication)
}

/// Encrypt text with a password, returning wire hex
pub fn encrypt(plaintext: &str, password: &str) -> WhisperResult<String> {
    let key = derive_key(password);
    let blob = encrypt_with_key(plaintext.as_bytes(), &key)?;
    Ok(blob.to_hex())
}

/// Decrypt wire hex (optionally `0x`-prefixed) with a password
///
/// Format problems are reported before the key is derived. A wrong password
/// and tampered data both surface as [`WhisperError::Authentication`].
pub fn decrypt(wire_hex: &str, password: &str) -> WhisperResult<String> {
    let blob = WireBlob::from_hex(wire_hex)?;
    let key = derive_key(password);
    let plaintext = decrypt_with_key(&blob, &key)?;

    String::from_utf8(plaintext)
        .map_err(|_| WhisperError::format("decrypted payload is not valid UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSWORD: &str = "correct-horse";

    // "hello world" sealed under derive_key("correct-horse") with nonce 00..0b
    const HELLO_VECTOR: &str = "000102030405060708090a0bc5266b809ebc140d698d3688bd45dfc5de8497eb4dc1145e60a360";

    fn fixed_nonce() -> [u8; NONCE_SIZE] {
        let mut nonce = [0u8; NONCE_SIZE];
        for (i, b) in nonce.iter_mut().enumerate() {
            *b = i as u8;
        }
        nonce
    }

    fn flip_bit(wire_hex: &str, byte_index: usize) -> String {
        let mut bytes = hex::decode(wire_hex).unwrap();
        bytes[byte_index] ^= 0x01;
        hex::encode(bytes)
    }

    #[test]
    fn test_encrypt_decrypt() {
        let encrypted = encrypt("Hello, World!", PASSWORD).unwrap();
        let decrypted = decrypt(&encrypted, PASSWORD).unwrap();
        assert_eq!(decrypted, "Hello, World!");
    }

    #[test]
    fn test_hello_world_scenario() {
        let encrypted = encrypt("hello world", PASSWORD).unwrap();
        assert!(encrypted.len() >= 56);
        assert_eq!(decrypt(&encrypted, PASSWORD).unwrap(), "hello world");

        let err = decrypt(&encrypted, "wrong-password").unwrap_err();
        assert!(err.is_authentication());
    }

    #[test]
    fn test_known_vector_matches_web_crypto() {
        let key = derive_key(PASSWORD);
        let blob = seal(b"hello world", &key, fixed_nonce()).unwrap();
        assert_eq!(blob.to_hex(), HELLO_VECTOR);
        assert_eq!(decrypt(HELLO_VECTOR, PASSWORD).unwrap(), "hello world");
    }

    #[test]
    fn test_output_shape() {
        let encrypted = encrypt("hello world", PASSWORD).unwrap();
        assert_eq!(encrypted.len(), encrypted_hex_len(11));
        assert_eq!(encrypted.len(), 78);
        assert!(encrypted
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_different_nonces() {
        let encrypted1 = encrypt("Hello, World!", PASSWORD).unwrap();
        let encrypted2 = encrypt("Hello, World!", PASSWORD).unwrap();

        // Same plaintext should produce different ciphertext (different nonces)
        assert_ne!(encrypted1, encrypted2);
        assert_eq!(decrypt(&encrypted1, PASSWORD).unwrap(), "Hello, World!");
        assert_eq!(decrypt(&encrypted2, PASSWORD).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_wrong_password_fails() {
        let encrypted = encrypt("secret", "password-one").unwrap();
        let err = decrypt(&encrypted, "password-two").unwrap_err();
        assert!(err.is_authentication());
    }

    #[test]
    fn test_tampered_ciphertext_and_tag_fail() {
        let key = derive_key(PASSWORD);
        let blob = encrypt_with_key(b"tamper me", &key).unwrap();
        let wire = blob.to_hex();

        // Every byte after the nonce is covered by the tag
        for index in NONCE_SIZE..blob.len() {
            let tampered = WireBlob::from_hex(&flip_bit(&wire, index)).unwrap();
            let err = decrypt_with_key(&tampered, &key).unwrap_err();
            assert!(err.is_authentication(), "byte {} accepted", index);
        }
    }

    #[test]
    fn test_tampered_nonce_fails() {
        let err = decrypt(&flip_bit(HELLO_VECTOR, 0), PASSWORD).unwrap_err();
        assert!(err.is_authentication());
    }

    #[test]
    fn test_prefix_tolerance() {
        let prefixed = format!("0x{}", HELLO_VECTOR);
        assert_eq!(
            decrypt(&prefixed, PASSWORD).unwrap(),
            decrypt(HELLO_VECTOR, PASSWORD).unwrap()
        );
    }

    #[test]
    fn test_uppercase_hex_accepted() {
        let upper = HELLO_VECTOR.to_uppercase();
        assert_eq!(decrypt(&upper, PASSWORD).unwrap(), "hello world");
    }

    #[test]
    fn test_short_input_is_format_error() {
        let err = decrypt("000102030405060708090a", PASSWORD).unwrap_err();
        assert!(err.is_format());

        // A bare nonce with no tag is still too short
        let err = decrypt("000102030405060708090a0b", PASSWORD).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_non_hex_is_format_error() {
        let err = decrypt(&format!("zz{}", HELLO_VECTOR), PASSWORD).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_odd_length_is_format_error() {
        let err = decrypt(&format!("{}0", HELLO_VECTOR), PASSWORD).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_empty_plaintext() {
        let encrypted = encrypt("", PASSWORD).unwrap();
        assert_eq!(encrypted.len(), 2 * MIN_WIRE_BYTES);
        assert_eq!(decrypt(&encrypted, PASSWORD).unwrap(), "");
    }

    #[test]
    fn test_empty_password() {
        let encrypted = encrypt("still encrypted", "").unwrap();
        assert_eq!(decrypt(&encrypted, "").unwrap(), "still encrypted");
    }

    #[test]
    fn test_unicode_plaintext() {
        let plaintext = "héllo wörld 你好 🔐";
        let encrypted = encrypt(plaintext, PASSWORD).unwrap();
        assert_eq!(encrypted.len(), encrypted_hex_len(plaintext.len()));
        assert_eq!(decrypt(&encrypted, PASSWORD).unwrap(), plaintext);
    }

    #[test]
    fn test_large_plaintext() {
        let key = derive_key(PASSWORD);
        let plaintext: Vec<u8> = (0..10000).map(|i| (i % 256) as u8).collect();

        let blob = encrypt_with_key(&plaintext, &key).unwrap();
        let decrypted = decrypt_with_key(&blob, &key).unwrap();

        assert_eq!(plaintext, decrypted);
    }

    #[test]
    fn test_non_utf8_payload_is_rejected() {
        let key = derive_key(PASSWORD);
        let blob = encrypt_with_key(&[0xff, 0xfe, 0xfd], &key).unwrap();
        let err = decrypt(&blob.to_hex(), PASSWORD).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_concurrent_calls() {
        let wires: Vec<String> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|i| s.spawn(move || encrypt(&format!("message {}", i), PASSWORD).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        std::thread::scope(|s| {
            for (i, wire) in wires.iter().enumerate() {
                s.spawn(move || {
                    assert_eq!(decrypt(wire, PASSWORD).unwrap(), format!("message {}", i));
                });
            }
        });
    }

    #[test]
    fn test_wire_blob_round_trip_bytes() {
        let blob = WireBlob::from_hex(HELLO_VECTOR).unwrap();
        assert_eq!(blob.nonce, fixed_nonce());
        assert_eq!(blob.sealed.len(), 11 + TAG_SIZE);
        assert_eq!(blob.len(), HELLO_VECTOR.len() / 2);
        assert_eq!(blob.to_hex(), HELLO_VECTOR);
    }

    #[test]
    fn test_wire_blob_from_short_bytes() {
        let err = WireBlob::from_bytes(&[0u8; MIN_WIRE_BYTES - 1]).unwrap_err();
        assert!(err.is_format());
    }
}
