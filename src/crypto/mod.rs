//! Cryptographic core for WhisperLink
//!
//! Provides AES-256-GCM encryption with PBKDF2-HMAC-SHA256 key derivation
//! for short text messages stored on an untrusted public medium.
//!
//! Every function here is stateless: no keys are cached and nothing is
//! shared between calls, so operations may run concurrently without
//! coordination.

pub mod encryption;
pub mod hex_format;
pub mod key_derivation;
pub mod secure_memory;

pub use encryption::{
    decrypt, decrypt_with_key, encrypt, encrypt_with_key, encrypted_hex_len, WireBlob,
    MIN_WIRE_BYTES, NONCE_SIZE, TAG_SIZE,
};
pub use hex_format::{is_valid_hex, strip_hex_prefix};
pub use key_derivation::{derive_key, DerivedKey};
pub use secure_memory::SecureString;
