//! Key derivation using PBKDF2-HMAC-SHA256
//!
//! Stretches a user password into a 256-bit AES key. The salt and iteration
//! count are fixed application-wide so the same password always yields the
//! same key and no salt has to travel with the ciphertext.

use std::fmt;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Application-wide PBKDF2 salt
pub const SALT: &[u8] = b"whisperlink-salt";

/// PBKDF2 iteration count
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Derived key size in bytes (AES-256)
pub const KEY_SIZE: usize = 32;

/// A derived encryption key
///
/// Lives only for the duration of one encrypt/decrypt call and is zeroed
/// when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

// Never print key material
impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKey").finish_non_exhaustive()
    }
}

/// Derive an encryption key from a password
///
/// Deterministic: the same password always produces the same key. This is
/// deliberately slow (100k HMAC-SHA256 rounds), so callers on an async
/// executor should run it on a blocking worker.
pub fn derive_key(password: &str) -> DerivedKey {
    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), SALT, PBKDF2_ITERATIONS, &mut key);
    DerivedKey { key }
}
