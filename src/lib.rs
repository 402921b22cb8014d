//! WhisperLink - password-based encryption for public-ledger messaging
//!
//! Messages are stored as ciphertext on an untrusted public medium. This
//! crate turns `(plaintext, password)` into a self-contained hex string and
//! back, failing closed on any format or integrity problem.
//!
//! # Architecture
//!
//! - `crypto`: PBKDF2 key derivation, AES-256-GCM codec, hex validation
//! - `error`: Custom error types
//! - `config`: Path resolution and user settings for the CLI
//! - `audit`: Append-only log of CLI operations (no secrets)
//! - `cli`: Command handlers for the `whisper` binary
//!
//! # Example
//!
//! ```rust
//! use whisperlink::crypto::{decrypt, encrypt};
//!
//! let wire = encrypt("hello world", "correct-horse")?;
//! assert_eq!(decrypt(&wire, "correct-horse")?, "hello world");
//! assert!(decrypt(&wire, "wrong-password").unwrap_err().is_authentication());
//! # Ok::<(), whisperlink::WhisperError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;

pub use crypto::{decrypt, derive_key, encrypt, is_valid_hex};
pub use error::{WhisperError, WhisperResult};
