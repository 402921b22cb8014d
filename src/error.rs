//! Custom error types for WhisperLink
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for WhisperLink operations
#[derive(Error, Debug)]
pub enum WhisperError {
    /// Wire input is too short, has an odd length, or contains non-hex characters
    #[error("Invalid encrypted content: {0}")]
    Format(String),

    /// AEAD verification failed
    ///
    /// Covers both a wrong password and tampered or corrupted data. The two
    /// cases are never distinguished.
    #[error("Decryption failed: incorrect password or corrupted data")]
    Authentication,

    /// The underlying cryptographic primitive rejected its inputs
    #[error("Crypto platform error: {0}")]
    Platform(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl WhisperError {
    /// Create a format error
    pub fn format(reason: impl Into<String>) -> Self {
        Self::Format(reason.into())
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Check if this is an authentication error
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication)
    }
}

impl From<std::io::Error> for WhisperError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WhisperError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for WhisperLink operations
pub type WhisperResult<T> = Result<T, WhisperError>;
