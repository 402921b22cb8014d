//! Audit entry data structures
//!
//! An entry records what was attempted and how it ended. It never carries
//! plaintext, passwords, keys, or ciphertext; only the payload length.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{WhisperError, WhisperResult};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Encrypt,
    Decrypt,
    Check,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Encrypt => write!(f, "ENCRYPT"),
            Operation::Decrypt => write!(f, "DECRYPT"),
            Operation::Check => write!(f, "CHECK"),
        }
    }
}

/// How an audited operation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    FormatError,
    AuthenticationError,
    PlatformError,
    Failed,
}

impl From<&WhisperError> for Outcome {
    fn from(err: &WhisperError) -> Self {
        match err {
            WhisperError::Format(_) => Outcome::FormatError,
            WhisperError::Authentication => Outcome::AuthenticationError,
            WhisperError::Platform(_) => Outcome::PlatformError,
            _ => Outcome::Failed,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Success => write!(f, "ok"),
            Outcome::FormatError => write!(f, "format error"),
            Outcome::AuthenticationError => write!(f, "authentication error"),
            Outcome::PlatformError => write!(f, "platform error"),
            Outcome::Failed => write!(f, "failed"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Unique entry ID
    pub id: Uuid,

    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// How it ended
    pub outcome: Outcome,

    /// Wire blob size in bytes, when one was produced or parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_len: Option<usize>,
}

impl AuditEntry {
    /// Create an entry for a completed operation
    pub fn success(operation: Operation, payload_len: Option<usize>) -> Self {
        Self::new(operation, Outcome::Success, payload_len)
    }

    /// Create an entry for a failed operation
    pub fn failure(operation: Operation, err: &WhisperError) -> Self {
        Self::new(operation, Outcome::from(err), None)
    }

    /// Create an entry from the result of an operation
    pub fn from_result<T>(
        operation: Operation,
        result: &WhisperResult<T>,
        payload_len: impl FnOnce(&T) -> Option<usize>,
    ) -> Self {
        match result {
            Ok(value) => Self::success(operation, payload_len(value)),
            Err(e) => Self::failure(operation, e),
        }
    }

    fn new(operation: Operation, outcome: Outcome, payload_len: Option<usize>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            operation,
            outcome,
            payload_len,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.outcome
        );

        if let Some(len) = self.payload_len {
            output.push_str(&format!(" ({} bytes)", len));
        }

        output
    }
}
