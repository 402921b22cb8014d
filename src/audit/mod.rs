//! Audit logging for WhisperLink
//!
//! Records each encrypt, decrypt, and check run by the CLI in an
//! append-only JSONL log. Entries hold the operation, its outcome, and the
//! wire size; message content and passwords are never written.
//!
//! # Example
//!
//! ```rust,ignore
//! use whisperlink::audit::{AuditEntry, AuditLogger, Operation};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::success(Operation::Encrypt, Some(39)))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation, Outcome};
pub use logger::AuditLogger;
