//! Encrypt, decrypt, and check commands
//!
//! Thin wrappers around [`crate::crypto`] that read input, resolve the
//! password, print the result, and record the outcome in the audit log.

use std::io::Read;

use clap::Args;

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::config::{paths::WhisperPaths, settings::Settings};
use crate::crypto::{self, hex_format::HEX_PREFIX, WireBlob};
use crate::error::{WhisperError, WhisperResult};

use super::password::{password_for_decrypt, password_for_encrypt, PASSWORD_ENV};

/// Arguments for `whisper encrypt`
#[derive(Args)]
pub struct EncryptArgs {
    /// Text to encrypt (read from stdin when omitted)
    pub text: Option<String>,

    /// Prefix the output with 0x
    #[arg(long)]
    pub prefix: bool,

    /// Password (prefer the environment variable over the flag)
    #[arg(long, env = PASSWORD_ENV, hide_env_values = true)]
    pub password: Option<String>,
}

/// Arguments for `whisper decrypt`
#[derive(Args)]
pub struct DecryptArgs {
    /// Hex-encoded message, optionally 0x-prefixed (read from stdin when omitted)
    pub hex: Option<String>,

    /// Password (prefer the environment variable over the flag)
    #[arg(long, env = PASSWORD_ENV, hide_env_values = true)]
    pub password: Option<String>,
}

/// Arguments for `whisper check`
#[derive(Args)]
pub struct CheckArgs {
    /// Hex string to validate
    pub hex: String,
}

/// Encrypt text and print the wire hex
pub fn handle_encrypt(paths: &WhisperPaths, settings: &Settings, args: EncryptArgs) -> WhisperResult<()> {
    let plaintext = match args.text {
        Some(text) => text,
        None => strip_line_ending(read_stdin()?),
    };
    let password = password_for_encrypt(args.password, settings.min_password_length)?;

    let result = crypto::encrypt(&plaintext, &password);
    record(
        paths,
        settings,
        AuditEntry::from_result(Operation::Encrypt, &result, |wire| Some(wire.len() / 2)),
    );
    let wire = result?;

    if args.prefix || settings.emit_hex_prefix {
        println!("{}{}", HEX_PREFIX, wire);
    } else {
        println!("{}", wire);
    }

    Ok(())
}

/// Decrypt wire hex and print the plaintext
pub fn handle_decrypt(paths: &WhisperPaths, settings: &Settings, args: DecryptArgs) -> WhisperResult<()> {
    let wire = match args.hex {
        Some(hex) => hex,
        None => read_stdin()?,
    };
    let wire = wire.trim();

    // Reject malformed input before asking for a password
    let blob_len = match WireBlob::from_hex(wire) {
        Ok(blob) => blob.len(),
        Err(e) => {
            record(paths, settings, AuditEntry::failure(Operation::Decrypt, &e));
            return Err(e);
        }
    };

    let password = password_for_decrypt(args.password)?;

    let result = crypto::decrypt(wire, &password);
    record(
        paths,
        settings,
        AuditEntry::from_result(Operation::Decrypt, &result, |_| Some(blob_len)),
    );
    println!("{}", result?);

    Ok(())
}

/// Report whether a string is hex, and whether it can be a wire blob
pub fn handle_check(paths: &WhisperPaths, settings: &Settings, args: CheckArgs) -> WhisperResult<()> {
    let input = args.hex.trim();

    if !crypto::is_valid_hex(input) {
        println!("invalid hex");
        let err = WhisperError::format("not valid hex format");
        record(paths, settings, AuditEntry::failure(Operation::Check, &err));
        return Err(err);
    }

    println!("valid hex");
    match WireBlob::from_hex(input) {
        Ok(blob) => {
            println!(
                "encrypted message: {} bytes ({} bytes of ciphertext)",
                blob.len(),
                blob.sealed.len() - crypto::TAG_SIZE
            );
            record(paths, settings, AuditEntry::success(Operation::Check, Some(blob.len())));
        }
        Err(e) => {
            println!("not an encrypted message: {}", e);
            record(paths, settings, AuditEntry::failure(Operation::Check, &e));
        }
    }

    Ok(())
}

/// Append an audit entry
///
/// A log that cannot be written is reported on stderr and never fails the
/// command whose result is being recorded.
fn record(paths: &WhisperPaths, settings: &Settings, entry: AuditEntry) {
    if !settings.audit_enabled {
        return;
    }

    let logged = paths
        .ensure_directories()
        .and_then(|()| AuditLogger::new(paths.audit_log()).log(&entry));

    if let Err(e) = logged {
        eprintln!("Warning: audit log not written: {}", e);
    }
}

fn read_stdin() -> WhisperResult<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| WhisperError::Io(format!("Failed to read stdin: {}", e)))?;
    Ok(input)
}

/// Drop a single trailing newline left by `echo` or a heredoc
fn strip_line_ending(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}
