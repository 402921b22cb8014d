//! Password input for CLI commands
//!
//! A password passed through `WHISPERLINK_PASSWORD` is used as-is. Otherwise
//! the user is prompted with hidden input.

use crate::crypto::SecureString;
use crate::error::{WhisperError, WhisperResult};

/// Environment variable carrying the password for non-interactive use
pub const PASSWORD_ENV: &str = "WHISPERLINK_PASSWORD";

/// Resolve the password for decryption
pub fn password_for_decrypt(provided: Option<String>) -> WhisperResult<SecureString> {
    match provided {
        Some(password) => Ok(SecureString::new(password)),
        None => prompt_password("Password: "),
    }
}

/// Resolve the password for encryption
///
/// Interactive entry must be confirmed and meet `min_length`. A password
/// supplied through the environment is trusted as given.
pub fn password_for_encrypt(
    provided: Option<String>,
    min_length: usize,
) -> WhisperResult<SecureString> {
    match provided {
        Some(password) => Ok(SecureString::new(password)),
        None => prompt_new_password(min_length),
    }
}

/// Prompt for a new password with confirmation
fn prompt_new_password(min_length: usize) -> WhisperResult<SecureString> {
    loop {
        let pass1 = prompt_password("Enter password: ")?;

        if pass1.chars().count() < min_length {
            eprintln!(
                "Password must be at least {} characters. Please try again.",
                min_length
            );
            continue;
        }

        let pass2 = prompt_password("Confirm password: ")?;

        if pass1 != pass2 {
            eprintln!("Passwords do not match. Please try again.");
            continue;
        }

        return Ok(pass1);
    }
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> WhisperResult<SecureString> {
    rpassword::prompt_password(prompt)
        .map(SecureString::new)
        .map_err(|e| WhisperError::Io(format!("Failed to read password: {}", e)))
}
