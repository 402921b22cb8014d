//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the crypto core.

pub mod codec;
pub mod log;
pub mod password;

pub use codec::{handle_check, handle_decrypt, handle_encrypt, CheckArgs, DecryptArgs, EncryptArgs};
pub use log::handle_log_command;
