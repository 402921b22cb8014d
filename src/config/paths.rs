//! Path management for WhisperLink
//!
//! ## Path Resolution Order
//!
//! 1. `WHISPERLINK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/whisperlink` on Linux, `%APPDATA%\whisperlink\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::WhisperError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "WHISPERLINK_DATA_DIR";

/// Manages all paths used by WhisperLink
#[derive(Debug, Clone)]
pub struct WhisperPaths {
    base_dir: PathBuf,
}

impl WhisperPaths {
    /// Create a new WhisperPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, WhisperError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create WhisperPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), WhisperError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WhisperError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, WhisperError> {
    ProjectDirs::from("", "", "whisperlink")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| WhisperError::Config("Could not determine home directory".into()))
}
