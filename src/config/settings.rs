//! User settings for WhisperLink
//!
//! Output and audit preferences, persisted as JSON in `config.json`.

use serde::{Deserialize, Serialize};

use super::paths::WhisperPaths;
use crate::error::WhisperError;

/// User settings for WhisperLink
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Prefix encrypted output with `0x` (as ledger tooling expects)
    #[serde(default)]
    pub emit_hex_prefix: bool,

    /// Record operations in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Minimum length for passwords entered at the encrypt prompt
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_audit_enabled() -> bool {
    true
}

fn default_min_password_length() -> usize {
    8
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            emit_hex_prefix: false,
            audit_enabled: default_audit_enabled(),
            min_password_length: default_min_password_length(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &WhisperPaths) -> Result<Self, WhisperError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                WhisperError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                WhisperError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Load settings, falling back to defaults when the file is unusable
    ///
    /// For commands that must keep working with a broken `config.json`,
    /// such as `init`, which rewrites it.
    pub fn load_or_default(paths: &WhisperPaths) -> Self {
        match Self::load_or_create(paths) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Warning: {}; using default settings", e);
                Settings::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WhisperPaths) -> Result<(), WhisperError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            WhisperError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| WhisperError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
