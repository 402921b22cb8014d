//! Audit log viewing

use crate::audit::AuditLogger;
use crate::config::paths::WhisperPaths;
use crate::error::WhisperResult;

/// Print the most recent audit entries
pub fn handle_log_command(paths: &WhisperPaths, limit: usize) -> WhisperResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries found.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    let total = logger.entry_count()?;
    if total > entries.len() {
        println!();
        println!("Showing {} of {} entries.", entries.len(), total);
    }

    Ok(())
}
