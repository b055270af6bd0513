//! JSON output for the reconciled publication list.

use std::fs;
use std::path::Path;

use crate::models::Record;

/// Render records as the publications.json payload.
///
/// Pretty-printed UTF-8; empty fields are omitted entirely through the
/// model's serde attributes, never emitted as null or empty placeholders.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn render_records(records: &[Record]) -> serde_json::Result<String> {
    let mut rendered = serde_json::to_string_pretty(records)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write the rendered payload to `path`, creating parent directories.
///
/// Callers must only invoke this after reconciliation succeeds: on total
/// failure the previous output file stays untouched.
///
/// # Errors
///
/// Returns error if serialization or any filesystem operation fails.
pub fn write_records(path: &Path, records: &[Record]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_records(records)?)?;
    Ok(())
}
