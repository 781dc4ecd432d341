//! Flat-file persistence for the memory log.
//!
//! The backing store is a plain text file, one entry per line, four fields
//! joined by `|`:
//!
//! ```text
//! timestamp|kind|tag|text
//! ```
//!
//! There is no escaping of `|` inside the text field. User text containing a
//! pipe produces a line with more than four fields, which is dropped on the
//! next load — a known corruption risk inherited from the format, not a bug
//! in the parser.
//!
//! The whole file is rewritten on every store; the in-memory list and the
//! file never diverge while the process runs.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::{NeuroError, Result};
use crate::memory::MemoryEntry;
use crate::types::MemoryKind;

/// Serialise one entry as a pipe-delimited line.
fn format_line(entry: &MemoryEntry) -> String {
    format!(
        "{}|{}|{}|{}",
        entry.created_at.to_rfc3339(),
        entry.kind,
        entry.tag,
        entry.text
    )
}

/// Parse one line into an entry, or `None` if it does not have exactly four
/// fields.
///
/// The persisted timestamp is deliberately discarded: reloaded entries carry
/// `now` as their creation time, exactly like the original implementation.
/// Round-trip fidelity covers kind, tag, and text only.
fn parse_line(line: &str, now: DateTime<Utc>) -> Option<MemoryEntry> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != 4 {
        return None;
    }
    Some(MemoryEntry {
        text: fields[3].trim().to_string(),
        kind: MemoryKind::parse(fields[1].trim()),
        tag: fields[2].trim().to_string(),
        created_at: now,
    })
}

/// Rewrite the backing file from the full entry list.
///
/// # Errors
///
/// Returns [`NeuroError::MemoryFile`] if the file cannot be written.
pub fn save_entries(path: &Path, entries: &[MemoryEntry]) -> Result<()> {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format_line(entry));
        out.push('\n');
    }
    fs::write(path, out).map_err(|source| NeuroError::MemoryFile {
        path: path.display().to_string(),
        source,
    })?;

    debug!(path = %path.display(), entries = entries.len(), "Rewrote memory file");
    Ok(())
}

/// Load entries from the backing file.
///
/// A missing file means "no memories yet" and yields an empty list. Malformed
/// lines (anything without exactly four `|`-separated fields) are skipped
/// with a warning rather than failing the load.
///
/// # Errors
///
/// Returns [`NeuroError::MemoryFile`] if the file exists but cannot be read.
pub fn load_entries(path: &Path, now: DateTime<Utc>) -> Result<Vec<MemoryEntry>> {
    if !path.exists() {
        debug!(path = %path.display(), "No memory file yet, starting empty");
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|source| NeuroError::MemoryFile {
        path: path.display().to_string(),
        source,
    })?;

    let mut entries = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line, now) {
            Some(entry) => entries.push(entry),
            None => {
                warn!(
                    path = %path.display(),
                    line = line_no + 1,
                    "Skipping malformed memory line"
                );
            }
        }
    }

    debug!(path = %path.display(), entries = entries.len(), "Loaded memory file");
    Ok(entries)
}
