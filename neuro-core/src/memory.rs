//! The append-only memory log.
//!
//! Entries are never removed for the lifetime of the process. Every store
//! rewrites the whole backing file (see [`crate::persistence`]), so the file
//! and the in-memory list stay in sync. Recall is a linear newest-first scan
//! with last-match-wins semantics.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::Result;
use crate::persistence;
use crate::types::MemoryKind;

/// Tag applied to memories stored while the mood contains "sad".
pub const TAG_SAD: &str = "sad";
/// Tag applied to all other memories.
pub const TAG_NEUTRAL: &str = "neutral";

/// Reply when no stored entry matches a recall keyword.
pub const RECALL_MISS: &str = "Nothing comes to mind.";

/// A single stored memory. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEntry {
    /// Raw input text as received.
    pub text: String,
    /// Episodic or semantic, from [`MemoryKind::classify`].
    pub kind: MemoryKind,
    /// Emotional context tag (`sad` or `neutral`).
    pub tag: String,
    /// When the entry was appended (or reloaded — see
    /// [`crate::persistence::load_entries`]).
    pub created_at: DateTime<Utc>,
}

/// Ordered, append-only log of memories backed by a flat text file.
#[derive(Debug)]
pub struct MemoryLog {
    entries: Vec<MemoryEntry>,
    path: PathBuf,
}

impl MemoryLog {
    /// Open a log backed by `path`, loading any existing entries.
    /// A missing file is not an error — the log starts empty.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NeuroError::MemoryFile`] if an existing file cannot
    /// be read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = persistence::load_entries(&path, Utc::now())?;
        Ok(Self { entries, path })
    }

    /// Store one input, tagged with the current mood, and rewrite the
    /// backing file before returning.
    ///
    /// The kind check is case-sensitive on the raw input; the tag check is
    /// case-insensitive on the mood string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NeuroError::MemoryFile`] if the rewrite fails. The
    /// entry stays in the in-memory list either way.
    pub fn store(&mut self, input: &str, mood: &str, now: DateTime<Utc>) -> Result<()> {
        let kind = MemoryKind::classify(input);
        let tag = if mood.to_lowercase().contains(TAG_SAD) {
            TAG_SAD
        } else {
            TAG_NEUTRAL
        };

        self.entries.push(MemoryEntry {
            text: input.to_string(),
            kind,
            tag: tag.to_string(),
            created_at: now,
        });

        persistence::save_entries(&self.path, &self.entries)?;
        debug!(%kind, tag, total = self.entries.len(), "Stored memory");
        Ok(())
    }

    /// Recall the most recently stored entry whose text contains `keyword`
    /// (case-insensitive). Returns `"I recall: {text}"`, or
    /// `"Nothing comes to mind."` when nothing matches.
    #[must_use]
    pub fn recall(&self, keyword: &str) -> String {
        let needle = keyword.to_lowercase();
        self.entries
            .iter()
            .rev()
            .find(|e| e.text.to_lowercase().contains(&needle))
            .map_or_else(
                || RECALL_MISS.to_string(),
                |e| format!("I recall: {}", e.text),
            )
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[MemoryEntry] {
        &self.entries
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_temp() -> (tempfile::TempDir, MemoryLog) {
        let dir = tempfile::tempdir().expect("tempdir");
        let log = MemoryLog::open(dir.path().join("memories.txt")).expect("open");
        (dir, log)
    }

    #[test]
    fn recall_returns_last_match() {
        let (_dir, mut log) = open_temp();
        let now = Utc::now();
        log.store("see you later", "neutral", now).expect("store");
        log.store("nothing here", "neutral", now).expect("store");
        log.store("you there?", "neutral", now).expect("store");

        assert_eq!(log.recall("you"), "I recall: you there?");
    }

    #[test]
    fn recall_is_case_insensitive() {
        let (_dir, mut log) = open_temp();
        log.store("You there?", "neutral", Utc::now()).expect("store");
        assert_eq!(log.recall("yOu"), "I recall: You there?");
    }

    #[test]
    fn recall_miss_has_exact_wording() {
        let (_dir, mut log) = open_temp();
        log.store("see you later", "neutral", Utc::now()).expect("store");
        assert_eq!(log.recall("zzz"), "Nothing comes to mind.");
    }

    #[test]
    fn sad_mood_tags_sad() {
        let (_dir, mut log) = open_temp();
        let now = Utc::now();
        log.store("hello", "Sad (60%)", now).expect("store");
        log.store("hello again", "Happy (70%)", now).expect("store");

        assert_eq!(log.entries()[0].tag, "sad");
        assert_eq!(log.entries()[1].tag, "neutral");
    }

    #[test]
    fn store_persists_across_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("memories.txt");
        let now = Utc::now();

        {
            let mut log = MemoryLog::open(&path).expect("open");
            log.store("remember the rain", "neutral", now).expect("store");
            log.store("a dry fact", "neutral", now).expect("store");
        }

        let reopened = MemoryLog::open(&path).expect("reopen");
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.entries()[0].kind, MemoryKind::Episodic);
        assert_eq!(reopened.entries()[1].text, "a dry fact");
    }
}
