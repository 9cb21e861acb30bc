// src/output/types.rs
//! Type definitions for output operations.

use std::path::PathBuf;

/// Content of a pending output file: note text or raw image bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteContent {
    Text(String),
    Binary(Vec<u8>),
}

impl NoteContent {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            NoteContent::Text(text) => text.as_bytes(),
            NoteContent::Binary(bytes) => bytes,
        }
    }
}

/// A single file to be persisted for a bookmark.
///
/// Produced by the assembler, consumed by the persister. The path is a
/// deterministic function of the configured folder and the bookmark title
/// (or image filename).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputUnit {
    pub path: PathBuf,
    pub content: NoteContent,
    /// True for the bookmark's note itself; false for sibling image files.
    /// Image writes go through the same overwrite policy but do not raise
    /// user-facing notices.
    pub is_primary_note: bool,
}

impl OutputUnit {
    pub fn note(path: PathBuf, content: String) -> Self {
        Self {
            path,
            content: NoteContent::Text(content),
            is_primary_note: true,
        }
    }

    pub fn image(path: PathBuf, bytes: Vec<u8>) -> Self {
        Self {
            path,
            content: NoteContent::Binary(bytes),
            is_primary_note: false,
        }
    }
}

/// Tally of what a run did, logged when the import finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub bookmarks_processed: usize,
    pub bookmarks_failed: usize,
    pub notes_created: usize,
    pub notes_overwritten: usize,
    pub notes_skipped: usize,
    pub images_written: usize,
}

impl ImportReport {
    pub fn new() -> Self {
        Self::default()
    }
}
