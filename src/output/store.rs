// src/output/store.rs
//! The host file-store abstraction.
//!
//! The pipeline never touches the filesystem directly; it speaks to this
//! trait so overwrite decisions can be tested against an in-memory store.

use crate::error::AppError;
use std::fs;
use std::path::Path;

/// Narrow interface over the note storage backend.
pub trait NoteStore {
    fn exists(&self, path: &Path) -> bool;

    /// Creates a new file. The path is known not to exist.
    fn create(&self, path: &Path, content: &[u8]) -> Result<(), AppError>;

    /// Replaces an existing file's content.
    fn modify(&self, path: &Path, content: &[u8]) -> Result<(), AppError>;

    /// Ensures a directory exists, creating it (and parents) if needed.
    fn ensure_dir(&self, path: &Path) -> Result<(), AppError>;
}

/// Filesystem-backed store.
#[derive(Debug, Default)]
pub struct FsNoteStore;

impl FsNoteStore {
    pub fn new() -> Self {
        Self
    }

    fn write(path: &Path, content: &[u8]) -> Result<(), AppError> {
        log::debug!("Writing {} bytes to {}", content.len(), path.display());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}

impl NoteStore for FsNoteStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create(&self, path: &Path, content: &[u8]) -> Result<(), AppError> {
        Self::write(path, content)
    }

    fn modify(&self, path: &Path, content: &[u8]) -> Result<(), AppError> {
        Self::write(path, content)
    }

    fn ensure_dir(&self, path: &Path) -> Result<(), AppError> {
        if path.exists() {
            if path.is_dir() {
                return Ok(());
            }
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("Path exists but is not a directory: {}", path.display()),
            )));
        }
        fs::create_dir_all(path)?;
        log::info!("Created directory: {}", path.display());
        Ok(())
    }
}
