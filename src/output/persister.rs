// src/output/persister.rs
//! Applies the overwrite policy when writing output units.

use super::store::NoteStore;
use super::types::OutputUnit;
use crate::error::AppError;
use crate::notify::Notifier;

/// What the persister did with one output unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    Created,
    Overwritten,
    Skipped,
}

/// Writes output units through a [`NoteStore`], resolving path conflicts
/// by policy instead of surfacing them as errors.
pub struct NotePersister<'a, S: NoteStore, N: Notifier> {
    store: &'a S,
    notifier: &'a N,
    overwrite: bool,
}

impl<'a, S: NoteStore, N: Notifier> NotePersister<'a, S, N> {
    pub fn new(store: &'a S, notifier: &'a N, overwrite: bool) -> Self {
        Self {
            store,
            notifier,
            overwrite,
        }
    }

    /// Persists one unit. An existing target is overwritten or skipped per
    /// configuration; notices name the bookmark but are suppressed for
    /// image files.
    pub fn persist(&self, title: &str, unit: &OutputUnit) -> Result<PersistOutcome, AppError> {
        let content = unit.content.as_bytes();

        if self.store.exists(&unit.path) {
            if self.overwrite {
                self.store.modify(&unit.path, content)?;
                if unit.is_primary_note {
                    self.notifier.notify(&format!("Overwriting note for {}", title));
                }
                Ok(PersistOutcome::Overwritten)
            } else {
                if unit.is_primary_note {
                    self.notifier
                        .notify(&format!("Note for {} already exists", title));
                }
                Ok(PersistOutcome::Skipped)
            }
        } else {
            self.store.create(&unit.path, content)?;
            if unit.is_primary_note {
                self.notifier.notify(&format!("Creating note for {}", title));
            }
            Ok(PersistOutcome::Created)
        }
    }
}
