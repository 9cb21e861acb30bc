// src/pipeline.rs
//! The import pipeline: per configured mode, fetch each bookmark's remote
//! representations, decode and assemble them, and persist the result.
//!
//! Bookmarks are processed strictly sequentially and failures are isolated:
//! a sub-step that yields no data is reported and treated as absent, and a
//! bookmark that fails outright never aborts the run. Only a failed or
//! empty bookmark listing ends the run early — before the output folder is
//! touched.

use crate::api::ReadeckRepository;
use crate::config::{Mode, PipelineConfig};
use crate::error::AppError;
use crate::formatting::{format_highlights, NoteAssembler};
use crate::model::{Annotation, Bookmark};
use crate::multipart;
use crate::notify::Notifier;
use crate::output::paths::images_dir;
use crate::output::{ImportReport, NotePersister, NoteStore, PersistOutcome};

/// Which body representation a mode fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Markdown,
    Multipart,
}

/// What a mode fetches per bookmark.
///
/// The mode fully determines the fetches and the assembly case for every
/// bookmark in the run; there is no other branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPlan {
    pub body: Option<BodyKind>,
    pub annotations: bool,
}

impl FetchPlan {
    /// The mode dispatch table.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Text => Self {
                body: Some(BodyKind::Markdown),
                annotations: false,
            },
            Mode::TextImages => Self {
                body: Some(BodyKind::Multipart),
                annotations: false,
            },
            Mode::TextAnnotations => Self {
                body: Some(BodyKind::Markdown),
                annotations: true,
            },
            Mode::TextImagesAnnotations => Self {
                body: Some(BodyKind::Multipart),
                annotations: true,
            },
            Mode::Annotations => Self {
                body: None,
                annotations: true,
            },
        }
    }

    /// Whether this plan will extract image files.
    pub fn wants_images(&self) -> bool {
        matches!(self.body, Some(BodyKind::Multipart))
    }
}

/// Orchestrates one import run over injected collaborators.
pub struct ImportPipeline<'a, R, S, N>
where
    R: ReadeckRepository,
    S: NoteStore,
    N: Notifier,
{
    config: &'a PipelineConfig,
    repo: &'a R,
    store: &'a S,
    notifier: &'a N,
}

impl<'a, R, S, N> ImportPipeline<'a, R, S, N>
where
    R: ReadeckRepository,
    S: NoteStore,
    N: Notifier,
{
    pub fn new(config: &'a PipelineConfig, repo: &'a R, store: &'a S, notifier: &'a N) -> Self {
        Self {
            config,
            repo,
            store,
            notifier,
        }
    }

    /// Runs the whole import and returns the run tally.
    pub async fn run(&self) -> Result<ImportReport, AppError> {
        let mut report = ImportReport::new();

        let bookmarks = match self.repo.list_bookmarks().await {
            Ok(bookmarks) => bookmarks,
            Err(e) => {
                log::error!("Failed to list bookmarks: {}", e);
                self.notifier.notify("Error getting bookmarks");
                return Ok(report);
            }
        };

        if bookmarks.is_empty() {
            self.notifier.notify("No bookmarks found");
            return Ok(report);
        }

        let plan = FetchPlan::for_mode(self.config.mode);

        self.store.ensure_dir(&self.config.folder)?;
        if plan.wants_images() {
            self.store.ensure_dir(&images_dir(&self.config.folder))?;
        }

        for bookmark in &bookmarks {
            match self.import_bookmark(bookmark, plan, &mut report).await {
                Ok(()) => report.bookmarks_processed += 1,
                Err(e) => {
                    log::error!("Import failed for bookmark {}: {}", bookmark.id, e);
                    self.notifier
                        .notify(&format!("Error importing {}", bookmark.title));
                    report.bookmarks_failed += 1;
                }
            }
        }

        log::info!(
            "Import finished: {} bookmarks processed, {} failed, {} notes created, {} overwritten, {} skipped, {} images",
            report.bookmarks_processed,
            report.bookmarks_failed,
            report.notes_created,
            report.notes_overwritten,
            report.notes_skipped,
            report.images_written,
        );

        Ok(report)
    }

    /// One pass for one bookmark: fetch per plan, assemble, persist.
    async fn import_bookmark(
        &self,
        bookmark: &Bookmark,
        plan: FetchPlan,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let annotations = if plan.annotations {
            self.fetch_annotations(bookmark).await
        } else {
            None
        };

        let assembler = NoteAssembler::new(&self.config.folder);

        let units = match plan.body {
            Some(BodyKind::Markdown) => {
                let body = match self.repo.get_article_markdown(&bookmark.id).await {
                    Ok(body) => body,
                    Err(e) => {
                        log::warn!("No article body for {}: {}", bookmark.id, e);
                        self.notifier
                            .notify(&format!("Error getting article for {}", bookmark.title));
                        return Ok(());
                    }
                };
                let highlights = self.formatted_highlights(bookmark, annotations.as_deref());
                assembler.from_markdown(bookmark, &body, highlights.as_deref())
            }
            Some(BodyKind::Multipart) => {
                let raw = match self.repo.get_article_multipart(&bookmark.id).await {
                    Ok(raw) => raw,
                    Err(e) => {
                        log::warn!("No multipart article for {}: {}", bookmark.id, e);
                        self.notifier
                            .notify(&format!("Error getting article for {}", bookmark.title));
                        return Ok(());
                    }
                };
                let parts = match multipart::decode(&raw) {
                    Ok(parts) => parts,
                    Err(e) => {
                        log::warn!("Malformed multipart article for {}: {}", bookmark.id, e);
                        self.notifier
                            .notify(&format!("Error decoding article for {}", bookmark.title));
                        return Ok(());
                    }
                };
                let highlights = self.formatted_highlights(bookmark, annotations.as_deref());
                assembler.from_multipart(bookmark, &parts, highlights.as_deref())
            }
            None => {
                // Highlights-only note; written even when the fetch failed,
                // with just the heading.
                let block =
                    format_highlights(&self.config.api_url, bookmark, annotations.as_deref());
                assembler.from_highlights(bookmark, block)
            }
        };

        let persister = NotePersister::new(self.store, self.notifier, self.config.overwrite);
        for unit in &units {
            let outcome = persister.persist(&bookmark.title, unit)?;
            match (outcome, unit.is_primary_note) {
                (PersistOutcome::Created, true) => report.notes_created += 1,
                (PersistOutcome::Overwritten, true) => report.notes_overwritten += 1,
                (PersistOutcome::Skipped, true) => report.notes_skipped += 1,
                (PersistOutcome::Skipped, false) => {}
                (_, false) => report.images_written += 1,
            }
        }

        Ok(())
    }

    /// Highlights block for the body-bearing cases: only rendered when the
    /// annotations fetch actually returned data (an empty list is data and
    /// renders a bare heading; a failed fetch omits the section).
    fn formatted_highlights(
        &self,
        bookmark: &Bookmark,
        annotations: Option<&[Annotation]>,
    ) -> Option<String> {
        annotations
            .map(|anns| format_highlights(&self.config.api_url, bookmark, Some(anns)))
    }

    async fn fetch_annotations(&self, bookmark: &Bookmark) -> Option<Vec<Annotation>> {
        match self.repo.get_annotations(&bookmark.id).await {
            Ok(annotations) => Some(annotations),
            Err(e) => {
                log::warn!("No annotations for {}: {}", bookmark.id, e);
                self.notifier
                    .notify(&format!("Error getting annotations for {}", bookmark.id));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_table_matches_every_mode() {
        assert_eq!(
            FetchPlan::for_mode(Mode::Text),
            FetchPlan {
                body: Some(BodyKind::Markdown),
                annotations: false
            }
        );
        assert_eq!(
            FetchPlan::for_mode(Mode::TextImages),
            FetchPlan {
                body: Some(BodyKind::Multipart),
                annotations: false
            }
        );
        assert_eq!(
            FetchPlan::for_mode(Mode::TextAnnotations),
            FetchPlan {
                body: Some(BodyKind::Markdown),
                annotations: true
            }
        );
        assert_eq!(
            FetchPlan::for_mode(Mode::TextImagesAnnotations),
            FetchPlan {
                body: Some(BodyKind::Multipart),
                annotations: true
            }
        );
        assert_eq!(
            FetchPlan::for_mode(Mode::Annotations),
            FetchPlan {
                body: None,
                annotations: true
            }
        );
    }

    #[test]
    fn only_multipart_modes_want_images() {
        assert!(FetchPlan::for_mode(Mode::TextImages).wants_images());
        assert!(FetchPlan::for_mode(Mode::TextImagesAnnotations).wants_images());
        assert!(!FetchPlan::for_mode(Mode::Text).wants_images());
        assert!(!FetchPlan::for_mode(Mode::Annotations).wants_images());
    }
}
