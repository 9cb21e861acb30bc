// src/formatting/assembler.rs
//! Assembles fetched bookmark content into persistable output units.

use super::images::rewrite_image_paths;
use crate::model::Bookmark;
use crate::multipart::MultipartPart;
use crate::output::paths::{image_path, note_path};
use crate::output::OutputUnit;
use chrono::SecondsFormat;
use std::path::Path;

/// Builds final note text (and sibling image files) for one bookmark.
///
/// Three entry points correspond to the three content shapes a run can
/// produce: a markdown body, a decoded multipart article, or highlights
/// alone. All are deterministic; the first unit returned is always the
/// primary note.
pub struct NoteAssembler<'a> {
    folder: &'a Path,
}

impl<'a> NoteAssembler<'a> {
    pub fn new(folder: &'a Path) -> Self {
        Self { folder }
    }

    /// Case 1: plain markdown body, with front matter and optional
    /// highlights block.
    pub fn from_markdown(
        &self,
        bookmark: &Bookmark,
        body: &str,
        highlights: Option<&str>,
    ) -> Vec<OutputUnit> {
        let mut note = front_matter(bookmark);
        note.push_str(&format!("# {}\n", bookmark.title));
        note.push_str(&format!("by [[{}]]\n\n", bookmark.primary_author()));
        note.push_str(&format!(
            "> [!abstract]+ \n> abstract:: {}\n\n",
            bookmark.description
        ));
        if let Some(highlights) = highlights {
            note.push_str(highlights);
            note.push_str("\n\n");
        }
        note.push_str("# Content\n\n");
        note.push_str(body);

        vec![OutputUnit::note(
            note_path(self.folder, &bookmark.title),
            note,
        )]
    }

    /// Case 2: decoded multipart article.
    ///
    /// Text parts get their image links redirected to the images
    /// subdirectory and the optional highlights block appended; image parts
    /// become sibling binary files. No front matter on this path — the
    /// upstream importer never added one here, and that shape is preserved.
    pub fn from_multipart(
        &self,
        bookmark: &Bookmark,
        parts: &[MultipartPart],
        highlights: Option<&str>,
    ) -> Vec<OutputUnit> {
        let mut units = Vec::new();

        for part in parts {
            if let Some(text) = part.text() {
                let mut note = rewrite_image_paths(text);
                if let Some(highlights) = highlights {
                    note.push_str("\n\n");
                    note.push_str(highlights);
                }
                units.push(OutputUnit::note(
                    note_path(self.folder, &bookmark.title),
                    note,
                ));
            }
        }

        for part in parts {
            if let Some(bytes) = part.bytes() {
                units.push(OutputUnit::image(
                    image_path(self.folder, &part.filename),
                    bytes.to_vec(),
                ));
            }
        }

        units
    }

    /// Case 3: highlights only — the note body is exactly the formatted
    /// block.
    pub fn from_highlights(&self, bookmark: &Bookmark, highlights: String) -> Vec<OutputUnit> {
        vec![OutputUnit::note(
            note_path(self.folder, &bookmark.title),
            highlights,
        )]
    }
}

/// Front matter for the plain-markdown path.
///
/// Field order and the empty `tags:` line match the notes this importer
/// has always produced; changing either would churn every re-imported note.
fn front_matter(bookmark: &Bookmark) -> String {
    let published = bookmark
        .published
        .map(|p| p.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default();

    format!(
        "---\ntags:\ntype: {}\ndateSaved: {}\ndatePublished: {}\nreadeckUrl: {}\noriginalUrl: {}\nid: {}\nauthor: {}\n---\n\n",
        bookmark.kind,
        bookmark.created.to_rfc3339_opts(SecondsFormat::Secs, true),
        published,
        bookmark.href,
        bookmark.url,
        bookmark.id,
        bookmark.primary_author(),
    )
}
