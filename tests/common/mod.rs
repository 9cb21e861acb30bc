// tests/common/mod.rs
//! In-memory fakes for the pipeline's injected collaborators.
#![allow(dead_code)]

use async_trait::async_trait;
use readeck2notes::{
    Annotation, ApiToken, ApiUrl, AppError, Bookmark, Mode, NoteStore, Notifier, PipelineConfig,
    ReadeckRepository,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Scripted repository: per-bookmark payloads, missing entries fail the
/// corresponding fetch. Records every call for dispatch assertions.
#[derive(Default)]
pub struct FakeRepository {
    /// `None` models a failed listing call.
    pub bookmarks: Option<Vec<Bookmark>>,
    pub markdown: HashMap<String, String>,
    pub multipart: HashMap<String, Vec<u8>>,
    pub annotations: HashMap<String, Vec<Annotation>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeRepository {
    pub fn with_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        Self {
            bookmarks: Some(bookmarks),
            ..Self::default()
        }
    }

    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn missing(what: &str, id: &str) -> AppError {
        AppError::MalformedResponse(format!("fake repository has no {} for {}", what, id))
    }
}

#[async_trait]
impl ReadeckRepository for FakeRepository {
    async fn list_bookmarks(&self) -> Result<Vec<Bookmark>, AppError> {
        self.record("list_bookmarks".to_string());
        self.bookmarks
            .clone()
            .ok_or_else(|| Self::missing("bookmark list", "-"))
    }

    async fn get_article_markdown(&self, bookmark_id: &str) -> Result<String, AppError> {
        self.record(format!("markdown:{}", bookmark_id));
        self.markdown
            .get(bookmark_id)
            .cloned()
            .ok_or_else(|| Self::missing("markdown", bookmark_id))
    }

    async fn get_article_multipart(&self, bookmark_id: &str) -> Result<Vec<u8>, AppError> {
        self.record(format!("multipart:{}", bookmark_id));
        self.multipart
            .get(bookmark_id)
            .cloned()
            .ok_or_else(|| Self::missing("multipart", bookmark_id))
    }

    async fn get_annotations(&self, bookmark_id: &str) -> Result<Vec<Annotation>, AppError> {
        self.record(format!("annotations:{}", bookmark_id));
        self.annotations
            .get(bookmark_id)
            .cloned()
            .ok_or_else(|| Self::missing("annotations", bookmark_id))
    }
}

/// In-memory note store.
#[derive(Default)]
pub struct MemoryNoteStore {
    pub files: Mutex<HashMap<PathBuf, Vec<u8>>>,
    pub dirs: Mutex<Vec<PathBuf>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn read_text(&self, path: &Path) -> Option<String> {
        self.read(path).map(|bytes| String::from_utf8(bytes).unwrap())
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    pub fn dir_count(&self) -> usize {
        self.dirs.lock().unwrap().len()
    }
}

impl NoteStore for MemoryNoteStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn create(&self, path: &Path, content: &[u8]) -> Result<(), AppError> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn modify(&self, path: &Path, content: &[u8]) -> Result<(), AppError> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn ensure_dir(&self, path: &Path) -> Result<(), AppError> {
        self.dirs.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

/// Captures what the user would have seen.
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn saw(&self, needle: &str) -> bool {
        self.recorded().iter().any(|m| m.contains(needle))
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub fn test_config(mode: Mode, overwrite: bool) -> PipelineConfig {
    PipelineConfig {
        api_url: ApiUrl::parse("https://r.example").unwrap(),
        token: ApiToken::new("test-token").unwrap(),
        folder: PathBuf::from("Readeck"),
        mode,
        overwrite,
        verbose: false,
    }
}

pub fn bookmark(id: &str, title: &str) -> Bookmark {
    Bookmark {
        id: id.to_string(),
        title: title.to_string(),
        url: format!("https://example.com/{}", id),
        href: format!("https://r.example/bookmarks/{}", id),
        kind: "article".to_string(),
        created: "2024-01-02T10:00:00Z".parse().unwrap(),
        published: Some("2023-12-31T08:30:00Z".parse().unwrap()),
        description: "An abstract.".to_string(),
        authors: vec!["Jane Doe".to_string()],
    }
}

pub fn annotation(id: &str, color: &str, text: &str) -> Annotation {
    Annotation {
        id: id.to_string(),
        color: color.to_string(),
        text: text.to_string(),
        created: "2024-01-02T10:00:00Z".parse().unwrap(),
    }
}

/// Builds a well-formed multipart document from (media type, filename,
/// payload) triples.
pub fn multipart_document(boundary: &str, parts: &[(&str, &str, &[u8])]) -> Vec<u8> {
    let mut doc = Vec::new();
    doc.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    for (i, (media_type, filename, payload)) in parts.iter().enumerate() {
        if i > 0 {
            doc.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        }
        doc.extend_from_slice(format!("Content-Type: {media_type}\r\n").as_bytes());
        if !filename.is_empty() {
            doc.extend_from_slice(
                format!("Content-Disposition: attachment; filename=\"{filename}\"\r\n").as_bytes(),
            );
        }
        doc.extend_from_slice(b"\r\n");
        doc.extend_from_slice(payload);
        doc.extend_from_slice(b"\r\n");
    }
    doc.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    doc
}
