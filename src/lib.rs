// src/lib.rs
//! readeck2notes library — imports Readeck bookmarks into markdown notes.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `DecodeError`, `ValidationError`
//! - **Configuration** — `CommandLineInput`, `PipelineConfig`, `Mode`
//! - **Domain model** — `Bookmark`, `Annotation`
//! - **API client** — `ReadeckRepository`, `ReadeckHttpClient`
//! - **Multipart decoding** — `decode`, `MultipartPart`, `PartContent`
//! - **Formatting** — `NoteAssembler`, `format_highlights`, `rewrite_image_paths`
//! - **Persistence** — `NoteStore`, `FsNoteStore`, `NotePersister`, `OutputUnit`
//! - **Pipeline** — `ImportPipeline`, `FetchPlan`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod model;
pub mod multipart;
pub mod notify;
pub mod output;
pub mod pipeline;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, DecodeError};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, Mode, PipelineConfig};
pub use crate::types::{ApiToken, ApiUrl};

// --- Domain Model ---
pub use crate::model::{Annotation, Bookmark};

// --- API Client ---
pub use crate::api::{ReadeckHttpClient, ReadeckRepository};

// --- Multipart Decoding ---
pub use crate::multipart::{decode, MultipartPart, PartContent};

// --- Formatting ---
pub use crate::formatting::{format_highlights, rewrite_image_paths, NoteAssembler};

// --- Persistence ---
pub use crate::notify::{ConsoleNotifier, Notifier};
pub use crate::output::{
    FsNoteStore, ImportReport, NoteContent, NotePersister, NoteStore, OutputUnit, PersistOutcome,
};

// --- Pipeline ---
pub use crate::pipeline::{BodyKind, FetchPlan, ImportPipeline};
