// src/api/mod.rs
//! Readeck API interaction — the ability to retrieve bookmarks and their
//! content representations.
//!
//! Business logic depends on the `ReadeckRepository` trait, never on HTTP
//! details. The pipeline treats any error from these methods as "no data"
//! for that sub-step.

pub mod client;

use crate::error::AppError;
use crate::model::{Annotation, Bookmark};

/// The ability to retrieve content from a Readeck instance.
#[async_trait::async_trait]
pub trait ReadeckRepository: Send + Sync {
    /// All bookmarks visible to the authenticated user.
    async fn list_bookmarks(&self) -> Result<Vec<Bookmark>, AppError>;

    /// A bookmark's article body as plain markdown.
    async fn get_article_markdown(&self, bookmark_id: &str) -> Result<String, AppError>;

    /// A bookmark's article as a raw multipart document bundling the
    /// markdown body with its images.
    async fn get_article_multipart(&self, bookmark_id: &str) -> Result<Vec<u8>, AppError>;

    /// A bookmark's highlight annotations, in reading order.
    async fn get_annotations(&self, bookmark_id: &str) -> Result<Vec<Annotation>, AppError>;
}

pub use client::ReadeckHttpClient;
