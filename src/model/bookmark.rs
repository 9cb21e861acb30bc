// src/model/bookmark.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved web article plus its metadata, as returned by Readeck.
///
/// `url` is the original source address; `href` is the bookmark's canonical
/// address on the Readeck instance itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Stable unique key issued by the server.
    pub id: String,
    pub title: String,
    pub url: String,
    pub href: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// When the bookmark was saved to Readeck.
    pub created: DateTime<Utc>,
    /// When the article was originally published, if the scraper found it.
    #[serde(default)]
    pub published: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: String,
    /// Ordered author list; rendering uses the first entry.
    #[serde(default)]
    pub authors: Vec<String>,
}

impl Bookmark {
    /// First listed author, or empty when the scraper found none.
    pub fn primary_author(&self) -> &str {
        self.authors.first().map(String::as_str).unwrap_or("")
    }
}
