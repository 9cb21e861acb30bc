// src/model/annotation.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user highlight attached to a bookmark's content.
///
/// Annotations belong to a bookmark by id; the server returns them in
/// reading order and rendering preserves that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: String,
    /// Highlight color, used verbatim as the callout style key.
    pub color: String,
    /// The highlighted passage.
    pub text: String,
    pub created: DateTime<Utc>,
}
