// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

/// Name of the subdirectory, under the notes folder, that receives image
/// parts extracted from multipart articles.
///
/// Markdown image links inside article text are rewritten to point here,
/// so this value appears both on disk and inside note bodies.
pub const IMAGES_DIR_NAME: &str = "imgs";

/// Maximum character length of a sanitized note filename (extension excluded).
///
/// Bookmark titles are scraped page titles and can be arbitrarily long;
/// most filesystems cap path components at 255 bytes.
pub const FILENAME_MAX_CHARS: usize = 100;

/// Filename used when a bookmark title sanitizes down to nothing.
pub const FALLBACK_NOTE_NAME: &str = "unnamed";

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
