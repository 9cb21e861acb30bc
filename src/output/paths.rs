// src/output/paths.rs
//! Pure functions for note and image path derivation.

use crate::constants::{FALLBACK_NOTE_NAME, FILENAME_MAX_CHARS, IMAGES_DIR_NAME};
use std::path::{Path, PathBuf};

/// Replaces a character that is illegal in file paths with a visually
/// similar legal one.
///
/// The table is a fixed one-to-one mapping: every illegal character gets a
/// distinct replacement, so two titles that differ only in illegal
/// characters cannot collide on disk.
fn replace_illegal_char(c: char) -> char {
    match c {
        '/' => '∕',   // U+2215 division slash
        '\\' => '⧵', // U+29F5 reverse solidus operator
        ':' => '꞉',   // U+A789 modifier letter colon
        '*' => '✱',   // U+2731 heavy asterisk
        '?' => '？',  // U+FF1F fullwidth question mark
        '"' => '＂',  // U+FF02 fullwidth quotation mark
        '<' => '＜',  // U+FF1C fullwidth less-than
        '>' => '＞',  // U+FF1E fullwidth greater-than
        '|' => '｜',  // U+FF5C fullwidth vertical line
        c => c,
    }
}

/// Sanitizes a bookmark title into a safe filename stem.
pub fn sanitize_title(title: &str) -> String {
    let mut safe: String = title
        .chars()
        .filter(|c| !c.is_control())
        .map(replace_illegal_char)
        .collect();

    // Trim whitespace and dots
    safe = safe.trim().trim_matches('.').to_string();

    if safe.chars().count() > FILENAME_MAX_CHARS {
        safe = safe.chars().take(FILENAME_MAX_CHARS).collect();
    }

    if safe.is_empty() {
        safe = FALLBACK_NOTE_NAME.to_string();
    }

    safe
}

/// Path of a bookmark's note file inside the configured folder.
pub fn note_path(folder: &Path, title: &str) -> PathBuf {
    folder.join(format!("{}.md", sanitize_title(title)))
}

/// Path of the images subdirectory inside the configured folder.
pub fn images_dir(folder: &Path) -> PathBuf {
    folder.join(IMAGES_DIR_NAME)
}

/// Path of an extracted image, keeping the multipart filename verbatim.
pub fn image_path(folder: &Path, filename: &str) -> PathBuf {
    images_dir(folder).join(filename)
}
