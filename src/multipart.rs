// src/multipart.rs
//! Decoder for the multipart article representation.
//!
//! Readeck serves the "article with images" representation as a single
//! multipart MIME document: one `text/markdown` part followed by the
//! article's images. This module decodes a complete byte buffer into an
//! ordered sequence of typed parts. It is a pure function — no I/O, no
//! streaming — so it can be exercised with fixture documents.

use crate::error::DecodeError;
use log::warn;

/// Content of a decoded part: exactly one of text or raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartContent {
    /// UTF-8 markdown text.
    Text(String),
    /// Raw binary payload (images).
    Binary(Vec<u8>),
}

/// A decoded unit of a multipart article document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartPart {
    /// MIME type with parameters stripped, e.g. `text/markdown`, `image/png`.
    pub media_type: String,
    /// Filename from the part's disposition header. Empty for the article
    /// text part; used verbatim as the on-disk name for image parts.
    pub filename: String,
    pub content: PartContent,
}

impl MultipartPart {
    pub fn is_text(&self) -> bool {
        matches!(self.content, PartContent::Text(_))
    }

    /// Text content, if this is a text part.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            PartContent::Text(text) => Some(text),
            PartContent::Binary(_) => None,
        }
    }

    /// Binary payload, if this is an image part.
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.content {
            PartContent::Binary(bytes) => Some(bytes),
            PartContent::Text(_) => None,
        }
    }
}

/// Decodes a complete multipart document into its typed parts.
///
/// Parts appear in the output in document order. `text/markdown` parts are
/// decoded as UTF-8 text; parts whose media type contains `image` keep their
/// raw payload. Parts with any other (or missing) media type are dropped
/// with a warning. Malformed framing fails the whole decode — partial
/// results are never returned.
pub fn decode(raw: &[u8]) -> Result<Vec<MultipartPart>, DecodeError> {
    let boundary = sniff_boundary(raw)?;

    // Delimiter between parts: CRLF, two hyphens, the boundary.
    let mut delimiter = Vec::with_capacity(boundary.len() + 4);
    delimiter.extend_from_slice(b"\r\n--");
    delimiter.extend_from_slice(boundary);

    // Content starts after the opening boundary line's CRLF.
    let mut cursor = 2 + boundary.len() + 2;
    let mut parts = Vec::new();

    loop {
        let relative = find(&raw[cursor..], &delimiter).ok_or(DecodeError::MissingClosingDelimiter)?;
        let part_end = cursor + relative;

        if let Some(part) = decode_part(&raw[cursor..part_end])? {
            parts.push(part);
        }

        let after = part_end + delimiter.len();
        if raw[after..].starts_with(b"--") {
            // Closing delimiter; anything after it is epilogue.
            return Ok(parts);
        }
        if !raw[after..].starts_with(b"\r\n") {
            return Err(DecodeError::MissingClosingDelimiter);
        }
        cursor = after + 2;
    }
}

/// Reads the boundary token from the document's opening line.
fn sniff_boundary(raw: &[u8]) -> Result<&[u8], DecodeError> {
    let eol = find(raw, b"\r\n").ok_or(DecodeError::MissingBoundary)?;
    let first_line = &raw[..eol];
    if !first_line.starts_with(b"--") || first_line.len() <= 2 {
        return Err(DecodeError::MissingBoundary);
    }
    Ok(&first_line[2..])
}

/// Decodes one part's header section and payload.
///
/// Returns `Ok(None)` for parts with unrecognized media types — dropped,
/// never fatal.
fn decode_part(part: &[u8]) -> Result<Option<MultipartPart>, DecodeError> {
    let header_end = find(part, b"\r\n\r\n").ok_or(DecodeError::UnterminatedHeaders)?;
    let headers = String::from_utf8_lossy(&part[..header_end]);
    let body = &part[header_end + 4..];

    let mut media_type = String::new();
    let mut filename = String::new();

    for line in headers.split("\r\n") {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        match name.trim().to_ascii_lowercase().as_str() {
            "content-type" => {
                // Parameters (charset etc.) do not participate in classification.
                media_type = value
                    .split(';')
                    .next()
                    .unwrap_or("")
                    .trim()
                    .to_ascii_lowercase();
            }
            "content-disposition" => {
                filename = extract_filename(value);
            }
            _ => {}
        }
    }

    if media_type == "text/markdown" {
        let text = String::from_utf8(body.to_vec())
            .map_err(|e| DecodeError::NonUtf8Text(e.to_string()))?;
        Ok(Some(MultipartPart {
            media_type,
            filename,
            content: PartContent::Text(text),
        }))
    } else if media_type.contains("image") {
        Ok(Some(MultipartPart {
            media_type,
            filename,
            content: PartContent::Binary(body.to_vec()),
        }))
    } else {
        warn!(
            "Unknown content type in multipart article: {}",
            if media_type.is_empty() { "(none)" } else { &media_type }
        );
        Ok(None)
    }
}

/// Pulls the quoted `filename` parameter out of a disposition header value.
fn extract_filename(value: &str) -> String {
    let Some(start) = value.find("filename=\"") else {
        return String::new();
    };
    let rest = &value[start + "filename=\"".len()..];
    match rest.find('"') {
        Some(end) => rest[..end].to_string(),
        None => String::new(),
    }
}

/// First occurrence of `needle` in `haystack`.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
