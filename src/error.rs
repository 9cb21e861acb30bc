// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! Most failures below run level are absorbed by the pipeline and
//! reported as notifications; these types describe what went wrong
//! before that absorption happens.

use thiserror::Error;

/// Why a multipart article document could not be decoded.
///
/// Any of these fails the whole decode for that bookmark's content step;
/// the decoder never returns partial results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("multipart document does not start with a boundary line")]
    MissingBoundary,

    #[error("multipart document is truncated: closing delimiter not found")]
    MissingClosingDelimiter,

    #[error("multipart part has no blank line terminating its headers")]
    UnterminatedHeaders,

    #[error("text/markdown part is not valid UTF-8: {0}")]
    NonUtf8Text(String),
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Readeck API returned an error (status {status}): {body_preview}")]
    ReadeckService { status: u16, body_preview: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Failed to decode multipart article: {0}")]
    Decode(#[from] DecodeError),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] crate::types::ValidationError),

    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

// Allow converting from anyhow::Error, preserving the message
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal {
            message: err.to_string(),
            source: None,
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
