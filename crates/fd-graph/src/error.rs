//! Extraction error types.

use std::path::PathBuf;
use thiserror::Error;

pub type ExtractResult<T> = Result<T, ExtractError>;

/// Failures surfaced by extraction.
///
/// Malformed content is never an error (see [`crate::Extraction::skipped`]);
/// only an unreadable source stream aborts extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read graph source: {path}")]
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },
}
