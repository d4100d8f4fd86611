//! Error types for pdfchunk library.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for pdfchunk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during extraction and chunking.
#[derive(Error, Debug)]
pub enum Error {
    /// The document could not be opened: missing, unreadable, or not a PDF.
    #[error("Cannot open document {}: {reason}", .path.display())]
    DocumentOpen {
        /// Path that was requested (empty for in-memory sources)
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },

    /// A page within an otherwise valid document could not be decoded.
    #[error("Cannot read page {page}: {reason}")]
    DocumentRead {
        /// 1-indexed page number
        page: u32,
        /// Underlying cause
        reason: String,
    },

    /// Chunking parameters would not make progress.
    #[error(
        "Invalid chunk parameters: chunk_size={chunk_size}, overlap={overlap} \
         (requires chunk_size > 0 and overlap < chunk_size)"
    )]
    InvalidChunkParameters {
        /// Requested chunk size in characters
        chunk_size: usize,
        /// Requested overlap in characters
        overlap: usize,
    },

    /// Error while rendering a report (JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(err.to_string())
    }
}

impl Error {
    pub(crate) fn open(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        Error::DocumentOpen {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn read(page: u32, reason: impl ToString) -> Self {
        Error::DocumentRead {
            page,
            reason: reason.to_string(),
        }
    }
}
