//! # pdfchunk
//!
//! Raw text extraction from PDF documents and fixed-size overlapping
//! chunking, as a preprocessing step for embedding and retrieval.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfchunk::{chunk_text, extract_text};
//!
//! fn main() -> pdfchunk::Result<()> {
//!     let text = extract_text("document.pdf")?;
//!     let chunks = chunk_text(&text, 500, 50)?;
//!     println!("{} characters, {} chunks", text.chars().count(), chunks.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Behavior
//!
//! - Page texts are concatenated in page order; layout is discarded
//! - A page that cannot be decoded aborts the extraction
//! - Chunk lengths and offsets count characters, not bytes
//! - Chunks may split words; every chunk but the last is exactly `chunk_size` long

pub mod chunk;
pub mod detect;
pub mod error;
pub mod extract;
pub mod pipeline;

// Re-export commonly used types
pub use chunk::{
    chunk_text, Chunk, ChunkOptions, Chunks, TextChunker, DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP,
};
pub use detect::{detect_format_from_bytes, detect_format_from_path, PdfFormat};
pub use error::{Error, Result};
pub use extract::{
    DocumentInfo, ExtractOptions, LopdfBackend, PageSelection, PageSource, TextExtractor,
};
pub use pipeline::{Config, Report};

use std::path::Path;

/// Extract the text of every page of a PDF file, in page order.
///
/// # Errors
///
/// * [`Error::DocumentOpen`] if the file is missing, unreadable, or not a PDF
/// * [`Error::DocumentRead`] if any page cannot be decoded
///
/// # Example
///
/// ```no_run
/// use pdfchunk::extract_text;
///
/// let text = extract_text("document.pdf").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    TextExtractor::new().extract_file(path)
}

/// Extract text from a PDF file with custom options.
pub fn extract_text_with_options<P: AsRef<Path>>(
    path: P,
    options: ExtractOptions,
) -> Result<String> {
    TextExtractor::with_options(options).extract_file(path)
}

/// Extract text from PDF bytes.
pub fn extract_text_from_bytes(data: &[u8]) -> Result<String> {
    TextExtractor::new().extract_bytes(data)
}

/// Extract and chunk a PDF file in one step.
///
/// # Example
///
/// ```no_run
/// use pdfchunk::{process_file, ChunkOptions};
///
/// let report = process_file("document.pdf", ChunkOptions::default()).unwrap();
/// if let Some(first) = report.first_chunk() {
///     println!("{}", first);
/// }
/// ```
pub fn process_file<P: AsRef<Path>>(path: P, options: ChunkOptions) -> Result<Report> {
    pipeline::process_file(path.as_ref(), options, ExtractOptions::default())
}
