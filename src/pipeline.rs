//! Single-file extract-then-chunk run.
//!
//! # Example
//!
//! ```no_run
//! use pdfchunk::pipeline::{run, Config};
//!
//! let config = Config::new("paper.pdf").with_chunk_size(800).with_overlap(80);
//! if let Some(report) = run(&config)? {
//!     println!("{} chunks", report.chunk_count());
//! }
//! # Ok::<(), pdfchunk::Error>(())
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::chunk::{ChunkOptions, TextChunker};
use crate::error::Result;
use crate::extract::{ExtractOptions, PageSelection, TextExtractor};

/// Input used when none is given.
pub const DEFAULT_INPUT: &str = "data/uploads/sample.pdf";

/// Configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// PDF file to process
    pub input: PathBuf,

    /// Chunking parameters
    pub chunk: ChunkOptions,

    /// Extraction options
    pub extract: ExtractOptions,
}

impl Config {
    /// Create a configuration for the given input with default parameters.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            chunk: ChunkOptions::default(),
            extract: ExtractOptions::default(),
        }
    }

    /// Set chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk = self.chunk.with_chunk_size(chunk_size);
        self
    }

    /// Set overlap.
    pub fn with_overlap(mut self, overlap: usize) -> Self {
        self.chunk = self.chunk.with_overlap(overlap);
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.extract = self.extract.with_pages(pages);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT)
    }
}

/// Outcome of processing one document.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Processed file
    pub source: PathBuf,
    /// Characters of extracted text
    pub char_count: usize,
    /// Chunk size used
    pub chunk_size: usize,
    /// Overlap used
    pub overlap: usize,
    /// Chunks in order
    pub chunks: Vec<String>,
}

impl Report {
    /// Chunk already-extracted text.
    pub fn from_text(source: impl Into<PathBuf>, text: &str, chunker: &TextChunker) -> Self {
        Self {
            source: source.into(),
            char_count: text.chars().count(),
            chunk_size: chunker.chunk_size(),
            overlap: chunker.overlap(),
            chunks: chunker.split(text),
        }
    }

    /// Number of chunks produced.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// First chunk, if the document had any text.
    pub fn first_chunk(&self) -> Option<&str> {
        self.chunks.first().map(String::as_str)
    }

    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Extract and chunk one file.
///
/// Chunk parameters are validated before the document is opened.
pub fn process_file(path: &Path, chunk: ChunkOptions, extract: ExtractOptions) -> Result<Report> {
    let chunker = TextChunker::from_options(chunk)?;
    let text = TextExtractor::with_options(extract).extract_file(path)?;
    Ok(Report::from_text(path, &text, &chunker))
}

/// Run the configured extraction.
///
/// A missing input is not an error: a warning is logged and `Ok(None)` is
/// returned without doing any work. Every other failure propagates.
pub fn run(config: &Config) -> Result<Option<Report>> {
    config.chunk.validate()?;

    if !config.input.exists() {
        log::warn!("{} not found, nothing to do", config.input.display());
        return Ok(None);
    }

    let report = process_file(&config.input, config.chunk, config.extract.clone())?;
    log::info!(
        "{}: {} characters, {} chunks",
        report.source.display(),
        report.char_count,
        report.chunk_count()
    );
    Ok(Some(report))
}
