//! Page-text concatenation.

use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

use super::backend::{LopdfBackend, PageSource};
use super::options::ExtractOptions;

/// Extracts the raw text of a document as a single string.
///
/// Page texts are concatenated in document order with nothing inserted
/// between them. The first page that fails to decode aborts the whole
/// extraction; no partial text is returned.
#[derive(Debug, Clone, Default)]
pub struct TextExtractor {
    options: ExtractOptions,
}

impl TextExtractor {
    /// Create an extractor that reads every page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extract text from a PDF file.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let backend = LopdfBackend::load_file(path)?;
        self.extract_from(&backend)
    }

    /// Extract text from PDF bytes.
    pub fn extract_bytes(&self, data: &[u8]) -> Result<String> {
        let backend = LopdfBackend::load_bytes(data)?;
        self.extract_from(&backend)
    }

    /// Extract text from a reader producing PDF bytes.
    pub fn extract_reader<R: Read>(&self, reader: R) -> Result<String> {
        let backend = LopdfBackend::load_reader(reader)?;
        self.extract_from(&backend)
    }

    /// Extract text from any page source.
    pub fn extract_from<S: PageSource + ?Sized>(&self, source: &S) -> Result<String> {
        let mut text = String::new();
        let mut pages_read = 0usize;

        for page in source.page_numbers() {
            if !self.options.pages.includes(page) {
                continue;
            }

            let page_text = source.page_text(page)?;
            log::debug!("Page {}: {} characters", page, page_text.chars().count());

            text.push_str(&page_text);
            pages_read += 1;
        }

        log::info!(
            "Extracted {} characters from {} pages",
            text.chars().count(),
            pages_read
        );
        Ok(text)
    }
}

/// Basic facts about a document, without its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentInfo {
    /// PDF version (e.g., "1.7")
    pub version: String,
    /// Total number of pages
    pub page_count: usize,
}

impl DocumentInfo {
    /// Read document information from a loaded PDF.
    pub fn from_backend(backend: &LopdfBackend) -> Self {
        Self {
            version: backend.version(),
            page_count: backend.page_count(),
        }
    }
}
