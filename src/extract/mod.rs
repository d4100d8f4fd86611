//! PDF text extraction.

mod backend;
mod extractor;
mod options;

pub use backend::{LopdfBackend, PageSource};
pub use extractor::{DocumentInfo, TextExtractor};
pub use options::{ExtractOptions, PageSelection};
