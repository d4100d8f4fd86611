//! Page access abstraction.
//!
//! Isolates the concrete PDF library (lopdf) from the extraction logic:
//! the extractor only needs pages in order and the text of each page.

use std::io::Read;
use std::path::Path;

use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object, ObjectId};

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};

/// Abstract interface for documents made of text-bearing pages.
pub trait PageSource {
    /// Page numbers (1-indexed) in document order.
    fn page_numbers(&self) -> Vec<u32>;

    /// Extracted text of a single page.
    ///
    /// Pages without extractable text (e.g. scanned images) yield an empty
    /// string rather than an error.
    fn page_text(&self, page: u32) -> Result<String>;
}

// ---------------------------------------------------------------------------
// LopdfBackend: concrete implementation backed by lopdf
// ---------------------------------------------------------------------------

/// Concrete [`PageSource`] backed by `lopdf::Document`.
///
/// The file is read fully during `load_file` and the handle is closed before
/// it returns; the backend itself holds only the parsed object graph.
pub struct LopdfBackend {
    doc: LopdfDocument,
}

impl LopdfBackend {
    /// Load from a file path.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        detect_format_from_path(path)?;

        let doc = LopdfDocument::load(path).map_err(|e| Error::open(path, e))?;
        log::debug!("Loaded {} (PDF {})", path.display(), doc.version);

        Ok(Self { doc })
    }

    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        detect_format_from_bytes(data)?;

        let doc = LopdfDocument::load_mem(data).map_err(|e| Error::open("", e))?;
        Ok(Self { doc })
    }

    /// Load from a reader.
    pub fn load_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|e| Error::open("", e))?;
        Self::load_bytes(&data)
    }

    /// Get PDF version string.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Raw (decompressed) content stream bytes of a page.
    ///
    /// Every stream referenced from `/Contents` must resolve and decode;
    /// lopdf's own text extraction skips pages that do not.
    fn page_content(&self, page: u32, page_id: ObjectId) -> Result<Vec<u8>> {
        let page_dict = self
            .doc
            .get_dictionary(page_id)
            .map_err(|e| Error::read(page, e))?;

        // A page without /Contents is blank, not broken.
        let Ok(contents) = page_dict.get(b"Contents") else {
            return Ok(Vec::new());
        };

        let mut stream_ids = Vec::new();
        match contents {
            Object::Reference(id) => match self.doc.get_object(*id) {
                Ok(Object::Stream(_)) => stream_ids.push(*id),
                Ok(Object::Array(arr)) => {
                    for obj in arr {
                        stream_ids.push(obj.as_reference().map_err(|e| Error::read(page, e))?);
                    }
                }
                Ok(_) => return Err(Error::read(page, "Invalid content stream")),
                Err(e) => return Err(Error::read(page, e)),
            },
            Object::Array(arr) => {
                for obj in arr {
                    stream_ids.push(obj.as_reference().map_err(|e| Error::read(page, e))?);
                }
            }
            _ => return Err(Error::read(page, "Invalid content stream")),
        }

        let mut content = Vec::new();
        for id in stream_ids {
            let stream = self
                .doc
                .get_object(id)
                .and_then(Object::as_stream)
                .map_err(|e| Error::read(page, e))?;
            if stream.dict.has(b"Filter") {
                let data = stream
                    .decompressed_content()
                    .map_err(|e| Error::read(page, e))?;
                content.extend_from_slice(&data);
            } else {
                content.extend_from_slice(&stream.content);
            }
            content.push(b' ');
        }
        Ok(content)
    }
}

impl PageSource for LopdfBackend {
    fn page_numbers(&self) -> Vec<u32> {
        // BTreeMap keys come out sorted, i.e. in document order.
        self.doc.get_pages().into_keys().collect()
    }

    fn page_text(&self, page: u32) -> Result<String> {
        let page_id = *self
            .doc
            .get_pages()
            .get(&page)
            .ok_or_else(|| Error::read(page, "page not found"))?;

        let content = self.page_content(page, page_id)?;
        Content::decode(&content).map_err(|e| Error::read(page, e))?;

        self.doc
            .extract_text(&[page])
            .map_err(|e| Error::read(page, e))
    }
}
