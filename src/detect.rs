//! PDF header sniffing.
//!
//! Rejects non-PDF input before it reaches the parser, so that a text file
//! or an HTML page renamed to `.pdf` fails with a clear open error.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// PDF format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFormat {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
}

impl std::fmt::Display for PdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"
const HEADER_LEN: usize = PDF_MAGIC_LEN + VERSION_LEN;

/// Detect PDF format from a file path.
///
/// # Returns
/// * `Ok(PdfFormat)` if the file starts with a PDF header
/// * `Err(Error::DocumentOpen)` if the file is missing, unreadable, or not a PDF
///
/// # Example
/// ```no_run
/// use pdfchunk::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("document.pdf").unwrap();
/// println!("PDF version: {}", format.version);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<PdfFormat> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::open(path, e))?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; HEADER_LEN];
    reader
        .read_exact(&mut header)
        .map_err(|_| Error::open(path, "file is too short to be a PDF"))?;
    detect_format_from_bytes(&header).map_err(|e| match e {
        Error::DocumentOpen { reason, .. } => Error::open(path, reason),
        other => other,
    })
}

/// Detect PDF format from the leading bytes of a document.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<PdfFormat> {
    if data.len() < HEADER_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::open("", "not a PDF document"));
    }

    // "1.7" from "%PDF-1.7"
    let version_bytes = &data[PDF_MAGIC_LEN..HEADER_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::open(
            "",
            format!("unsupported PDF version {:?}", version),
        ));
    }

    Ok(PdfFormat { version })
}

fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}
