//! Fixed-size overlapping text chunking.

mod options;
mod splitter;

pub use options::{ChunkOptions, DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP};
pub use splitter::{Chunk, Chunks, TextChunker};

use crate::error::Result;

/// Split `text` into overlapping chunks of at most `chunk_size` characters.
///
/// Fails with [`Error::InvalidChunkParameters`](crate::Error::InvalidChunkParameters)
/// unless `chunk_size > 0` and `overlap < chunk_size`.
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Result<Vec<String>> {
    Ok(TextChunker::new(chunk_size, overlap)?.split(text))
}
