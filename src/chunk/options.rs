//! Chunking parameters.

use serde::Serialize;

use crate::error::{Error, Result};

/// Default maximum chunk length, in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Default number of characters shared by consecutive chunks.
pub const DEFAULT_OVERLAP: usize = 50;

/// Options for splitting text into chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChunkOptions {
    /// Maximum chunk length in characters
    pub chunk_size: usize,

    /// Characters repeated at the start of the next chunk
    pub overlap: usize,
}

impl ChunkOptions {
    /// Create new chunk options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set overlap.
    pub fn with_overlap(mut self, overlap: usize) -> Self {
        self.overlap = overlap;
        self
    }

    /// Check that the window advances on every step.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 || self.overlap >= self.chunk_size {
            return Err(Error::InvalidChunkParameters {
                chunk_size: self.chunk_size,
                overlap: self.overlap,
            });
        }
        Ok(())
    }

    /// Distance between the starts of consecutive chunks.
    ///
    /// Only meaningful for validated options.
    pub fn stride(&self) -> usize {
        self.chunk_size.saturating_sub(self.overlap)
    }
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ChunkOptions::default();
        assert_eq!(options.chunk_size, 500);
        assert_eq!(options.overlap, 50);
        assert_eq!(options.stride(), 450);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let options = ChunkOptions::new().with_chunk_size(5).with_overlap(2);
        assert_eq!(options.stride(), 3);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_advancing() {
        for (chunk_size, overlap) in [(0, 0), (3, 3), (3, 10)] {
            let options = ChunkOptions::new()
                .with_chunk_size(chunk_size)
                .with_overlap(overlap);
            assert!(matches!(
                options.validate(),
                Err(Error::InvalidChunkParameters { .. })
            ));
        }
    }

    #[test]
    fn test_zero_overlap_is_valid() {
        let options = ChunkOptions::new().with_chunk_size(1).with_overlap(0);
        assert!(options.validate().is_ok());
    }
}
