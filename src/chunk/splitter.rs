//! Sliding-window text splitter.

use serde::Serialize;

use crate::error::Result;

use super::options::ChunkOptions;

/// A window over the source text.
///
/// Offsets count characters (Unicode scalar values), not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chunk<'a> {
    /// Position in the chunk sequence (0-indexed)
    pub index: usize,
    /// Character offset of the first character
    pub start: usize,
    /// Character offset one past the last character
    pub end: usize,
    /// Chunk content
    pub text: &'a str,
}

impl Chunk<'_> {
    /// Length in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the chunk has no characters. Never true for emitted chunks.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Splits text into fixed-size, overlapping character windows.
///
/// The window starts at 0 and moves forward by `chunk_size - overlap`
/// characters until a window reaches the end of the text. No attention is
/// paid to word or sentence boundaries.
///
/// # Example
///
/// ```
/// use pdfchunk::TextChunker;
///
/// let chunker = TextChunker::new(5, 2)?;
/// assert_eq!(chunker.split("abcdefghij"), vec!["abcde", "defgh", "ghij"]);
/// # Ok::<(), pdfchunk::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChunker {
    options: ChunkOptions,
}

impl TextChunker {
    /// Create a chunker, rejecting parameters that would not advance.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        Self::from_options(
            ChunkOptions::new()
                .with_chunk_size(chunk_size)
                .with_overlap(overlap),
        )
    }

    /// Create a chunker from options.
    pub fn from_options(options: ChunkOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Maximum chunk length in characters.
    pub fn chunk_size(&self) -> usize {
        self.options.chunk_size
    }

    /// Characters shared by consecutive chunks.
    pub fn overlap(&self) -> usize {
        self.options.overlap
    }

    /// Lazily iterate over the chunks of `text`.
    ///
    /// The iterator is `Clone`, so the sequence can be restarted from any
    /// point without re-scanning what came before.
    pub fn chunks<'a>(&self, text: &'a str) -> Chunks<'a> {
        Chunks {
            text,
            chunk_size: self.options.chunk_size,
            stride: self.options.stride(),
            byte_pos: 0,
            char_pos: 0,
            index: 0,
            finished: text.is_empty(),
        }
    }

    /// Split `text` into owned chunk strings.
    pub fn split(&self, text: &str) -> Vec<String> {
        let chunks: Vec<String> = self.chunks(text).map(|c| c.text.to_string()).collect();
        log::debug!(
            "Split {} characters into {} chunks (size {}, overlap {})",
            text.chars().count(),
            chunks.len(),
            self.options.chunk_size,
            self.options.overlap
        );
        chunks
    }
}

impl Default for TextChunker {
    fn default() -> Self {
        Self {
            options: ChunkOptions::default(),
        }
    }
}

/// Iterator over the chunks of a string, created by [`TextChunker::chunks`].
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    text: &'a str,
    chunk_size: usize,
    stride: usize,
    byte_pos: usize,
    char_pos: usize,
    index: usize,
    finished: bool,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let text: &'a str = self.text;
        let rest = &text[self.byte_pos..];

        // Walk at most chunk_size characters, remembering where the next
        // window starts. Running off the end without reaching chunk_size
        // means this window is the last one.
        let mut len = 0;
        let mut end = rest.len();
        let mut next_start = rest.len();
        let mut reached_end = true;
        for (offset, _) in rest.char_indices() {
            if len == self.stride {
                next_start = offset;
            }
            if len == self.chunk_size {
                end = offset;
                reached_end = false;
                break;
            }
            len += 1;
        }

        let chunk = Chunk {
            index: self.index,
            start: self.char_pos,
            end: self.char_pos + len,
            text: &rest[..end],
        };

        if reached_end {
            self.finished = true;
        } else {
            self.byte_pos += next_start;
            self.char_pos += self.stride;
            self.index += 1;
        }

        Some(chunk)
    }
}

impl std::iter::FusedIterator for Chunks<'_> {}
