//! Core chunking engine - LineChunker with a streaming API.
//!
//! The engine never touches I/O. It is fed one line at a time:
//!
//! - `push()` - Feed the next input line; returns a chunk when the buffer fills
//! - `finish()` - Flush the remaining lines when the input ends
//!
//! # Example
//!
//! ```
//! use csvsplit::LineChunker;
//!
//! let mut chunker = LineChunker::new(2, true)?;
//!
//! assert!(chunker.push("id,name").is_none()); // header
//! assert!(chunker.push("1,a").is_none());
//! let full = chunker.push("2,b").unwrap();
//! assert_eq!(full.lines, ["1,a", "2,b"]);
//!
//! chunker.push("3,c");
//! let last = chunker.finish().unwrap();
//! assert_eq!(last.index, 2);
//! assert_eq!(last.header(), Some(&b"id,name"[..]));
//! # Ok::<(), csvsplit::SplitError>(())
//! ```

use std::io::BufRead;

use bytes::Bytes;

use crate::buffer::LineBuffer;
use crate::chunk::LineChunk;
use crate::chunker::LineChunks;
use crate::config::SplitConfig;
use crate::error::SplitError;

/// A chunker that groups a stream of lines into bounded chunks.
///
/// `LineChunker` owns the header (once captured), the line buffer and the
/// running counters for one input stream.
///
/// # Guarantees
///
/// - Chunks are numbered contiguously from 1 in emission order
/// - Every chunk returned by `push()` holds exactly `lines_per_file` lines
/// - Only the chunk returned by `finish()` may be shorter, and it is never empty
/// - Lines are neither dropped, duplicated nor reordered
#[derive(Debug)]
pub struct LineChunker {
    buffer: LineBuffer,
    header: Option<Bytes>,
    include_header: bool,
    awaiting_header: bool,
    lines_per_file: usize,
    lines_seen: u64,
    chunks_emitted: usize,
}

impl LineChunker {
    /// Creates a new chunker.
    ///
    /// # Arguments
    ///
    /// * `lines_per_file` - Maximum data lines per chunk (must be non-zero)
    /// * `include_header` - Whether the first pushed line is the header
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidConfig`] if `lines_per_file` is zero.
    pub fn new(lines_per_file: usize, include_header: bool) -> Result<Self, SplitError> {
        if lines_per_file == 0 {
            return Err(SplitError::InvalidConfig {
                message: "lines_per_file must be greater than zero",
            });
        }

        Ok(Self {
            buffer: LineBuffer::new(lines_per_file),
            header: None,
            include_header,
            awaiting_header: include_header,
            lines_per_file,
            lines_seen: 0,
            chunks_emitted: 0,
        })
    }

    /// Creates a chunker using the chunk size and header setting of `config`.
    pub fn from_config(config: &SplitConfig) -> Result<Self, SplitError> {
        Self::new(config.lines_per_file(), config.include_header())
    }

    /// Pushes the next input line (without its terminator).
    ///
    /// With header handling enabled the very first line pushed becomes the
    /// header and is never counted as data. Returns a full chunk when this
    /// line fills the buffer. Lines are kept as raw bytes.
    pub fn push(&mut self, line: impl Into<Bytes>) -> Option<LineChunk> {
        let line = line.into();
        if self.awaiting_header {
            self.awaiting_header = false;
            tracing::debug!(header = %String::from_utf8_lossy(&line), "captured header line");
            self.header = Some(line);
            return None;
        }

        self.lines_seen += 1;
        if self.buffer.push(line) {
            Some(self.emit())
        } else {
            None
        }
    }

    /// Finalizes the stream and returns the trailing partial chunk, if any.
    ///
    /// Returns `None` when no data lines are buffered, including for empty
    /// and header-only input. Calling it again returns `None`.
    pub fn finish(&mut self) -> Option<LineChunk> {
        if self.buffer.is_empty() {
            return None;
        }
        Some(self.emit())
    }

    /// Resets the chunker for a new stream.
    ///
    /// Clears the header, buffered lines and counters. The chunk size and
    /// header setting are kept.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.header = None;
        self.awaiting_header = self.include_header;
        self.lines_seen = 0;
        self.chunks_emitted = 0;
    }

    /// Creates an iterator that reads lines from `reader` and yields chunks.
    pub fn chunks<R: BufRead>(self, reader: R) -> LineChunks<R> {
        LineChunks::new(reader, self)
    }

    fn emit(&mut self) -> LineChunk {
        self.chunks_emitted += 1;
        LineChunk::new(self.chunks_emitted, self.header.clone(), self.buffer.drain())
    }

    /// Returns the captured header line, if any.
    pub fn header(&self) -> Option<&[u8]> {
        self.header.as_deref()
    }

    /// Returns the number of data lines waiting in the buffer.
    pub fn pending_len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the number of chunks emitted so far.
    pub fn chunks_emitted(&self) -> usize {
        self.chunks_emitted
    }

    /// Returns the number of data lines pushed so far (header excluded).
    pub fn lines_seen(&self) -> u64 {
        self.lines_seen
    }

    /// Returns the maximum data lines per chunk.
    pub fn lines_per_file(&self) -> usize {
        self.lines_per_file
    }
}
