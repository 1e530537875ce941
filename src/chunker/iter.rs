//! Synchronous chunk iterator over a buffered reader.

use std::io::{BufRead, ErrorKind};

use crate::chunk::LineChunk;
use crate::chunker::LineChunker;
use crate::error::SplitError;
use crate::util::LineFramer;

/// An iterator that yields chunks from a buffered reader.
///
/// `LineChunks` frames the reader's buffered bytes into lines and feeds them
/// to a [`LineChunker`]. A line ends at `\n`, `\r\n` or a lone `\r`; line
/// bytes are passed through unchanged, so any encoding is accepted. It is
/// lazy: at most one chunk's worth of lines is held in memory.
///
/// After the first error the iterator is fused and yields `None`.
///
/// # Example
///
/// ```
/// use csvsplit::LineChunker;
/// use std::io::Cursor;
///
/// let input = Cursor::new("h\n1\n2\n3\n");
/// let chunks = LineChunker::new(2, true)?
///     .chunks(input)
///     .collect::<Result<Vec<_>, _>>()?;
///
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[1].lines, ["3"]);
/// # Ok::<(), csvsplit::SplitError>(())
/// ```
pub struct LineChunks<R> {
    reader: R,
    chunker: LineChunker,
    framer: LineFramer,
    finished: bool,
}

impl<R: BufRead> LineChunks<R> {
    /// Creates a new chunk iterator.
    pub fn new(reader: R, chunker: LineChunker) -> Self {
        Self {
            reader,
            chunker,
            framer: LineFramer::new(),
            finished: false,
        }
    }

    /// Returns the chunker driving this iterator.
    pub fn chunker(&self) -> &LineChunker {
        &self.chunker
    }

    /// Consumes the iterator, returning the reader and the chunker.
    pub fn into_parts(self) -> (R, LineChunker) {
        (self.reader, self.chunker)
    }
}

impl<R: BufRead> Iterator for LineChunks<R> {
    type Item = Result<LineChunk, SplitError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let (used, line) = match self.reader.fill_buf() {
                Ok([]) => {
                    // End of stream - an unterminated last line still counts
                    self.finished = true;
                    let tail = self.framer.finish().and_then(|l| self.chunker.push(l));
                    return tail.or_else(|| self.chunker.finish()).map(Ok);
                }
                Ok(buf) => self.framer.feed(buf),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            };
            self.reader.consume(used);

            if let Some(chunk) = line.and_then(|l| self.chunker.push(l)) {
                return Some(Ok(chunk));
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for LineChunks<R> {}
