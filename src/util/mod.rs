//! Internal utility functions and helpers.
//!
//! Line framing shared by the sync iterator and the async stream. It is an
//! implementation detail and not part of the public API.

use bytes::{Bytes, BytesMut};

/// Splits a byte stream into lines, fed one reader buffer at a time.
///
/// A line ends at `\n`, `\r` or `\r\n`; the terminator is not part of the
/// line. Line bytes are passed through untouched, whatever their encoding.
/// A `\r\n` pair split across two buffers still counts as one terminator.
#[derive(Debug, Default)]
pub(crate) struct LineFramer {
    partial: BytesMut,
    // Last buffer ended on `\r`; a leading `\n` in the next one belongs to it
    skip_lf: bool,
}

impl LineFramer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Consumes bytes from `buf` up to and including the next terminator.
    ///
    /// Returns how many bytes were used and the completed line, if any.
    /// When no terminator is found the whole buffer is kept as a partial line.
    pub(crate) fn feed(&mut self, buf: &[u8]) -> (usize, Option<Bytes>) {
        let mut start = 0;
        if self.skip_lf && !buf.is_empty() {
            self.skip_lf = false;
            if buf[0] == b'\n' {
                start = 1;
            }
        }

        let rest = &buf[start..];
        match rest.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) => {
                self.partial.extend_from_slice(&rest[..i]);
                self.skip_lf = rest[i] == b'\r';
                (start + i + 1, Some(self.partial.split().freeze()))
            }
            None => {
                self.partial.extend_from_slice(rest);
                (buf.len(), None)
            }
        }
    }

    /// Ends the stream, returning the unterminated last line if there is one.
    pub(crate) fn finish(&mut self) -> Option<Bytes> {
        self.skip_lf = false;
        if self.partial.is_empty() {
            None
        } else {
            Some(self.partial.split().freeze())
        }
    }
}
