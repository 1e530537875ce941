//! The line buffer backing each chunk.

use bytes::Bytes;

/// An ordered, bounded sequence of raw lines.
///
/// The buffer never holds more than `capacity` lines: [`LineBuffer::push`]
/// reports when capacity is reached and the owner drains it before pushing
/// again.
#[derive(Debug)]
pub(crate) struct LineBuffer {
    lines: Vec<Bytes>,
    capacity: usize,
}

impl LineBuffer {
    /// Creates an empty buffer bounded to `capacity` lines.
    ///
    /// The backing allocation is capped so that a huge `capacity` does not
    /// reserve memory up front.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity.min(MAX_PREALLOC_LINES)),
            capacity,
        }
    }

    /// Appends a line and returns true if the buffer is now full.
    pub(crate) fn push(&mut self, line: Bytes) -> bool {
        debug_assert!(!self.is_full(), "push into a full LineBuffer");
        self.lines.push(line);
        self.is_full()
    }

    /// Returns true once the buffer holds `capacity` lines.
    pub(crate) fn is_full(&self) -> bool {
        self.lines.len() >= self.capacity
    }

    pub(crate) fn len(&self) -> usize {
        self.lines.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Takes every buffered line in order, leaving the buffer empty.
    pub(crate) fn drain(&mut self) -> Vec<Bytes> {
        let next = Vec::with_capacity(self.capacity.min(MAX_PREALLOC_LINES));
        std::mem::replace(&mut self.lines, next)
    }

    /// Discards every buffered line.
    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Upper bound on lines reserved ahead of time per buffer.
const MAX_PREALLOC_LINES: usize = 4096;
