//! Bounded in-memory line buffer.
//!
//! Holds the data lines of the chunk currently being assembled. It is an
//! implementation detail of the chunker and not part of the public API.

mod line;

pub(crate) use line::LineBuffer;
