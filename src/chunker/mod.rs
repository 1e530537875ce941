//! Line chunking engine.
//!
//! - [`LineChunker`] - Stateful, I/O-free engine with `push()`/`finish()` API
//! - [`LineChunks`] - Iterator driving a `LineChunker` from a [`std::io::BufRead`]

mod engine;
mod iter;

pub use engine::LineChunker;
pub use iter::LineChunks;
