//! Chunk types.
//!
//! - [`LineChunk`] - One output file's worth of lines, plus the header
//! - [`ChunkFile`] - Record of a chunk written to disk
//! - [`ChunkHash`] - 32-byte digest of a written chunk file

mod data;
mod file;
mod hash;

pub use data::LineChunk;
pub use file::ChunkFile;
pub use hash::ChunkHash;
