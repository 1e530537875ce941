//! csvsplit
//!
//! Streaming line-count splitting for large delimited text files.
//!
//! `csvsplit` reads a text file line by line and writes it back out as a
//! sequence of numbered files (`split_1.csv`, `split_2.csv`, …), each holding
//! at most `lines_per_file` data lines and, optionally, a copy of the
//! header row.
//!
//! The crate intentionally:
//! - does NOT parse CSV fields (quoting, embedded newlines)
//! - does NOT decode text: lines are raw bytes, copied through unchanged
//! - does NOT validate schemas
//! - does NOT compress output
//! - does NOT resume partial runs
//!
//! It only does one thing: **Read lines → write numbered chunk files**
//!
//! # Splitting a file
//!
//! ```no_run
//! use csvsplit::{SplitConfig, SplitResult, Splitter};
//!
//! let config = SplitConfig::new("large.csv", "out").with_lines_per_file(1000);
//!
//! match Splitter::new(config).run() {
//!     SplitResult::Success => println!("CSV split successfully completed."),
//!     SplitResult::Failure { message } => eprintln!("CSV split failed: {}", message),
//! }
//! ```
//!
//! # Chunking without files
//!
//! ```
//! use csvsplit::LineChunker;
//! use std::io::Cursor;
//!
//! let chunker = LineChunker::new(2, true)?;
//! for chunk in chunker.chunks(Cursor::new("id\n1\n2\n3\n")) {
//!     let chunk = chunk?;
//!     println!("{} -> {} lines", chunk.file_name(), chunk.len());
//! }
//! # Ok::<(), csvsplit::SplitError>(())
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use csvsplit::{chunk_lines_async, LineChunker};
//!
//! let mut stream = chunk_lines_async(reader, LineChunker::new(1000, true)?);
//! while let Some(chunk) = stream.next().await {
//!     println!("chunk {}", chunk?.index);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod chunker;
mod config;
mod error;
mod result;
mod splitter;

mod buffer; // internal bounded line buffer
mod hash; // internal blake3 digests
mod util; // internal line framing

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface
//

pub use chunk::{ChunkFile, ChunkHash, LineChunk};
pub use chunker::{LineChunker, LineChunks};
pub use config::{DEFAULT_LINES_PER_FILE, SplitConfig};
pub use error::SplitError;
pub use result::{SplitResult, SplitSummary};
pub use splitter::{Splitter, split_file};

#[cfg(feature = "async-io")]
pub use async_stream::{LineChunkStream, chunk_lines_async};
