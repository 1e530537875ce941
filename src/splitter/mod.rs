//! File splitting engine.
//!
//! - [`Splitter`] - Runs one split: validates, reads the input, writes chunk files
//! - [`split_file`] - One-shot convenience wrapper around [`Splitter::run`]

mod engine;
mod writer;

pub use engine::{Splitter, split_file};
