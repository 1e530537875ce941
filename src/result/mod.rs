//! Outcome of a split run.

use std::fmt;

use bytes::Bytes;

use crate::chunk::ChunkFile;
use crate::error::SplitError;

/// The terminal outcome of one split run.
///
/// A closed two-variant type: callers branch on it with `match` instead of
/// catching an error. Built once per run and never mutated.
///
/// # Example
///
/// ```
/// use csvsplit::{SplitConfig, SplitResult, Splitter};
///
/// let result = Splitter::new(SplitConfig::new("missing.csv", "out")).run();
///
/// match result {
///     SplitResult::Success => println!("done"),
///     SplitResult::Failure { message } => {
///         assert_eq!(message, "Input file 'missing.csv' not found.");
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum SplitResult {
    /// Every line was consumed and every chunk file was written.
    Success,

    /// The run aborted.
    Failure {
        /// Human-readable, single-line description of the failure.
        message: String,
    },
}

impl SplitResult {
    /// Creates a failure from anything printable.
    pub fn failure(message: impl Into<String>) -> Self {
        SplitResult::Failure {
            message: message.into(),
        }
    }

    /// Returns true for [`SplitResult::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, SplitResult::Success)
    }

    /// Returns the failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            SplitResult::Success => None,
            SplitResult::Failure { message } => Some(message),
        }
    }
}

impl<T> From<Result<T, SplitError>> for SplitResult {
    fn from(result: Result<T, SplitError>) -> Self {
        match result {
            Ok(_) => SplitResult::Success,
            Err(e) => SplitResult::failure(e.to_string()),
        }
    }
}

impl fmt::Display for SplitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitResult::Success => write!(f, "CSV split successfully completed."),
            SplitResult::Failure { message } => write!(f, "CSV split failed: {}", message),
        }
    }
}

/// What a successful run produced.
///
/// Returned by [`Splitter::split`](crate::Splitter::split); `run()` collapses
/// it into [`SplitResult::Success`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitSummary {
    /// Written files in chunk order.
    pub files: Vec<ChunkFile>,

    /// Data lines read from the input, header excluded.
    pub total_lines: u64,

    /// The captured header line, if any, as read from the input.
    pub header: Option<Bytes>,
}

impl SplitSummary {
    /// Returns the number of chunk files written.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns the total bytes written across all chunk files.
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.bytes).sum()
    }
}
