//! Error types for csvsplit.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur during a split run.
///
/// Every variant is terminal for the run that produced it. The `Display`
/// output is the one-line message carried by
/// [`SplitResult::Failure`](crate::SplitResult::Failure).
#[derive(Debug)]
pub enum SplitError {
    /// The input path does not reference an existing file.
    InputNotFound {
        /// The path as configured.
        path: PathBuf,
    },

    /// The output directory was missing and could not be created.
    OutputDir {
        /// The directory that was being created.
        path: PathBuf,
        /// The underlying failure.
        source: std::io::Error,
    },

    /// An I/O error occurred while reading input or writing a chunk file.
    Io(std::io::Error),

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::InputNotFound { path } => {
                write!(f, "Input file '{}' not found.", path.display())
            }
            SplitError::OutputDir { path, source } => write!(
                f,
                "Could not create output directory '{}': {}",
                path.display(),
                source
            ),
            SplitError::Io(e) => write!(f, "An error occurred: {}", e),
            SplitError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SplitError::Io(e) => Some(e),
            SplitError::OutputDir { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SplitError {
    fn from(e: std::io::Error) -> Self {
        SplitError::Io(e)
    }
}
