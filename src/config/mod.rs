//! Configuration for a split run.
//!
//! [`SplitConfig`] names the input file, the output directory, how many data
//! lines go into each chunk file and whether the first input line is a header
//! to repeat atop every chunk.
//!
//! # Example
//!
//! ```
//! use csvsplit::SplitConfig;
//!
//! let config = SplitConfig::new("data.csv", "out")
//!     .with_lines_per_file(500)
//!     .with_include_header(false);
//!
//! assert_eq!(config.lines_per_file(), 500);
//! assert!(config.validate().is_ok());
//! ```

use std::path::{Path, PathBuf};

use crate::error::SplitError;

/// Default number of data lines per output file.
pub const DEFAULT_LINES_PER_FILE: usize = 1000;

/// Configuration for one split run.
///
/// Once handed to a [`Splitter`](crate::Splitter) the configuration is never
/// mutated. The `with_*` setters consume and return the value, so a config is
/// built up front and then passed by value.
///
/// # Constraints
///
/// `lines_per_file` must be non-zero. The builder setters do not check this;
/// call [`SplitConfig::validate`] or let the splitter do it before any I/O.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SplitConfig {
    /// Path of the file to split.
    input_path: PathBuf,

    /// Directory receiving `split_<N>.csv` files.
    output_path: PathBuf,

    /// Maximum data lines per output file.
    lines_per_file: usize,

    /// Treat the first input line as a header and repeat it in every file.
    include_header: bool,
}

impl SplitConfig {
    /// Creates a configuration with default chunk size and header handling.
    ///
    /// # Example
    ///
    /// ```
    /// use csvsplit::{SplitConfig, DEFAULT_LINES_PER_FILE};
    ///
    /// let config = SplitConfig::new("in.csv", "out");
    /// assert_eq!(config.lines_per_file(), DEFAULT_LINES_PER_FILE);
    /// assert!(config.include_header());
    /// ```
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            lines_per_file: DEFAULT_LINES_PER_FILE,
            include_header: true,
        }
    }

    /// Sets the maximum number of data lines per output file.
    ///
    /// Note: This does not validate the configuration.
    pub fn with_lines_per_file(mut self, lines: usize) -> Self {
        self.lines_per_file = lines;
        self
    }

    /// Sets whether the first input line is a header.
    pub fn with_include_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Returns the input file path.
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Returns the output directory.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the maximum number of data lines per output file.
    pub fn lines_per_file(&self) -> usize {
        self.lines_per_file
    }

    /// Returns whether the first input line is treated as a header.
    pub fn include_header(&self) -> bool {
        self.include_header
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use csvsplit::SplitConfig;
    ///
    /// let config = SplitConfig::new("in.csv", "out").with_lines_per_file(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), SplitError> {
        if self.lines_per_file == 0 {
            return Err(SplitError::InvalidConfig {
                message: "lines_per_file must be greater than zero",
            });
        }
        Ok(())
    }
}
