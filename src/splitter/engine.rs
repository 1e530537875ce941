//! Core splitting engine - Splitter.
//!
//! A run goes through these steps, stopping at the first error:
//!
//! 1. Validate the configuration
//! 2. Check that the input is an existing file and open it (before any
//!    output side effect)
//! 3. Create the output directory if it is missing
//! 4. Stream the input through a [`LineChunker`], writing each chunk as
//!    `split_<N>.csv` as soon as it is full
//!
//! Files written before an error stay on disk.

use std::fs::File;
use std::io::BufReader;

use bytes::Bytes;

use crate::chunker::LineChunker;
use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::result::{SplitResult, SplitSummary};
use crate::splitter::writer::{ensure_output_dir, write_chunk};

/// Splits one input file into numbered chunk files.
///
/// A `Splitter` holds only its configuration; each call to [`Splitter::run`]
/// or [`Splitter::split`] is an independent run with its own buffer and
/// counters, so one instance can be reused.
///
/// # Example
///
/// ```no_run
/// use csvsplit::{SplitConfig, SplitResult, Splitter};
///
/// let config = SplitConfig::new("large.csv", "out").with_lines_per_file(100);
///
/// match Splitter::new(config).run() {
///     SplitResult::Success => println!("CSV split successfully completed."),
///     SplitResult::Failure { message } => eprintln!("CSV split failed: {}", message),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Splitter {
    config: SplitConfig,
}

impl Splitter {
    /// Creates a new splitter with the given configuration.
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this splitter.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Runs the split and reports the outcome as a [`SplitResult`].
    ///
    /// Never panics on I/O problems: every error becomes
    /// [`SplitResult::Failure`] with a one-line message.
    pub fn run(&self) -> SplitResult {
        self.split().into()
    }

    /// Runs the split and returns what was written.
    ///
    /// # Errors
    ///
    /// - [`SplitError::InvalidConfig`] if `lines_per_file` is zero
    /// - [`SplitError::InputNotFound`] if the input is not an existing file
    ///   or cannot be opened for reading
    /// - [`SplitError::OutputDir`] if the output directory cannot be created
    /// - [`SplitError::Io`] for any read or write failure mid-run
    pub fn split(&self) -> Result<SplitSummary, SplitError> {
        let outcome = self.split_inner();
        match &outcome {
            Ok(summary) => tracing::info!(
                files = summary.file_count(),
                lines = summary.total_lines,
                "CSV splitting completed successfully"
            ),
            Err(e) => tracing::error!(error = %e, "error processing CSV file"),
        }
        outcome
    }

    fn split_inner(&self) -> Result<SplitSummary, SplitError> {
        self.config.validate()?;

        let input = self.config.input_path();
        let not_found = || SplitError::InputNotFound {
            path: input.to_path_buf(),
        };
        if !input.is_file() {
            return Err(not_found());
        }
        // Opened before the output directory exists so an unreadable input
        // leaves no trace
        let file = File::open(input).map_err(|e| {
            tracing::debug!(path = %input.display(), error = %e, "cannot open input");
            not_found()
        })?;

        let output = self.config.output_path();
        ensure_output_dir(output)?;

        let reader = BufReader::new(file);
        let mut chunks = LineChunker::from_config(&self.config)?.chunks(reader);

        let mut files = Vec::new();
        for chunk in &mut chunks {
            files.push(write_chunk(output, &chunk?)?);
        }

        let (_, chunker) = chunks.into_parts();
        Ok(SplitSummary {
            files,
            total_lines: chunker.lines_seen(),
            header: chunker.header().map(Bytes::copy_from_slice),
        })
    }
}

/// Splits a file in one call.
///
/// Equivalent to `Splitter::new(config).run()`.
pub fn split_file(config: SplitConfig) -> SplitResult {
    Splitter::new(config).run()
}
