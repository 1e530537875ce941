//! Command-line entry point.
//!
//! Run with:
//!     csvsplit data.csv out/ --lines-per-file 500 --list

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::builder::TypedValueParser;
use tracing_subscriber::EnvFilter;

use csvsplit::{DEFAULT_LINES_PER_FILE, SplitConfig, SplitResult, SplitSummary, Splitter};

/// Split a large CSV file into numbered chunk files.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// File to split
    input: PathBuf,

    /// Directory receiving split_<N>.csv files (created if missing)
    output_dir: PathBuf,

    /// Maximum data lines per output file
    #[arg(short, long, default_value_t = DEFAULT_LINES_PER_FILE,
          value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize))]
    lines_per_file: usize,

    /// Treat the first line as data instead of a header
    #[arg(long)]
    no_header: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Print every written file with its line count, size and digest
    #[arg(long)]
    list: bool,
}

/// One line per written file, in chunk order.
fn file_report(summary: &SplitSummary) -> String {
    summary
        .files
        .iter()
        .map(|file| format!("{}\n", file))
        .collect()
}

fn init_logging(quiet: bool) -> anyhow::Result<()> {
    let default = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.quiet)?;

    let config = SplitConfig::new(cli.input, cli.output_dir)
        .with_lines_per_file(cli.lines_per_file)
        .with_include_header(!cli.no_header);

    let outcome = Splitter::new(config).split();
    if let (true, Ok(summary)) = (cli.list, &outcome) {
        print!("{}", file_report(summary));
    }

    let result = SplitResult::from(outcome);
    println!("{}", result);

    Ok(match result {
        SplitResult::Success => ExitCode::SUCCESS,
        SplitResult::Failure { .. } => ExitCode::FAILURE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["csvsplit", "in.csv", "out"]).unwrap();
        assert_eq!(cli.lines_per_file, DEFAULT_LINES_PER_FILE);
        assert!(!cli.no_header);
        assert!(!cli.list);
    }

    #[test]
    fn test_file_report_lists_each_file() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("in.csv");
        std::fs::write(&input, "h\n1\n2\n3\n").unwrap();
        let config = SplitConfig::new(input, tmp.path().join("out")).with_lines_per_file(2);

        let summary = Splitter::new(config).split().unwrap();
        let report = file_report(&summary);

        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], summary.files[0].to_string());
        assert!(lines[1].contains("split_2.csv (1 lines, 4 bytes"));
    }

    #[test]
    fn test_zero_lines_rejected() {
        assert!(Cli::try_parse_from(["csvsplit", "in.csv", "out", "-l", "0"]).is_err());
    }
}
