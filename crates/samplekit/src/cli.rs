//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// `samplekit` — descriptive statistics with a self-checking harness.
#[derive(Parser, Debug)]
#[command(name = "samplekit", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the built-in verification suite.
    Check(CheckArgs),
    /// Summarize a numeric sample from a file or stdin.
    Summary(SummaryArgs),
    /// Print the 2x2 covariance matrix of two samples.
    Cov(CovArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// RNG seed for the sampling checks.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Number of draws per sampling check.
    #[arg(long, default_value_t = 10_000)]
    pub draws: usize,

    /// Emit the run as a JSON report instead of console lines.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// Input file (reads stdin when omitted).
    ///
    /// Sample files are plain text: whitespace/newline-separated decimal
    /// numbers, blank lines and `#` comments skipped.
    pub file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct CovArgs {
    /// File holding the X sample.
    pub x: PathBuf,

    /// File holding the Y sample.
    pub y: PathBuf,

    /// Emit the matrix as JSON instead of aligned rows.
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
