//! # samplekit
//!
//! **CLI Binary**
//!
//! This is the entry point for the `samplekit` command-line application.
//! It orchestrates the other crates to perform the requested actions.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

#![forbid(unsafe_code)]

mod cli;
mod commands;
mod error_hints;
mod input;

use anyhow::Result;
use clap::Parser;

pub use cli::{CheckArgs, Cli, Commands, CovArgs, OutputFormat, SummaryArgs};

/// Entry point used by the `samplekit` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    commands::dispatch(cli)
}

/// Render an error chain (plus contextual hints) for the binary shim.
#[must_use]
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
