//! Command-line interface for the platepick recommendation engine.
//!
//! Three subcommands work against a CSV catalogue:
//! - `recommend` ranks the catalogue for a set of preferences and prints the
//!   top results as JSON.
//! - `import` validates a catalogue file and prints a per-row report.
//! - `export` rewrites the valid rows of a catalogue in canonical form.
#![forbid(unsafe_code)]

use std::io::Write;
use std::process::ExitCode;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;

mod catalogue;
mod error;
mod recommend;

pub use error::CliError;

use catalogue::{ExportArgs, ImportArgs, run_export, run_import};
use recommend::{RecommendArgs, run_recommend};

pub(crate) const ARG_CATALOGUE: &str = "catalogue";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ENV_RECOMMEND_CATALOGUE: &str = "PLATEPICK_CMDS_RECOMMEND_CATALOGUE";
pub(crate) const ENV_IMPORT_CATALOGUE: &str = "PLATEPICK_CMDS_IMPORT_CATALOGUE";
pub(crate) const ENV_EXPORT_CATALOGUE: &str = "PLATEPICK_CMDS_EXPORT_CATALOGUE";
pub(crate) const ENV_EXPORT_OUTPUT: &str = "PLATEPICK_CMDS_EXPORT_OUTPUT";

/// How a successful invocation finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every record was processed.
    Completed,
    /// The command ran but rejected some catalogue rows.
    RowsRejected,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Completed => Self::SUCCESS,
            Outcome::RowsRejected => Self::FAILURE,
        }
    }
}

/// Run the CLI with the current process arguments, writing results to
/// standard output.
///
/// # Errors
/// Returns a [`CliError`] when arguments or configuration are invalid, or
/// when the selected command fails.
pub fn run() -> Result<Outcome, CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<Outcome, CliError> {
    match command {
        Command::Recommend(args) => run_recommend(args, writer),
        Command::Import(args) => run_import(args, writer),
        Command::Export(args) => run_export(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "platepick",
    about = "Rank restaurants against a diner's preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a catalogue for the given preferences.
    Recommend(RecommendArgs),
    /// Validate a catalogue file and report rejected rows.
    Import(ImportArgs),
    /// Rewrite the valid rows of a catalogue in canonical form.
    Export(ExportArgs),
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match platepick_fs::is_regular_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Run a future to completion on a fresh current-thread runtime.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output, CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    Ok(runtime.block_on(future))
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
