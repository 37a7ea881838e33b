//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use platepick_cli::{CliError, run};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();
    match run() {
        Ok(outcome) => outcome.into(),
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => report(&err),
    }
}

/// Route `log` records to stderr, filtered by `RUST_LOG`.
fn init_logging() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        log::debug!("a global logger was already installed");
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the CLI reports fatal errors on stderr"
)]
fn report(err: &CliError) -> ExitCode {
    eprintln!("platepick: {err}");
    ExitCode::FAILURE
}
