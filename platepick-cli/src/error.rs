//! Error types emitted by the platepick CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use platepick_data::{CsvError, RecommendError};
use thiserror::Error;

/// Errors emitted by the platepick CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the configuration field.
        field: &'static str,
        /// Environment variable that can supply the field.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Name of the configuration field.
        field: &'static str,
        /// Path involved in the failure.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Name of the configuration field.
        field: &'static str,
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the catalogue file failed.
    #[error("failed to open catalogue at {path:?}: {source}")]
    OpenCatalogue {
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The catalogue file could not be read as CSV.
    #[error("failed to read catalogue at {path:?}: {source}")]
    ReadCatalogue {
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: CsvError,
    },
    /// Creating the export file failed.
    #[error("failed to create output at {path:?}: {source}")]
    CreateOutput {
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Writing the exported catalogue failed.
    #[error("failed to write catalogue to {path:?}: {source}")]
    WriteCatalogue {
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: CsvError,
    },
    /// The recommendation request was refused.
    #[error(transparent)]
    Recommend(#[from] RecommendError),
    /// The async runtime could not be started.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
