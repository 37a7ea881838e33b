//! Import and export commands for CSV catalogue files.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use platepick_data::{CsvImport, export_csv, import_csv};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATALOGUE, ARG_OUTPUT, CliError, ENV_EXPORT_CATALOGUE, ENV_EXPORT_OUTPUT,
    ENV_IMPORT_CATALOGUE, Outcome, block_on, require_existing, write_json,
};

/// CLI arguments for the `import` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "import",
    long_about = "Validate every row of a CSV catalogue and print a JSON \
                 report. The command exits with a failure status when any \
                 row is rejected.",
    about = "Validate a catalogue file and report rejected rows"
)]
#[ortho_config(prefix = "PLATEPICK")]
pub(crate) struct ImportArgs {
    /// Path to the CSV catalogue.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
}

impl ImportArgs {
    fn into_path(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        merged.catalogue.ok_or(CliError::MissingArgument {
            field: ARG_CATALOGUE,
            env: ENV_IMPORT_CATALOGUE,
        })
    }
}

/// CLI arguments for the `export` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "export",
    long_about = "Read a CSV catalogue, drop rows that fail validation, and \
                 write the remaining restaurants in canonical column order.",
    about = "Rewrite the valid rows of a catalogue in canonical form"
)]
#[ortho_config(prefix = "PLATEPICK")]
pub(crate) struct ExportArgs {
    /// Path to the CSV catalogue.
    #[arg(long = ARG_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Destination for the canonical CSV. Missing directories are created.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ExportArgs {
    fn into_config(self) -> Result<ExportConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ExportConfig::try_from(merged)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExportConfig {
    pub(crate) catalogue: Utf8PathBuf,
    pub(crate) output: Utf8PathBuf,
}

impl TryFrom<ExportArgs> for ExportConfig {
    type Error = CliError;

    fn try_from(args: ExportArgs) -> Result<Self, Self::Error> {
        let catalogue = args.catalogue.ok_or(CliError::MissingArgument {
            field: ARG_CATALOGUE,
            env: ENV_EXPORT_CATALOGUE,
        })?;
        let output = args.output.ok_or(CliError::MissingArgument {
            field: ARG_OUTPUT,
            env: ENV_EXPORT_OUTPUT,
        })?;
        Ok(Self { catalogue, output })
    }
}

#[derive(Debug, Serialize)]
struct ExportSummary<'a> {
    output: &'a Utf8Path,
    exported: usize,
    skipped: usize,
}

/// Read and validate the catalogue at `path`.
pub(crate) fn load_catalogue(path: &Utf8Path) -> Result<CsvImport, CliError> {
    let file = platepick_fs::open_catalogue(path).map_err(|source| CliError::OpenCatalogue {
        path: path.to_path_buf(),
        source,
    })?;
    let import = block_on(async move { import_csv(tokio::fs::File::from_std(file)).await })?
        .map_err(|source| CliError::ReadCatalogue {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!(
        "loaded {} restaurants from {path} ({} rows rejected)",
        import.restaurants.len(),
        import.errors.len()
    );
    Ok(import)
}

pub(crate) fn run_import(args: ImportArgs, writer: &mut dyn Write) -> Result<Outcome, CliError> {
    let path = args.into_path()?;
    require_existing(&path, ARG_CATALOGUE)?;
    let import = load_catalogue(&path)?;
    write_json(writer, &import.report())?;
    if import.success() {
        Ok(Outcome::Completed)
    } else {
        Ok(Outcome::RowsRejected)
    }
}

pub(crate) fn run_export(args: ExportArgs, writer: &mut dyn Write) -> Result<Outcome, CliError> {
    let config = args.into_config()?;
    require_existing(&config.catalogue, ARG_CATALOGUE)?;
    let import = load_catalogue(&config.catalogue)?;
    let exported = write_catalogue(&config.output, &import)?;
    write_json(
        writer,
        &ExportSummary {
            output: &config.output,
            exported,
            skipped: import.errors.len(),
        },
    )?;
    Ok(Outcome::Completed)
}

fn write_catalogue(path: &Utf8Path, import: &CsvImport) -> Result<usize, CliError> {
    let file = platepick_fs::create_output(path).map_err(|source| CliError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    block_on(async move {
        let mut output = tokio::fs::File::from_std(file);
        export_csv(&import.restaurants, &mut output).await
    })?
    .map_err(|source| CliError::WriteCatalogue {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn export_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ExportConfig, CliError> {
    let merged = ExportArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ExportConfig::try_from(merged)
}
