//! Test helpers for writing catalogue files and driving CLI invocations.

use super::*;
use camino::Utf8PathBuf;
use tempfile::TempDir;

pub(super) const HEADER: &str =
    "name,description,heaviness,portionSize,fineDining,priceLevel,avgPrepTime,cuisines";

pub(super) const TRATTORIA: &str = "Trattoria,Fresh pasta,50,50,50,2,30,Italian";
pub(super) const STEAKHOUSE: &str = "Steakhouse,Dry-aged cuts,90,85,50,4,35,Steak";
pub(super) const GOLD_LEAF: &str = "Gold Leaf,Tasting menu,40,35,90,5,60,French";

/// A temporary directory holding catalogue inputs and export outputs.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write a catalogue with the shared header and `rows`.
    pub(super) fn write_catalogue(&self, name: &str, rows: &[&str]) -> Utf8PathBuf {
        let mut text = format!("{HEADER}\n");
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        let path = self.path(name);
        std::fs::write(&path, text).expect("write catalogue");
        path
    }
}

/// Parse `args` as a full command line and run it, capturing stdout.
pub(super) fn invoke<I, S>(args: I) -> (Result<Outcome, CliError>, String)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut invocation = vec!["platepick".to_owned()];
    invocation.extend(args.into_iter().map(Into::into));
    let mut output = Vec::new();
    let result = Cli::try_parse_from(invocation)
        .map_err(CliError::ArgumentParsing)
        .and_then(|cli| run_command(cli.command, &mut output));
    let text = String::from_utf8(output).expect("utf-8 output");
    (result, text)
}

/// Parse captured stdout as JSON.
pub(super) fn json(output: &str) -> serde_json::Value {
    serde_json::from_str(output).expect("stdout should hold JSON")
}
