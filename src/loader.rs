//! CSV ingestion for benchmark result files.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::record::{Dataset, RunRecord};

/// Deserializes every row of a CSV stream into [`RunRecord`]s.
///
/// # Errors
///
/// Returns an error on malformed CSV, a missing `run` or `result` column,
/// or a non-numeric `result` value. The column check runs against the
/// header row, so a file with no data rows still fails.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RunRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    for required in ["run", "result"] {
        if !headers.iter().any(|h| h == required) {
            bail!("missing required column `{required}`");
        }
    }

    let mut records = Vec::new();
    for row in rdr.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Loads a results file from disk as a named [`Dataset`].
///
/// Any I/O or parse failure is fatal and carries the offending path.
pub fn load_dataset(name: &str, path: &Path) -> Result<Dataset> {
    let file = File::open(path)
        .with_context(|| format!("failed to open results file {}", path.display()))?;
    let records = read_records(file)
        .with_context(|| format!("failed to parse results file {}", path.display()))?;

    debug!(name, rows = records.len(), "Dataset loaded");

    Ok(Dataset {
        name: name.to_string(),
        records,
    })
}

/// Splits a dataset argument into a name and a path.
///
/// `NAME=PATH` uses the given name; a bare path takes its file stem as the
/// dataset name.
pub fn parse_spec(spec: &str) -> (String, PathBuf) {
    if let Some((name, path)) = spec.split_once('=') {
        return (name.to_string(), PathBuf::from(path));
    }

    let path = PathBuf::from(spec);
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(spec)
        .to_string();
    (name, path)
}
