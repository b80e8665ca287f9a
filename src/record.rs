//! Data model for benchmark result files.

use std::fmt;

use serde::Deserialize;

/// A run identifier: one experimental condition within a results file.
///
/// The set is fixed. Reports iterate [`RunId::ALL`] regardless of which
/// labels actually appear in the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunId {
    Baseline,
    Ssa,
    Roundtrip,
}

impl RunId {
    /// All run identifiers, in report order.
    pub const ALL: [RunId; 3] = [RunId::Baseline, RunId::Ssa, RunId::Roundtrip];

    /// The label this identifier carries in the `run` column.
    pub fn label(self) -> &'static str {
        match self {
            RunId::Baseline => "baseline",
            RunId::Ssa => "ssa",
            RunId::Roundtrip => "roundtrip",
        }
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single row deserialized from a results CSV file.
///
/// Only `run` and `result` are required; any other columns in the file are
/// ignored.
#[derive(Debug, Deserialize)]
pub struct RunRecord {
    pub run: String,
    pub result: f64,
}

/// A named set of rows loaded wholesale from one results file. Immutable
/// once loaded.
#[derive(Debug)]
pub struct Dataset {
    pub name: String,
    pub records: Vec<RunRecord>,
}
