//! Report rendering and emission.
//!
//! Plain report lines go to stdout; the JSON summary can go to stdout or a
//! file. Diagnostics never share the stdout stream with report lines.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::report::{DatasetReport, ReportSummary};

/// Formats one line per run total, across all datasets in order.
///
/// A single dataset renders as `label: sum`; with more than one dataset each
/// line carries the dataset name as a prefix. Integer-valued sums render
/// without a decimal point.
pub fn render_lines(reports: &[DatasetReport]) -> Vec<String> {
    let prefixed = reports.len() > 1;
    let mut lines = Vec::new();

    for report in reports {
        for total in &report.totals {
            if prefixed {
                lines.push(format!("{} {}: {}", report.dataset, total.run, total.total));
            } else {
                lines.push(format!("{}: {}", total.run, total.total));
            }
        }
    }

    lines
}

/// Prints the rendered report lines to stdout.
pub fn print_report(reports: &[DatasetReport]) {
    for line in render_lines(reports) {
        println!("{line}");
    }
}

/// Prints the summary as pretty-printed JSON to stdout.
pub fn print_json(summary: &ReportSummary) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Writes the summary as pretty-printed JSON to a file.
pub fn write_json(path: &Path, summary: &ReportSummary) -> Result<()> {
    debug!(path = %path.display(), "Writing JSON summary");

    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json)
        .with_context(|| format!("failed to write summary to {}", path.display()))?;

    Ok(())
}
