//! Aggregation of result rows into per-run totals.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::record::{Dataset, RunId, RunRecord};

/// Sums the `result` column over rows whose `run` equals the identifier.
///
/// Full scan per call; an empty subset sums to zero. Labels in the data
/// outside the fixed identifier set are never summed.
pub fn sum_for_run(records: &[RunRecord], run: RunId) -> f64 {
    records
        .iter()
        .filter(|r| r.run == run.label())
        .map(|r| r.result)
        .fold(0.0, |acc, x| acc + x)
}

/// The summed `result` for one run identifier.
#[derive(Debug, Serialize)]
pub struct RunTotal {
    pub run: &'static str,
    pub total: f64,
}

/// Per-run totals for one dataset, in fixed run order.
#[derive(Debug, Serialize)]
pub struct DatasetReport {
    pub dataset: String,
    pub totals: Vec<RunTotal>,
}

impl DatasetReport {
    /// One total per entry of [`RunId::ALL`], in that order, regardless of
    /// which labels appear in the data.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let totals = RunId::ALL
            .iter()
            .map(|&run| RunTotal {
                run: run.label(),
                total: sum_for_run(&dataset.records, run),
            })
            .collect();

        DatasetReport {
            dataset: dataset.name.clone(),
            totals,
        }
    }
}

/// Roll-up over all loaded datasets, serialized in the JSON output mode.
#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub generated_at: DateTime<Utc>,
    pub reports: Vec<DatasetReport>,
}

impl ReportSummary {
    pub fn new(reports: Vec<DatasetReport>) -> Self {
        ReportSummary {
            generated_at: Utc::now(),
            reports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(name: &str, rows: &[(&str, f64)]) -> Dataset {
        Dataset {
            name: name.to_string(),
            records: rows
                .iter()
                .map(|(run, result)| RunRecord {
                    run: run.to_string(),
                    result: *result,
                })
                .collect(),
        }
    }

    #[test]
    fn test_sum_groups_by_run() {
        let d = dataset("static", &[("baseline", 3.0), ("baseline", 4.0), ("ssa", 10.0)]);
        assert_eq!(sum_for_run(&d.records, RunId::Baseline), 7.0);
        assert_eq!(sum_for_run(&d.records, RunId::Ssa), 10.0);
    }

    #[test]
    fn test_absent_label_sums_to_zero() {
        let d = dataset("static", &[("baseline", 3.0)]);
        assert_eq!(sum_for_run(&d.records, RunId::Roundtrip), 0.0);
    }

    #[test]
    fn test_empty_dataset_all_zero() {
        let d = dataset("static", &[]);
        for run in RunId::ALL {
            assert_eq!(sum_for_run(&d.records, run), 0.0);
        }
    }

    #[test]
    fn test_unknown_labels_are_ignored() {
        let d = dataset("static", &[("baseline", 1.0), ("warmup", 99.0)]);
        let report = DatasetReport::from_dataset(&d);
        assert_eq!(report.totals.len(), 3);
        assert_eq!(report.totals[0].total, 1.0);
        assert_eq!(report.totals[1].total, 0.0);
        assert_eq!(report.totals[2].total, 0.0);
    }

    #[test]
    fn test_report_preserves_fixed_order() {
        // Data order must not influence report order
        let d = dataset("static", &[("roundtrip", 5.0), ("ssa", 2.0), ("baseline", 1.0)]);
        let report = DatasetReport::from_dataset(&d);
        let runs: Vec<_> = report.totals.iter().map(|t| t.run).collect();
        assert_eq!(runs, vec!["baseline", "ssa", "roundtrip"]);
    }

    #[test]
    fn test_fractional_results_sum_exactly() {
        let d = dataset("static", &[("ssa", 1.5), ("ssa", 2.25)]);
        assert_eq!(sum_for_run(&d.records, RunId::Ssa), 3.75);
    }
}
