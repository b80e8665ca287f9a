//! CLI entry point for the benchmark report tool.
//!
//! Loads one or more results CSV files, sums the `result` column per run
//! identifier, and prints one line per dataset and run to stdout.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use bench_report::loader::{load_dataset, parse_spec};
use bench_report::output::{print_json, print_report, write_json};
use bench_report::report::{DatasetReport, ReportSummary};

#[derive(Parser)]
#[command(name = "bench_report")]
#[command(about = "Sums benchmark results per run identifier", long_about = None)]
struct Cli {
    /// Datasets to report on, each PATH or NAME=PATH; lines carry the
    /// dataset name when more than one is given. With no arguments, reads
    /// results_static.csv from the working directory.
    #[arg(value_name = "DATASET")]
    datasets: Vec<String>,

    /// Print a JSON summary instead of plain report lines
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Also write the JSON summary to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file. Report lines
    // go to stdout and bypass the logger entirely.
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bench_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bench_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let specs = if cli.datasets.is_empty() {
        vec!["results_static.csv".to_string()]
    } else {
        cli.datasets.clone()
    };

    // Load every dataset before printing anything: a bad file must not
    // leave a partial report on stdout.
    let mut reports = Vec::new();
    for spec in &specs {
        let (name, path) = parse_spec(spec);
        let dataset = load_dataset(&name, &path)?;
        reports.push(DatasetReport::from_dataset(&dataset));
    }

    info!(datasets = reports.len(), "Datasets aggregated");

    if cli.json || cli.output.is_some() {
        let summary = ReportSummary::new(reports);
        if let Some(path) = &cli.output {
            write_json(path, &summary)?;
        }
        if cli.json {
            print_json(&summary)?;
        } else {
            print_report(&summary.reports);
        }
    } else {
        print_report(&reports);
    }

    Ok(())
}
