//! Labelcheck - catalog dataset validator
//!
//! # Usage
//!
//! ```bash
//! # Validate the default dataset path
//! labelcheck
//!
//! # Validate another file with a custom whitelist
//! labelcheck data/catalog.csv --config labelcheck.toml
//!
//! # Only run the category checks on two columns
//! labelcheck data/catalog.csv --categories-only --column "Area of body" --column "Imaging type"
//!
//! # Verbose logging
//! RUST_LOG=labelcheck_core=debug labelcheck
//! ```
//!
//! Exit status: 0 when clean, 1 when any issue or finding was reported,
//! 2 when the dataset or configuration could not be loaded.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use labelcheck_core::report::Reporter;
use labelcheck_core::validation::validate_rows;
use labelcheck_core::{Config, Dataset, LabelcheckError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Default dataset location, relative to the catalog site root.
const DEFAULT_DATASET_PATH: &str = "public/data/ultrasound_dataset_complete.csv";

#[derive(Debug, Parser)]
#[command(
    name = "labelcheck",
    about = "Validate a catalog CSV and flag inconsistent category labels",
    long_about = "Check required columns, links, DOIs and Y/N flags row by row, then report \
                  case-only inconsistencies and near-duplicate spellings in delimited \
                  category columns."
)]
struct Cli {
    #[arg(value_name = "CSV_PATH", default_value = DEFAULT_DATASET_PATH)]
    path: PathBuf,
    #[arg(
        long,
        env = "LABELCHECK_CONFIG",
        value_name = "PATH",
        help = "TOML file with checker, whitelist and validation settings"
    )]
    config: Option<PathBuf>,
    #[arg(
        long,
        env = "LABELCHECK_THRESHOLD",
        value_name = "0-100",
        help = "Minimum similarity score for two labels to be reported as duplicates"
    )]
    threshold: Option<u32>,
    #[arg(
        long = "column",
        value_name = "NAME",
        help = "Category column to analyze, repeat as needed (overrides config)"
    )]
    columns: Vec<String>,
    #[arg(long = "categories-only", help = "Skip row validation and only run category checks")]
    categories_only: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!(error = %e, "Check run failed");
            println!("{}", failure_message(&e));
            ExitCode::from(2)
        }
    }
}

/// User-facing line for a run that could not complete. A missing file is
/// named by the path that was actually opened, dataset or config.
fn failure_message(err: &LabelcheckError) -> String {
    match err.path() {
        Some(path) if err.is_not_found() => format!("❌ File not found: {}", path.display()),
        _ => format!("❌ Error: {err}"),
    }
}

/// Initialize the tracing subscriber. Logs go to stderr so stdout carries
/// only diagnostics.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("labelcheck_core=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

fn load_config(cli: &Cli) -> labelcheck_core::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.with_overrides(cli.threshold, cli.columns.clone())
}

/// Run every check and report; returns whether the dataset passed.
fn run(cli: &Cli) -> labelcheck_core::Result<bool> {
    let config = load_config(cli)?;
    let checker = config.category_checker()?;

    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock());
    let io_err = |e: io::Error| LabelcheckError::io("<stdout>", e);

    reporter.banner(&cli.path).map_err(io_err)?;
    let dataset = Dataset::from_csv_path(&cli.path)?;

    if !cli.categories_only {
        for issue in validate_rows(&dataset, &config.validation) {
            reporter.row_issue(&issue).map_err(io_err)?;
        }
    }

    for report in checker.analyze_dataset(&dataset, &config.checker.columns) {
        reporter.column(&report).map_err(io_err)?;
    }

    info!(
        rows = dataset.len(),
        errors = reporter.error_count(),
        "Check run complete"
    );

    let passed = reporter.summary().map_err(io_err)?;
    reporter.into_inner().flush().map_err(io_err)?;
    Ok(passed)
}
