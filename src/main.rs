//! # diaqc
//!
//! A command-line tool for computing per-run QC summaries from DIA
//! proteomics quantification tables.
//!
//! ## Usage
//!
//! ```bash
//! # Summarize every experiment in a registry, writing a flat CSV report
//! diaqc summarize report.parquet experiments.json --output qc_report.csv
//!
//! # Inspect a quantification table
//! diaqc info report.parquet
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    cli.run()
}
