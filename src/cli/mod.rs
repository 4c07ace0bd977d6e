use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use diaqc::digest::Protease;
use diaqc::qc::QcParams;

mod config;
mod info;
mod summarize;

use config::Config;

/// diaqc - Per-run QC summaries for DIA proteomics quantification tables
#[derive(Parser)]
#[command(name = "diaqc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Protease selection for missed-cleavage counting.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ProteaseArg {
    /// Cleaves after R and K
    #[default]
    Trypsin,
    /// Cleaves after K
    Lysc,
    /// Cleaves after R
    Argc,
    /// Cleaves after F, W and Y
    Chymotrypsin,
    /// Cleaves after E and D
    Gluc,
}

impl From<ProteaseArg> for Protease {
    fn from(arg: ProteaseArg) -> Self {
        match arg {
            ProteaseArg::Trypsin => Protease::Trypsin,
            ProteaseArg::Lysc => Protease::LysC,
            ProteaseArg::Argc => Protease::ArgC,
            ProteaseArg::Chymotrypsin => Protease::Chymotrypsin,
            ProteaseArg::Gluc => Protease::GluC,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute QC summaries for every experiment in a registry
    Summarize {
        /// Input quantification table (Parquet, DIA-NN report layout)
        #[arg(value_name = "TABLE")]
        table: PathBuf,

        /// Experiment registry (JSON array with name, tags, instrument, method)
        #[arg(value_name = "EXPERIMENTS")]
        experiments: PathBuf,

        /// Write the flattened per-run report as CSV
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Protease used for digestion (default: trypsin)
        #[arg(short, long, value_enum)]
        protease: Option<ProteaseArg>,

        /// Highest missed-cleavage bucket; larger counts collapse into it (default: 2)
        #[arg(long)]
        max_missed_cleavages: Option<usize>,

        /// Minimum observations per group for CV statistics (default: 3)
        #[arg(long)]
        min_values_for_cv: Option<usize>,

        /// CV pass threshold as a fraction (default: 0.2)
        #[arg(long)]
        cv_threshold: Option<f64>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Display information about a quantification table
    Info {
        /// Input quantification table (Parquet)
        #[arg(value_name = "TABLE")]
        table: PathBuf,
    },
}

impl Cli {
    /// Dispatch the parsed command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Summarize {
                table,
                experiments,
                output,
                protease,
                max_missed_cleavages,
                min_values_for_cv,
                cv_threshold,
                config,
            } => {
                let config = match config {
                    Some(path) => Config::from_file(&path)?,
                    None => Config::default(),
                };
                let params = resolve_params(
                    &config,
                    protease,
                    max_missed_cleavages,
                    min_values_for_cv,
                    cv_threshold,
                );
                summarize::run(table, experiments, output, params)
            }
            Commands::Info { table } => info::run(table),
        }
    }
}

/// Merge CLI flags over config file values over built-in defaults.
fn resolve_params(
    config: &Config,
    protease: Option<ProteaseArg>,
    max_missed_cleavages: Option<usize>,
    min_values_for_cv: Option<usize>,
    cv_threshold: Option<f64>,
) -> QcParams {
    let defaults = QcParams::default();

    let protease = match protease {
        Some(arg) => arg.into(),
        None => config
            .qc
            .protease
            .as_deref()
            .map(Protease::from_name)
            .unwrap_or(defaults.protease),
    };

    QcParams {
        protease,
        max_missed_cleavages: max_missed_cleavages
            .or(config.qc.max_missed_cleavages)
            .unwrap_or(defaults.max_missed_cleavages),
        min_values_for_cv: min_values_for_cv
            .or(config.qc.min_values_for_cv)
            .unwrap_or(defaults.min_values_for_cv),
        cv_threshold: cv_threshold
            .or(config.qc.cv_threshold)
            .unwrap_or(defaults.cv_threshold),
    }
}
