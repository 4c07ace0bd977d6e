use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

use diaqc::qc::{process_experiment, ExperimentDescriptor, ExperimentSummary, QcParams};
use diaqc::table::TableCache;

/// One entry in the experiment registry: a display name plus the
/// descriptor fields (`tags`, `instrument`, `method`) flattened alongside.
#[derive(Debug, Deserialize)]
pub struct NamedExperiment {
    /// Display name used in console and CSV output
    pub name: String,
    /// The experiment descriptor itself
    #[serde(flatten)]
    pub experiment: ExperimentDescriptor,
}

/// Read the JSON experiment registry.
pub fn read_registry(path: &Path) -> Result<Vec<NamedExperiment>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open experiment registry: {}", path.display()))?;
    serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse experiment registry: {}", path.display()))
}

/// Run the QC pipeline for every experiment in the registry
pub fn run(
    table_path: PathBuf,
    experiments_path: PathBuf,
    output: Option<PathBuf>,
    params: QcParams,
) -> Result<()> {
    let registry = read_registry(&experiments_path)?;
    if registry.is_empty() {
        anyhow::bail!(
            "Experiment registry is empty: {}",
            experiments_path.display()
        );
    }

    let mut cache = TableCache::new();
    let table = cache
        .load(&table_path)
        .with_context(|| format!("Failed to load table: {}", table_path.display()))?;
    info!(
        "processing {} experiments against {} rows",
        registry.len(),
        table.len()
    );

    let mut results: Vec<(String, ExperimentSummary)> = Vec::with_capacity(registry.len());
    for entry in &registry {
        let summary = process_experiment(&table, &entry.experiment, &params);
        println!("[{}]", entry.name);
        println!("{summary}");
        results.push((entry.name.clone(), summary));
    }

    if let Some(path) = output {
        write_report(&path, &results, params.max_missed_cleavages)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

/// Write the flattened per-run report.
///
/// This is the one place experiment-wide scalars are repeated onto every
/// run row: CSV is a flat table and downstream reporting expects one row
/// per run.
fn write_report(
    path: &Path,
    results: &[(String, ExperimentSummary)],
    max_missed_cleavages: usize,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create report: {}", path.display()))?;

    let mut header = vec![
        "experiment".to_string(),
        "run".to_string(),
        "peptides".to_string(),
        "precursors".to_string(),
        "protein_groups".to_string(),
        "total_intensity".to_string(),
    ];
    for bucket in 0..=max_missed_cleavages {
        header.push(format!("MC{bucket}"));
    }
    header.extend(
        [
            "avg_MC",
            "pg_cv_pass",
            "pr_cv_pass",
            "total_peptides",
            "total_protein_groups",
            "total_precursors",
            "instrument",
            "method",
        ]
        .map(String::from),
    );
    writer.write_record(&header)?;

    for (name, summary) in results {
        for run in &summary.runs {
            let mut record = vec![
                name.clone(),
                run.run.clone(),
                run.peptides.to_string(),
                run.precursors.to_string(),
                run.protein_groups.to_string(),
                run.total_intensity.to_string(),
            ];
            for fraction in &run.mc_fractions {
                record.push(fraction.to_string());
            }
            record.extend([
                run.avg_missed_cleavages.to_string(),
                summary.protein_groups_passing_cv.to_string(),
                summary.precursors_passing_cv.to_string(),
                summary.total_peptides.to_string(),
                summary.total_protein_groups.to_string(),
                summary.total_precursors.to_string(),
                summary.instrument.clone(),
                summary.method.clone(),
            ]);
            writer.write_record(&record)?;
        }
    }

    writer.flush()?;
    Ok(())
}
