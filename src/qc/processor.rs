use std::collections::{BTreeMap, HashSet};
use std::fmt;

use log::{debug, info};
use serde::Serialize;

use crate::digest::Protease;
use crate::table::QuantTable;

use super::cv::{cv_pass_count, CV_PASS_THRESHOLD};
use super::experiment::{run_tag_mask, ExperimentDescriptor};
use super::missed_cleavage::missed_cleavage_per_run;

/// Per-invocation QC parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QcParams {
    /// Protease used for digestion
    pub protease: Protease,
    /// Cap for missed-cleavage buckets; counts at or above it collapse into
    /// the last bucket
    pub max_missed_cleavages: usize,
    /// Minimum observations a group needs before its CV is trusted
    pub min_values_for_cv: usize,
    /// CV pass threshold (fraction, not percent)
    pub cv_threshold: f64,
}

impl Default for QcParams {
    fn default() -> Self {
        QcParams {
            protease: Protease::Trypsin,
            max_missed_cleavages: 2,
            min_values_for_cv: 3,
            cv_threshold: CV_PASS_THRESHOLD,
        }
    }
}

/// QC aggregate for a single run within one experiment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Run identifier
    pub run: String,
    /// Distinct peptides, by modified-sequence identity
    pub peptides: usize,
    /// Distinct precursors
    pub precursors: usize,
    /// Distinct protein groups
    pub protein_groups: usize,
    /// Summed raw precursor intensity
    pub total_intensity: f64,
    /// Missed-cleavage bucket fractions, `max_missed_cleavages + 1` entries
    pub mc_fractions: Vec<f64>,
    /// Weighted average missed cleavages
    pub avg_missed_cleavages: f64,
}

/// QC summary for one experiment.
///
/// Experiment-wide scalars live here exactly once; flattening them onto
/// every run row is a reporting concern (see the CSV writer in the CLI).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentSummary {
    /// Instrument label from the descriptor
    pub instrument: String,
    /// Method label from the descriptor
    pub method: String,
    /// CV threshold the pass counts were computed against
    pub cv_threshold: f64,
    /// Protein groups with CV below the threshold (replicate-gated)
    pub protein_groups_passing_cv: usize,
    /// Precursors with CV below the threshold (replicate-gated)
    pub precursors_passing_cv: usize,
    /// Distinct stripped sequences across all matched rows
    pub total_peptides: usize,
    /// Distinct protein groups across all matched rows
    pub total_protein_groups: usize,
    /// Distinct precursors across all matched rows
    pub total_precursors: usize,
    /// One aggregate per matched run, ordered by run identifier
    pub runs: Vec<RunSummary>,
}

#[derive(Default)]
struct RunAccumulator<'a> {
    peptides: HashSet<&'a str>,
    precursors: HashSet<&'a str>,
    protein_groups: HashSet<&'a str>,
    total_intensity: f64,
}

fn distinct(column: &[Option<String>]) -> usize {
    column
        .iter()
        .filter_map(|v| v.as_deref())
        .collect::<HashSet<_>>()
        .len()
}

/// Compute the QC summary for one experiment.
///
/// Rows are selected by suffix-matching run identifiers against the
/// descriptor's tags; everything downstream operates on that filtered view.
/// An experiment whose tags match no rows yields a summary with empty
/// `runs`, which is a valid "no runs found" outcome rather than an error.
pub fn process_experiment(
    table: &QuantTable,
    experiment: &ExperimentDescriptor,
    params: &QcParams,
) -> ExperimentSummary {
    let mask = run_tag_mask(&table.run, &experiment.tags);
    let filtered = table.filter(&mask);
    debug!(
        "experiment tags {:?} matched {} of {} rows",
        experiment.tags,
        filtered.len(),
        table.len()
    );

    let protein_groups_passing_cv = cv_pass_count(
        &filtered.protein_group,
        &filtered.pg_maxlfq,
        params.min_values_for_cv,
        params.cv_threshold,
    );
    let precursors_passing_cv = cv_pass_count(
        &filtered.precursor_id,
        &filtered.precursor_normalised,
        params.min_values_for_cv,
        params.cv_threshold,
    );

    let profiles =
        missed_cleavage_per_run(&filtered, params.protease, params.max_missed_cleavages);
    let profiles_by_run: BTreeMap<&str, _> = profiles
        .iter()
        .map(|profile| (profile.run.as_str(), profile))
        .collect();

    let mut accumulators: BTreeMap<&str, RunAccumulator> = BTreeMap::new();
    for i in 0..filtered.len() {
        let Some(run) = filtered.run[i].as_deref() else {
            continue;
        };
        let acc = accumulators.entry(run).or_default();
        if let Some(peptide) = filtered.modified_sequence[i].as_deref() {
            acc.peptides.insert(peptide);
        }
        if let Some(precursor) = filtered.precursor_id[i].as_deref() {
            acc.precursors.insert(precursor);
        }
        if let Some(group) = filtered.protein_group[i].as_deref() {
            acc.protein_groups.insert(group);
        }
        if let Some(intensity) = filtered.precursor_quantity[i] {
            acc.total_intensity += intensity;
        }
    }

    let runs: Vec<RunSummary> = accumulators
        .into_iter()
        .map(|(run, acc)| {
            // Left join: a run with no classifiable sequences still gets a
            // row, with all-zero bucket fractions.
            let (mc_fractions, avg_missed_cleavages) = match profiles_by_run.get(run) {
                Some(profile) => (profile.fractions.clone(), profile.weighted_average()),
                None => (vec![0.0; params.max_missed_cleavages + 1], 0.0),
            };

            RunSummary {
                run: run.to_string(),
                peptides: acc.peptides.len(),
                precursors: acc.precursors.len(),
                protein_groups: acc.protein_groups.len(),
                total_intensity: acc.total_intensity,
                mc_fractions,
                avg_missed_cleavages,
            }
        })
        .collect();

    info!(
        "experiment on {} ({}): {} runs, {} protein groups passing CV",
        experiment.instrument,
        experiment.method,
        runs.len(),
        protein_groups_passing_cv
    );

    ExperimentSummary {
        instrument: experiment.instrument.clone(),
        method: experiment.method.clone(),
        cv_threshold: params.cv_threshold,
        protein_groups_passing_cv,
        precursors_passing_cv,
        total_peptides: distinct(&filtered.stripped_sequence),
        total_protein_groups: distinct(&filtered.protein_group),
        total_precursors: distinct(&filtered.precursor_id),
        runs,
    }
}

impl fmt::Display for ExperimentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Experiment QC Summary")?;
        writeln!(f, "=====================")?;
        writeln!(f, "Instrument: {}", self.instrument)?;
        writeln!(f, "Method: {}", self.method)?;
        writeln!(
            f,
            "Protein groups < {:.0}% CV: {}",
            self.cv_threshold * 100.0,
            self.protein_groups_passing_cv
        )?;
        writeln!(
            f,
            "Precursors < {:.0}% CV: {}",
            self.cv_threshold * 100.0,
            self.precursors_passing_cv
        )?;
        writeln!(f, "Total peptides: {}", self.total_peptides)?;
        writeln!(f, "Total protein groups: {}", self.total_protein_groups)?;
        writeln!(f, "Total precursors: {}", self.total_precursors)?;
        writeln!(f, "Runs: {}", self.runs.len())?;
        for run in &self.runs {
            writeln!(
                f,
                "  {}: {} peptides, {} precursors, {} protein groups, avg MC {:.3}, intensity {:.3e}",
                run.run,
                run.peptides,
                run.precursors,
                run.protein_groups,
                run.avg_missed_cleavages,
                run.total_intensity
            )?;
        }
        Ok(())
    }
}
