use std::collections::{BTreeMap, HashSet};

use crate::digest::{count_missed_cleavages, Protease};
use crate::table::QuantTable;

/// Missed-cleavage distribution for one run.
///
/// `fractions[i]` is the share of the run's distinct stripped sequences
/// with exactly `i` missed cleavages, except the last bucket which absorbs
/// everything at or above the cap. Fractions sum to 1 for a run with at
/// least one sequence and are all 0 otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct MissedCleavageProfile {
    /// Run identifier
    pub run: String,
    /// Relative bucket proportions, `max_missed_cleavages + 1` entries
    pub fractions: Vec<f64>,
}

impl MissedCleavageProfile {
    /// Weighted average missed-cleavage count: Σ bucket_index × fraction
    pub fn weighted_average(&self) -> f64 {
        self.fractions
            .iter()
            .enumerate()
            .map(|(bucket, fraction)| bucket as f64 * fraction)
            .sum()
    }
}

/// Compute per-run missed-cleavage distributions over a filtered table.
///
/// Sequences are de-duplicated per run before classification, so the
/// distribution reflects distinct peptides rather than observation counts.
/// Counts above `max_missed_cleavages` land in the cap bucket. Output is
/// ordered by run identifier.
pub fn missed_cleavage_per_run(
    table: &QuantTable,
    protease: Protease,
    max_missed_cleavages: usize,
) -> Vec<MissedCleavageProfile> {
    let mut sequences_by_run: BTreeMap<&str, HashSet<&str>> = BTreeMap::new();
    for (run, sequence) in table.run.iter().zip(&table.stripped_sequence) {
        if let (Some(run), Some(sequence)) = (run.as_deref(), sequence.as_deref()) {
            sequences_by_run.entry(run).or_default().insert(sequence);
        }
    }

    sequences_by_run
        .into_iter()
        .map(|(run, sequences)| {
            let mut bucket_counts = vec![0usize; max_missed_cleavages + 1];
            for sequence in &sequences {
                let missed = count_missed_cleavages(sequence, protease);
                bucket_counts[missed.min(max_missed_cleavages)] += 1;
            }

            let total = sequences.len();
            let fractions = bucket_counts
                .into_iter()
                .map(|count| {
                    if total > 0 {
                        count as f64 / total as f64
                    } else {
                        0.0
                    }
                })
                .collect();

            MissedCleavageProfile {
                run: run.to_string(),
                fractions,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, &str)]) -> QuantTable {
        let mut t = QuantTable::default();
        for (run, seq) in rows {
            t.run.push(Some(run.to_string()));
            t.stripped_sequence.push(Some(seq.to_string()));
            t.protein_group.push(Some("P".to_string()));
            t.pg_maxlfq.push(Some(1.0));
            t.precursor_id.push(Some(format!("{seq}2")));
            t.precursor_normalised.push(Some(1.0));
            t.precursor_quantity.push(Some(1.0));
            t.modified_sequence.push(Some(seq.to_string()));
            t.genes.push(Some("G".to_string()));
        }
        t
    }

    #[test]
    fn test_fractions_sum_to_one_per_run() {
        let t = table(&[
            ("R1", "PEPTIDEK"), // 0 missed
            ("R1", "PEKPTIDEK"), // 1 missed
            ("R1", "AKRKAK"),   // capped
            ("R2", "PEPTIDEK"),
        ]);
        let profiles = missed_cleavage_per_run(&t, Protease::Trypsin, 2);
        assert_eq!(profiles.len(), 2);
        for profile in &profiles {
            let sum: f64 = profile.fractions.iter().sum();
            assert!((sum - 1.0).abs() < 1e-12, "run {}: sum {sum}", profile.run);
        }
    }

    #[test]
    fn test_duplicate_sequences_count_once() {
        let t = table(&[("R1", "PEPTIDEK"), ("R1", "PEPTIDEK"), ("R1", "PEKPTIDEK")]);
        let profiles = missed_cleavage_per_run(&t, Protease::Trypsin, 2);
        assert_eq!(profiles[0].fractions, vec![0.5, 0.5, 0.0]);
    }

    #[test]
    fn test_counts_above_cap_land_in_last_bucket() {
        // KRKRK has 4 missed cleavages under trypsin.
        let t = table(&[("R1", "KRKRK")]);
        let profiles = missed_cleavage_per_run(&t, Protease::Trypsin, 2);
        assert_eq!(profiles[0].fractions, vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_runs_are_ordered_by_identifier() {
        let t = table(&[("R2", "PEPTIDEK"), ("R1", "PEPTIDEK")]);
        let profiles = missed_cleavage_per_run(&t, Protease::Trypsin, 2);
        assert_eq!(profiles[0].run, "R1");
        assert_eq!(profiles[1].run, "R2");
    }

    #[test]
    fn test_weighted_average() {
        let profile = MissedCleavageProfile {
            run: "R1".to_string(),
            fractions: vec![0.5, 0.3, 0.2],
        };
        assert!((profile.weighted_average() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_empty_table_yields_no_profiles() {
        let t = QuantTable::default();
        assert!(missed_cleavage_per_run(&t, Protease::Trypsin, 2).is_empty());
    }
}
