use std::collections::HashSet;
use std::fmt;

use super::QuantTable;

/// Summary statistics about a loaded quantification table
#[derive(Debug, Clone)]
pub struct TableSummary {
    /// Total number of precursor observations (rows)
    pub total_rows: usize,
    /// Number of distinct runs
    pub num_runs: usize,
    /// Number of distinct protein groups
    pub num_protein_groups: usize,
    /// Number of distinct precursors
    pub num_precursors: usize,
    /// Number of distinct stripped peptide sequences
    pub num_peptides: usize,
}

fn distinct(column: &[Option<String>]) -> usize {
    column
        .iter()
        .filter_map(|v| v.as_deref())
        .collect::<HashSet<_>>()
        .len()
}

impl QuantTable {
    /// Get summary statistics about the table
    pub fn summary(&self) -> TableSummary {
        TableSummary {
            total_rows: self.len(),
            num_runs: distinct(&self.run),
            num_protein_groups: distinct(&self.protein_group),
            num_precursors: distinct(&self.precursor_id),
            num_peptides: distinct(&self.stripped_sequence),
        }
    }
}

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Quantification Table Summary")?;
        writeln!(f, "============================")?;
        writeln!(f, "Total rows: {}", self.total_rows)?;
        writeln!(f, "Runs: {}", self.num_runs)?;
        writeln!(f, "Protein groups: {}", self.num_protein_groups)?;
        writeln!(f, "Precursors: {}", self.num_precursors)?;
        writeln!(f, "Peptides (stripped): {}", self.num_peptides)?;
        Ok(())
    }
}
