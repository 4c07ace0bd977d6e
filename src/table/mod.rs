//! # Quantification Table
//!
//! In-memory, column-major representation of a precursor quantification
//! table, plus the Parquet loader and its memoization cache.
//!
//! The table is immutable after load: every QC computation takes `&QuantTable`
//! and produces fresh output, so a single loaded table can be shared across
//! any number of experiment invocations (see [`TableCache`]).
//!
//! Parquet nulls are preserved as `None` rather than coerced to defaults;
//! distinct counts, grouping keys, and CV statistics skip them.

mod error;
mod loader;
mod summary;


pub use error::LoadError;
pub use loader::TableCache;
pub use summary::TableSummary;

/// One precursor observation per row, stored column-major.
///
/// All column vectors have identical length. String columns are
/// `Option<String>` and numeric columns `Option<f64>` so that source-file
/// nulls stay visible to the statistics downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuantTable {
    /// Run identifier
    pub run: Vec<Option<String>>,
    /// Protein group identifier
    pub protein_group: Vec<Option<String>>,
    /// MaxLFQ protein-group quantity
    pub pg_maxlfq: Vec<Option<f64>>,
    /// Precursor identifier
    pub precursor_id: Vec<Option<String>>,
    /// Normalized precursor quantity
    pub precursor_normalised: Vec<Option<f64>>,
    /// Raw precursor quantity
    pub precursor_quantity: Vec<Option<f64>>,
    /// Peptide sequence without modification annotations
    pub stripped_sequence: Vec<Option<String>>,
    /// Peptide sequence including modification annotations
    pub modified_sequence: Vec<Option<String>>,
    /// Gene identifiers
    pub genes: Vec<Option<String>>,
}

fn take_masked<T: Clone>(column: &[T], mask: &[bool]) -> Vec<T> {
    column
        .iter()
        .zip(mask)
        .filter(|(_, keep)| **keep)
        .map(|(value, _)| value.clone())
        .collect()
}

impl QuantTable {
    /// Number of rows (precursor observations) in the table
    pub fn len(&self) -> usize {
        self.run.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.run.is_empty()
    }

    /// Return a new table containing only the rows where `mask` is true.
    ///
    /// # Panics
    ///
    /// Panics if `mask.len() != self.len()`; a mask is only meaningful when
    /// produced against this table.
    pub fn filter(&self, mask: &[bool]) -> QuantTable {
        assert_eq!(
            mask.len(),
            self.len(),
            "row mask length must equal table length"
        );

        QuantTable {
            run: take_masked(&self.run, mask),
            protein_group: take_masked(&self.protein_group, mask),
            pg_maxlfq: take_masked(&self.pg_maxlfq, mask),
            precursor_id: take_masked(&self.precursor_id, mask),
            precursor_normalised: take_masked(&self.precursor_normalised, mask),
            precursor_quantity: take_masked(&self.precursor_quantity, mask),
            stripped_sequence: take_masked(&self.stripped_sequence, mask),
            modified_sequence: take_masked(&self.modified_sequence, mask),
            genes: take_masked(&self.genes, mask),
        }
    }
}
