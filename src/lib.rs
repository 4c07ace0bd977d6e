//! # diaqc - Per-Run QC Summaries for DIA Proteomics
//!
//! `diaqc` computes quality-control summary statistics from precursor-level
//! quantification tables (DIA-NN report layout) stored as Apache Parquet.
//! For each experiment — a set of runs identified by run-name suffix tags —
//! it produces per-run distinct peptide/precursor/protein-group counts, a
//! missed-cleavage distribution with weighted average, summed raw intensity,
//! and experiment-wide CV-based reproducibility counts.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use diaqc::qc::{process_experiment, ExperimentDescriptor, QcParams};
//! use diaqc::table::TableCache;
//!
//! let mut cache = TableCache::new();
//! let table = cache.load("report.parquet")?;
//!
//! let experiment = ExperimentDescriptor {
//!     tags: vec!["A1".to_string(), "A2".to_string()],
//!     instrument: "timsTOF".to_string(),
//!     method: "dia-20min".to_string(),
//! };
//!
//! let summary = process_experiment(&table, &experiment, &QcParams::default());
//! for run in &summary.runs {
//!     println!("{}: {} peptides, avg MC {:.3}", run.run, run.peptides, run.avg_missed_cleavages);
//! }
//! # Ok::<(), diaqc::table::LoadError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`schema`]: required-column constants and schema validation
//! - [`table`]: in-memory quantification table, Parquet loader, path cache
//! - [`digest`]: protease definitions and missed-cleavage counting
//! - [`qc`]: the per-experiment aggregation pipeline
//!
//! ## Input Table
//!
//! | Column | Type | Description |
//! |--------|------|-------------|
//! | Run | Utf8 | Run (acquisition) identifier |
//! | Protein.Group | Utf8 | Protein group identifier |
//! | PG.MaxLFQ | Float | MaxLFQ protein-group quantity |
//! | Precursor.Id | Utf8 | Precursor identifier |
//! | Precursor.Normalised | Float | Normalized precursor quantity |
//! | Precursor.Quantity | Float | Raw precursor quantity |
//! | Stripped.Sequence | Utf8 | Peptide sequence, no modifications |
//! | Modified.Sequence | Utf8 | Peptide sequence with modifications |
//! | Genes | Utf8 | Gene identifiers |
//!
//! All nine columns are required; the loader projects to exactly this set
//! and fails fast when one is missing.

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod digest;
pub mod qc;
pub mod schema;
pub mod table;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::digest::{count_missed_cleavages, Protease};
    pub use crate::qc::{
        cv_pass_count, expand_tag_range, missed_cleavage_per_run, process_experiment,
        run_tag_mask, ExperimentDescriptor, ExperimentSummary, MissedCleavageProfile, QcParams,
        RunSummary, CV_PASS_THRESHOLD,
    };
    pub use crate::schema::{columns, validate_schema, SchemaValidationError};
    pub use crate::table::{LoadError, QuantTable, TableCache, TableSummary};
}
