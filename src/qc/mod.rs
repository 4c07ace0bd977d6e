//! # Per-Experiment QC Pipeline
//!
//! The aggregation core: filter a quantification table to one experiment's
//! runs, compute missed-cleavage distributions and CV-based reproducibility
//! counts, and merge everything into one [`ExperimentSummary`].
//!
//! All functions here are pure transforms over an immutable
//! [`QuantTable`](crate::table::QuantTable); calling them repeatedly with
//! the same inputs yields identical output.

mod cv;
mod experiment;
mod missed_cleavage;
mod processor;


pub use cv::{cv_pass_count, CV_PASS_THRESHOLD};
pub use experiment::{expand_tag_range, run_tag_mask, ExperimentDescriptor};
pub use missed_cleavage::{missed_cleavage_per_run, MissedCleavageProfile};
pub use processor::{process_experiment, ExperimentSummary, QcParams, RunSummary};
