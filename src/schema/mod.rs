//! # Quantification Table Schema
//!
//! Column-name constants and schema validation for the precursor-level
//! quantification table (DIA-NN report layout).
//!
//! The table is a "long" format: one row per precursor observation per run,
//! with run/protein-group/precursor identity columns repeated across rows.
//! Column presence is validated once at load time so every downstream
//! aggregation can assume the full required set.

/// Quantification table column name constants.
pub mod columns;
mod validation;


pub use columns::*;
pub use validation::{validate_schema, SchemaValidationError};
