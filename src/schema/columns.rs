/// Column names as constants for type safety.
///
/// These follow the DIA-NN report column naming convention.
/// Run identifier (one MS acquisition per value)
pub const RUN: &str = "Run";
/// Protein group identifier
pub const PROTEIN_GROUP: &str = "Protein.Group";
/// MaxLFQ protein-group quantity
pub const PG_MAXLFQ: &str = "PG.MaxLFQ";
/// Precursor identifier (sequence + charge + modification state)
pub const PRECURSOR_ID: &str = "Precursor.Id";
/// Normalized precursor quantity
pub const PRECURSOR_NORMALISED: &str = "Precursor.Normalised";
/// Raw (un-normalized) precursor quantity
pub const PRECURSOR_QUANTITY: &str = "Precursor.Quantity";
/// Peptide sequence without modification annotations
pub const STRIPPED_SEQUENCE: &str = "Stripped.Sequence";
/// Peptide sequence including modification annotations
pub const MODIFIED_SEQUENCE: &str = "Modified.Sequence";
/// Semicolon-separated gene identifiers
pub const GENES: &str = "Genes";

/// The columns a quantification table must provide to be loadable.
///
/// Presence is a hard precondition checked at load time; any other columns
/// in the source file are ignored by the projection.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    RUN,
    PROTEIN_GROUP,
    PG_MAXLFQ,
    PRECURSOR_ID,
    PRECURSOR_NORMALISED,
    PRECURSOR_QUANTITY,
    STRIPPED_SEQUENCE,
    MODIFIED_SEQUENCE,
    GENES,
];
