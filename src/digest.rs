//! # Protease Digestion
//!
//! Missed-cleavage counting for stripped peptide sequences.
//!
//! A missed cleavage is an internal cleavage-site residue the protease
//! failed to cut. The final residue of a peptide is never counted: a site
//! at the C-terminus is the terminating cleavage that produced the peptide
//! in the first place.

use log::warn;

/// Proteases with known cleavage specificity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protease {
    /// Cleaves after arginine and lysine
    Trypsin,
    /// Cleaves after lysine
    LysC,
    /// Cleaves after arginine
    ArgC,
    /// Cleaves after phenylalanine, tryptophan and tyrosine
    Chymotrypsin,
    /// Cleaves after glutamate and aspartate
    GluC,
}

impl Protease {
    /// Residues after which this protease cleaves
    pub fn cleavage_sites(self) -> &'static [u8] {
        match self {
            Protease::Trypsin => b"RK",
            Protease::LysC => b"K",
            Protease::ArgC => b"R",
            Protease::Chymotrypsin => b"FWY",
            Protease::GluC => b"ED",
        }
    }

    /// Resolve a protease by name, case-insensitively.
    ///
    /// An unrecognized name falls back to trypsin rather than failing. This
    /// is deliberately permissive for historical reasons; the fallback is
    /// logged so misconfigured pipelines are visible.
    pub fn from_name(name: &str) -> Protease {
        match name.to_ascii_lowercase().as_str() {
            "trypsin" => Protease::Trypsin,
            "lysc" => Protease::LysC,
            "argc" => Protease::ArgC,
            "chymotrypsin" => Protease::Chymotrypsin,
            "gluc" => Protease::GluC,
            other => {
                warn!("unrecognized protease '{other}', falling back to trypsin");
                Protease::Trypsin
            }
        }
    }
}

impl Default for Protease {
    fn default() -> Self {
        Protease::Trypsin
    }
}

/// Count missed cleavage sites in a stripped peptide sequence.
///
/// Every residue except the last is checked against the protease's cleavage
/// sites. Empty sequences have no interior residues and count 0.
pub fn count_missed_cleavages(sequence: &str, protease: Protease) -> usize {
    let bytes = sequence.as_bytes();
    if bytes.len() < 2 {
        return 0;
    }

    let sites = protease.cleavage_sites();
    bytes[..bytes.len() - 1]
        .iter()
        .filter(|residue| sites.contains(residue))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_terminal_residue_is_excluded() {
        assert_eq!(count_missed_cleavages("KR", Protease::Trypsin), 1);
        assert_eq!(count_missed_cleavages("KRK", Protease::Trypsin), 2);
        assert_eq!(count_missed_cleavages("PEPTIDEK", Protease::Trypsin), 0);
    }

    #[test]
    fn test_empty_sequence_counts_zero() {
        assert_eq!(count_missed_cleavages("", Protease::Trypsin), 0);
        assert_eq!(count_missed_cleavages("", Protease::GluC), 0);
    }

    #[test]
    fn test_site_sets_per_protease() {
        assert_eq!(count_missed_cleavages("AKARAA", Protease::Trypsin), 2);
        assert_eq!(count_missed_cleavages("AKARAA", Protease::LysC), 1);
        assert_eq!(count_missed_cleavages("AKARAA", Protease::ArgC), 1);
        assert_eq!(count_missed_cleavages("AFAWYA", Protease::Chymotrypsin), 3);
        assert_eq!(count_missed_cleavages("AEADAA", Protease::GluC), 2);
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Protease::from_name("Trypsin"), Protease::Trypsin);
        assert_eq!(Protease::from_name("LYSC"), Protease::LysC);
        assert_eq!(Protease::from_name("gluc"), Protease::GluC);
    }

    #[test]
    fn test_unrecognized_name_falls_back_to_trypsin() {
        assert_eq!(Protease::from_name("pepsin"), Protease::Trypsin);
        assert_eq!(Protease::from_name(""), Protease::Trypsin);
    }

    proptest! {
        /// A single residue has no interior positions, so no protease can
        /// report a missed cleavage for it.
        #[test]
        fn prop_single_residue_is_zero(residue in "[A-Z]") {
            for protease in [
                Protease::Trypsin,
                Protease::LysC,
                Protease::ArgC,
                Protease::Chymotrypsin,
                Protease::GluC,
            ] {
                prop_assert_eq!(count_missed_cleavages(&residue, protease), 0);
            }
        }

        /// The count is bounded by the number of interior residues.
        #[test]
        fn prop_count_bounded_by_interior_length(seq in "[A-Z]{0,40}") {
            let count = count_missed_cleavages(&seq, Protease::Trypsin);
            prop_assert!(count <= seq.len().saturating_sub(1));
        }
    }
}
