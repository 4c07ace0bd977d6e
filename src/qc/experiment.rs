use serde::{Deserialize, Serialize};

/// Description of one experiment within a quantification table.
///
/// `tags` are literal run-identifier suffixes: a row belongs to the
/// experiment when its run identifier ends with any of them. Instrument and
/// method are free-form labels carried through to the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentDescriptor {
    /// Run-identifier suffixes selecting this experiment's runs
    pub tags: Vec<String>,
    /// Instrument label
    pub instrument: String,
    /// Acquisition method label
    pub method: String,
}

/// Build a row mask selecting runs that end with at least one tag.
///
/// Matching is exact trailing-substring comparison, case-sensitive, with no
/// wildcard or regex semantics: tag `"A1"` matches `"Sample_A1"` but never
/// `"Sample_A10"`, because `"A10"` does not end with `"A1"`. Rows with a
/// null run identifier never match.
pub fn run_tag_mask(runs: &[Option<String>], tags: &[String]) -> Vec<bool> {
    runs.iter()
        .map(|run| match run {
            Some(run) => tags.iter().any(|tag| run.ends_with(tag.as_str())),
            None => false,
        })
        .collect()
}

/// Expand prefix/number ranges into a flat tag list.
///
/// `expand_tag_range(&["A", "B"], 1, 2, "S_")` yields
/// `["S_A1", "S_A2", "S_B1", "S_B2"]`. Useful for plate-style run naming
/// where experiments span contiguous well ranges.
pub fn expand_tag_range(prefixes: &[&str], start: u32, end: u32, prefix_all: &str) -> Vec<String> {
    prefixes
        .iter()
        .flat_map(|prefix| (start..=end).map(move |i| format!("{prefix_all}{prefix}{i}")))
        .collect()
}
