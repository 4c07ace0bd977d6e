use std::collections::HashMap;

/// CV threshold under which a group counts as reproducible (20%)
pub const CV_PASS_THRESHOLD: f64 = 0.2;

/// Per-group quantity statistics
#[derive(Debug, Clone, Copy, PartialEq)]
struct GroupStats {
    mean: f64,
    std: f64,
    count: usize,
}

fn group_stats(values: &[f64]) -> GroupStats {
    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    // Sample standard deviation (Bessel-corrected), matching the default
    // estimator of standard statistics packages.
    let std = if count > 1 {
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        var.sqrt()
    } else {
        f64::NAN
    };
    GroupStats { mean, std, count }
}

/// Count groups whose coefficient of variation is strictly below `threshold`.
///
/// Rows are grouped by `keys`; rows with a null key or null value are
/// skipped, so a group's count is its number of actual observations. Groups
/// with fewer than `min_values` observations are statistically unreliable
/// and are excluded entirely: they contribute neither to the pass count nor
/// to any denominator. A zero-mean group has an infinite or undefined CV
/// and never passes.
pub fn cv_pass_count(
    keys: &[Option<String>],
    values: &[Option<f64>],
    min_values: usize,
    threshold: f64,
) -> usize {
    assert_eq!(keys.len(), values.len(), "key and value columns must align");

    let mut groups: HashMap<&str, Vec<f64>> = HashMap::new();
    for (key, value) in keys.iter().zip(values) {
        if let (Some(key), Some(value)) = (key.as_deref(), value) {
            groups.entry(key).or_default().push(*value);
        }
    }

    groups
        .values()
        .filter(|observations| observations.len() >= min_values)
        .map(|observations| group_stats(observations))
        .filter(|stats| {
            let cv = stats.std / stats.mean;
            // NaN and infinite CVs fail this comparison, which is exactly
            // the intended handling of zero-mean and single-value groups.
            cv < threshold
        })
        .count()
}
