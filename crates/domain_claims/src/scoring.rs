//! Fraud scoring heuristic
//!
//! Claims billed far above the average for their diagnosis group score
//! higher. The baseline is the mean billed amount of the diagnosis group
//! within the batch being scored - not a persistent historical average - so
//! re-ingesting a file rescores everything against the new batch.
//!
//! ```text
//! score = clamp(trunc(amount / group_mean * 50), 0, 100)
//! ```
//!
//! This is a deliberately simple single-pass heuristic, not a model.

use std::collections::HashMap;

/// Upper bound of the fraud score range
pub const MAX_SCORE: i64 = 100;

/// Scores strictly above this are "flagged" for the summary stats
pub const FLAG_THRESHOLD: i64 = 75;

/// Upper bound of the low score band (inclusive)
pub const LOW_BAND_MAX: i64 = 25;

/// Normalizes a raw billed-amount field to a non-negative number.
///
/// Missing, empty, or unparseable values become 0, as do negative values;
/// the pipeline prefers degraded data over aborting a batch.
pub fn normalize_amount(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|v| v.max(0.0))
        .unwrap_or(0.0)
}

/// Scores a batch of (diagnosis label, normalized amount) records.
///
/// Returns one score per input record, in input order. Grouping is scoped to
/// this batch only. A group whose mean is 0 (all members billed 0) yields
/// score 0 for every member instead of propagating a division by zero.
pub fn score_batch(records: &[(&str, f64)]) -> Vec<i64> {
    let mut sums: HashMap<&str, (f64, u64)> = HashMap::new();
    for (diagnosis, amount) in records.iter().copied() {
        let entry = sums.entry(diagnosis).or_insert((0.0, 0));
        entry.0 += amount;
        entry.1 += 1;
    }

    let means: HashMap<&str, f64> = sums
        .into_iter()
        .map(|(diagnosis, (sum, count))| (diagnosis, sum / count as f64))
        .collect();

    records
        .iter()
        .copied()
        .map(|(diagnosis, amount)| {
            let mean = means[diagnosis];
            if mean <= 0.0 {
                return 0;
            }
            // `as i64` truncates toward zero, matching the spec'd floor
            let raw = (amount / mean * 50.0).clamp(0.0, MAX_SCORE as f64);
            raw as i64
        })
        .collect()
}
