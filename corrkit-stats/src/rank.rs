//! Ordinal ranking of numeric data.
//!
//! Provides [`map_to_ranks`], which assigns each value a distinct 1-based
//! rank. Tied values are not averaged: the one appearing first in the input
//! gets the lower rank.

/// Map `data` to 1-based ordinal ranks.
///
/// Values are sorted ascending with a stable sort (NaNs ordered by
/// [`f64::total_cmp`]), so ties keep their original relative order. The
/// result is a permutation of `1..=n`.
///
/// Empty input produces empty output.
///
/// # Example
///
/// ```
/// use corrkit_stats::rank::map_to_ranks;
///
/// assert_eq!(map_to_ranks(&[40.0, 10.0, 30.0, 20.0]), vec![4, 1, 3, 2]);
/// ```
pub fn map_to_ranks(data: &[f64]) -> Vec<usize> {
    let mut indexed: Vec<(usize, f64)> = data.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut ranks = vec![0; data.len()];
    for (rank_minus_1, &(orig_idx, _)) in indexed.iter().enumerate() {
        ranks[orig_idx] = rank_minus_1 + 1;
    }
    ranks
}

/// [`map_to_ranks`] converted to `f64`, ready for the correlation engine.
pub(crate) fn ranks_as_f64(data: &[f64]) -> Vec<f64> {
    map_to_ranks(data).into_iter().map(|r| r as f64).collect()
}

// ── Tests ──────────────────────────────────────────────────────────────────
