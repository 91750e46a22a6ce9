//! Top-k nearest neighbor selection.

use std::cmp::Ordering;

/// Orders distances ascending with NaN after every number.
fn cmp_distance(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    }
}

/// Selects the `k` nearest candidates from their distances to a query.
///
/// Sorts (distance, index) pairs so equal distances keep insertion order:
/// the earliest candidate wins a tie. At most `distances.len()` indices are
/// returned, sorted by ascending distance.
///
/// Writes results into caller-provided buffers:
/// - `pairs`: scratch buffer for (distance, index) pairs
/// - `nn_indices`: indices of the nearest neighbors
pub(crate) fn select_k_nearest(
    distances: &[f64],
    k: usize,
    pairs: &mut Vec<(f64, usize)>,
    nn_indices: &mut Vec<usize>,
) {
    let k_eff = k.min(distances.len());

    pairs.clear();
    pairs.extend(distances.iter().copied().enumerate().map(|(i, d)| (d, i)));

    // Index as secondary key makes the unstable sort deterministic
    pairs.sort_unstable_by(|a, b| cmp_distance(a.0, b.0).then(a.1.cmp(&b.1)));
    pairs.truncate(k_eff);

    nn_indices.clear();
    nn_indices.extend(pairs.iter().map(|&(_, idx)| idx));
}
