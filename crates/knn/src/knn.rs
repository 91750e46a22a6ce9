//! Nearest-neighbor classification core and scratch buffer management.

use crate::distance::Metric;
use crate::error::KnnError;
use crate::sample::{Features, Sample};
use crate::select::select_k_nearest;
use crate::vote::majority_vote;

/// Pre-allocated scratch buffers for classification.
///
/// Reuse across calls to [`nearest_label`] to avoid a heap allocation per
/// testing sample. Buffers grow as needed and never shrink.
#[derive(Debug, Clone, Default)]
pub(crate) struct KnnScratch {
    /// Distance from the query to every training sample.
    distances: Vec<f64>,
    /// (distance, index) pairs for sorting.
    pairs: Vec<(f64, usize)>,
    /// Indices of the k nearest training samples.
    nn_indices: Vec<usize>,
}

impl KnnScratch {
    /// Creates a scratch buffer with capacity for `max_training` samples.
    pub(crate) fn new(max_training: usize) -> Self {
        Self {
            distances: Vec::with_capacity(max_training),
            pairs: Vec::with_capacity(max_training),
            nn_indices: Vec::with_capacity(max_training),
        }
    }
}

/// Classifies `query` by majority vote among its `k` nearest training samples.
///
/// ```text
/// nearest_label()
///   ├─ Metric::distance()   (distance.rs) per training sample
///   ├─ select_k_nearest()   (select.rs)   ties → earliest sample
///   └─ majority_vote()      (vote.rs)     ties → smallest label
/// ```
///
/// # Errors
///
/// Returns [`KnnError::EmptyTrainingSet`] if `training` is empty.
pub(crate) fn nearest_label(
    training: &[Sample],
    query: &Features,
    k: usize,
    metric: Metric,
    scratch: &mut KnnScratch,
) -> Result<String, KnnError> {
    if training.is_empty() {
        return Err(KnnError::EmptyTrainingSet);
    }

    scratch.distances.clear();
    scratch
        .distances
        .extend(training.iter().map(|s| metric.distance(query, s.features())));

    select_k_nearest(
        &scratch.distances,
        k,
        &mut scratch.pairs,
        &mut scratch.nn_indices,
    );

    let labels = scratch
        .nn_indices
        .iter()
        .filter_map(|&i| training[i].species());
    majority_vote(labels)
        .map(str::to_string)
        .ok_or(KnnError::EmptyTrainingSet)
}
