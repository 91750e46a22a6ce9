//! k-nearest-neighbor classification of iris samples.
//!
//! Known samples are loaded into a [`TrainingData`], which shuffles them once
//! under a seed and splits them into training and testing subsets.
//! [`Hyperparameter`] trials pair a neighbor count `k` with a [`Metric`],
//! classify every testing sample against the training subset, and score the
//! fraction classified correctly.
//!
//! | Metric | Formula |
//! |--------|---------|
//! | Manhattan | `Σ |aᵢ − bᵢ|` |
//! | Euclidean | `√Σ (aᵢ − bᵢ)²` |
//! | Chebyshev | `max |aᵢ − bᵢ|` |
//! | Sorensen | `Σ |aᵢ − bᵢ| / Σ (|aᵢ| + |bᵢ|)` |
//!
//! # Quick start
//!
//! ```
//! use iris_knn::{Hyperparameter, Metric, PartitionConfig, TrainingData};
//!
//! let rows = [
//!     ["5.1", "3.5", "1.4", "0.2", "Iris-setosa"],
//!     ["4.9", "3.0", "1.4", "0.2", "Iris-setosa"],
//!     ["4.7", "3.2", "1.3", "0.2", "Iris-setosa"],
//!     ["7.0", "3.2", "4.7", "1.4", "Iris-versicolor"],
//!     ["6.4", "3.2", "4.5", "1.5", "Iris-versicolor"],
//!     ["6.9", "3.1", "4.9", "1.5", "Iris-versicolor"],
//! ];
//! let config = PartitionConfig::default().with_training_subset(0.5).with_seed(42);
//! let mut data = TrainingData::with_config("iris", config).unwrap();
//! data.load(rows).unwrap();
//! let data = data.into_shared();
//!
//! let mut trial = Hyperparameter::new(1, Metric::Euclidean, &data).unwrap();
//! let quality = trial.test().unwrap();
//! assert!((0.0..=1.0).contains(&quality));
//! ```
//!
//! # Architecture
//!
//! ```text
//! TrainingData::load()
//!   ├─ parse_known_row()        (sample.rs)
//!   └─ ShufflingPartition       (partition.rs)
//! Hyperparameter::test()
//!   └─ nearest_label()          (knn.rs), per testing sample on rayon
//!        ├─ Metric::distance()  (distance.rs)
//!        ├─ select_k_nearest()  (select.rs)
//!        └─ majority_vote()     (vote.rs)
//! ```

pub mod config;
pub mod distance;
pub mod error;
pub mod hyperparameter;
pub mod partition;
pub mod result;
pub mod sample;
pub mod training;

pub(crate) mod knn;
pub(crate) mod select;
pub(crate) mod vote;

pub use config::PartitionConfig;
pub use distance::Metric;
pub use error::KnnError;
pub use hyperparameter::Hyperparameter;
pub use partition::ShufflingPartition;
pub use result::TrialRecord;
pub use sample::{FEATURE_NAMES, Features, KnownSample, Purpose, Sample, parse_known_row, parse_row};
pub use training::{DataState, TrainingData};

/// Heuristic neighbor count for `n_training` samples.
///
/// Returns `floor(sqrt(n_training)).max(1)`.
pub fn default_k(n_training: usize) -> usize {
    (n_training as f64).sqrt().floor().max(1.0) as usize
}
