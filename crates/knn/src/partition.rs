//! Seeded shuffle-once partition of known samples.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::config::PartitionConfig;
use crate::error::KnnError;
use crate::sample::KnownSample;

/// Known samples split into a training prefix and a testing suffix.
///
/// The samples are shuffled with the configured seed the first time either
/// subset is requested; the split index is remembered and later calls never
/// reshuffle.
///
/// # Example
///
/// ```
/// use iris_knn::{Features, KnownSample, PartitionConfig, ShufflingPartition};
///
/// let samples: Vec<KnownSample> = (0..10)
///     .map(|i| KnownSample::new(Features::new(i as f64, 0.0, 0.0, 0.0), "a"))
///     .collect();
/// let mut partition = ShufflingPartition::new(samples, PartitionConfig::default()).unwrap();
///
/// assert_eq!(partition.training().len(), 8);
/// assert_eq!(partition.testing().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ShufflingPartition {
    samples: Vec<KnownSample>,
    config: PartitionConfig,
    split: Option<usize>,
}

impl ShufflingPartition {
    /// Creates an unshuffled partition.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::InvalidTrainingSubset`] if the configuration is invalid.
    pub fn new(samples: Vec<KnownSample>, config: PartitionConfig) -> Result<Self, KnnError> {
        config.validate()?;
        Ok(Self {
            samples,
            config,
            split: None,
        })
    }

    /// Shuffles and fixes the split index. No-op after the first call.
    pub fn shuffle(&mut self) {
        if self.split.is_some() {
            return;
        }
        let mut rng = StdRng::seed_from_u64(self.config.seed());
        self.samples.shuffle(&mut rng);
        let split = (self.samples.len() as f64 * self.config.training_subset()).floor() as usize;
        debug!(
            n_samples = self.samples.len(),
            split,
            seed = self.config.seed(),
            "partition shuffled"
        );
        self.split = Some(split.min(self.samples.len()));
    }

    /// Split index, `None` until the first shuffle.
    pub fn split(&self) -> Option<usize> {
        self.split
    }

    /// Training subset, shuffling first if needed.
    pub fn training(&mut self) -> &[KnownSample] {
        let split = self.split_index();
        &self.samples[..split]
    }

    /// Testing subset, shuffling first if needed.
    pub fn testing(&mut self) -> &[KnownSample] {
        let split = self.split_index();
        &self.samples[split..]
    }

    /// Number of samples in both subsets.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Consumes the partition into `(training, testing)`, shuffling first if needed.
    pub fn into_parts(mut self) -> (Vec<KnownSample>, Vec<KnownSample>) {
        let split = self.split_index();
        let testing = self.samples.split_off(split);
        (self.samples, testing)
    }

    fn split_index(&mut self) -> usize {
        self.shuffle();
        self.split.unwrap_or_default()
    }
}
