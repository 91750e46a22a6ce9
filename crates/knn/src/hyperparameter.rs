//! Hyperparameter trials: one (k, metric) configuration scored against testing samples.

use std::sync::{Arc, RwLock, Weak};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::distance::Metric;
use crate::error::KnnError;
use crate::knn::{KnnScratch, nearest_label};
use crate::result::TrialRecord;
use crate::sample::{Features, Sample};
use crate::training::TrainingData;

/// A neighbor count and distance metric evaluated against a [`TrainingData`].
///
/// Holds only a weak handle on the training data: dropping every
/// `Arc<RwLock<TrainingData>>` turns further [`classify`](Self::classify) and
/// [`test`](Self::test) calls into [`KnnError::BrokenReference`].
///
/// # Example
///
/// ```
/// use iris_knn::{Features, Hyperparameter, Metric, TrainingData};
///
/// let mut data = TrainingData::new("tiny");
/// data.load([
///     ["5.0", "3.5", "1.3", "0.3", "A"],
///     ["6.0", "3.0", "5.0", "1.8", "B"],
/// ])
/// .unwrap();
/// let data = data.into_shared();
///
/// let trial = Hyperparameter::new(1, Metric::Euclidean, &data).unwrap();
/// let label = trial.classify(&Features::new(5.1, 3.4, 1.4, 0.2));
/// assert!(label.is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Hyperparameter {
    k: usize,
    metric: Metric,
    data: Weak<RwLock<TrainingData>>,
    quality: Option<f64>,
}

impl Hyperparameter {
    /// Creates a trial observing `data`.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::InvalidK`] if `k` is zero.
    pub fn new(k: usize, metric: Metric, data: &Arc<RwLock<TrainingData>>) -> Result<Self, KnnError> {
        if k < 1 {
            return Err(KnnError::InvalidK { k });
        }
        Ok(Self {
            k,
            metric,
            data: Arc::downgrade(data),
            quality: None,
        })
    }

    /// Creates a trial, selecting the metric by name (see [`Metric`]'s `FromStr`).
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::InvalidK`] or [`KnnError::UnknownMetric`].
    pub fn from_name(
        k: usize,
        metric: &str,
        data: &Arc<RwLock<TrainingData>>,
    ) -> Result<Self, KnnError> {
        Self::new(k, metric.parse()?, data)
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Fraction of testing samples classified correctly by the last [`test`](Self::test).
    pub fn quality(&self) -> Option<f64> {
        self.quality
    }

    /// Predicts the species of `features` from the current training subset.
    ///
    /// # Errors
    ///
    /// - [`KnnError::BrokenReference`] if the training data was dropped
    /// - [`KnnError::EmptyTrainingSet`] if there are no training samples
    /// - [`KnnError::LockPoisoned`] if a writer panicked
    pub fn classify(&self, features: &Features) -> Result<String, KnnError> {
        let data = self.upgrade()?;
        let guard = data.read().map_err(|_| KnnError::LockPoisoned)?;
        let training = guard.training();
        let mut scratch = KnnScratch::new(training.len());
        nearest_label(training, features, self.k, self.metric, &mut scratch)
    }

    /// Classifies `sample` and stores the prediction on it.
    ///
    /// # Errors
    ///
    /// As [`classify`](Self::classify), plus [`KnnError::PurposeMismatch`]
    /// for training samples.
    pub fn classify_sample(&self, sample: &mut Sample) -> Result<(), KnnError> {
        // Reject training samples before taking the lock
        sample.classification()?;
        let label = self.classify(sample.features())?;
        sample.set_classification(label)
    }

    /// Classifies every testing sample and scores the predictions.
    ///
    /// Holds the write lock for the whole run so the training subset cannot
    /// change underneath it. Each testing sample's prediction is overwritten,
    /// a [`TrialRecord`] is appended to the training data, and the quality
    /// (`correct / total`) is stored and returned.
    ///
    /// # Errors
    ///
    /// - [`KnnError::BrokenReference`] if the training data was dropped
    /// - [`KnnError::NoTestingSamples`] if the testing subset is empty
    /// - [`KnnError::EmptyTrainingSet`] if the training subset is empty
    /// - [`KnnError::LockPoisoned`] if another holder panicked
    #[tracing::instrument(skip(self), fields(k = self.k, metric = %self.metric))]
    pub fn test(&mut self) -> Result<f64, KnnError> {
        let data = self.upgrade()?;
        let mut guard = data.write().map_err(|_| KnnError::LockPoisoned)?;

        let (training, testing) = guard.split_mut();
        if testing.is_empty() {
            return Err(KnnError::NoTestingSamples);
        }
        if training.is_empty() {
            return Err(KnnError::EmptyTrainingSet);
        }

        let (k, metric) = (self.k, self.metric);
        let n_training = training.len();
        let outcomes = testing
            .par_iter_mut()
            .map_init(
                || KnnScratch::new(n_training),
                |scratch, sample| {
                    let label = nearest_label(training, sample.features(), k, metric, scratch)?;
                    sample.set_classification(label)?;
                    sample.matches()
                },
            )
            .collect::<Result<Vec<bool>, KnnError>>()?;

        let correct = outcomes.iter().filter(|&&hit| hit).count();
        let record = TrialRecord::new(k, metric, correct, outcomes.len());
        let quality = record.quality;
        debug!(correct, total = outcomes.len(), "testing samples classified");

        guard.record_trial(record);
        self.quality = Some(quality);
        info!(quality, "trial tested");
        Ok(quality)
    }

    fn upgrade(&self) -> Result<Arc<RwLock<TrainingData>>, KnnError> {
        self.data.upgrade().ok_or(KnnError::BrokenReference)
    }
}
