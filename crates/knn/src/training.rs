//! Training data: loaded samples, their partition, and trial history.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::config::PartitionConfig;
use crate::error::KnnError;
use crate::partition::ShufflingPartition;
use crate::result::TrialRecord;
use crate::sample::{KnownSample, Sample, parse_known_row};

/// Lifecycle of a [`TrainingData`] instance.
///
/// `Empty → Loaded → Tested`; there is no way back to `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataState {
    Empty,
    Loaded,
    Tested,
}

/// A named set of samples split into training and testing subsets.
///
/// Owns its samples exclusively. [`Hyperparameter`](crate::Hyperparameter)
/// trials observe it through a weak handle obtained from
/// [`into_shared`](Self::into_shared).
#[derive(Debug)]
pub struct TrainingData {
    name: String,
    config: PartitionConfig,
    state: DataState,
    uploaded: Option<DateTime<Utc>>,
    tested: Option<DateTime<Utc>>,
    training: Vec<Sample>,
    testing: Vec<Sample>,
    tuning: Vec<TrialRecord>,
}

impl TrainingData {
    /// Creates empty training data with the default 80/20 partition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: PartitionConfig::default(),
            state: DataState::Empty,
            uploaded: None,
            tested: None,
            training: Vec::new(),
            testing: Vec::new(),
            tuning: Vec::new(),
        }
    }

    /// Creates empty training data with a custom partition.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::InvalidTrainingSubset`] if the configuration is invalid.
    pub fn with_config(name: impl Into<String>, config: PartitionConfig) -> Result<Self, KnnError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(name)
        })
    }

    /// Parses raw rows and partitions them.
    ///
    /// Every row must hold four numeric fields and a species label. Nothing
    /// is stored unless every row parses.
    ///
    /// # Errors
    ///
    /// - [`KnnError::MalformedRow`] for the first row that fails to parse
    /// - [`KnnError::AlreadyLoaded`] if this instance is not empty
    pub fn load<I, R, S>(&mut self, rows: I) -> Result<(), KnnError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        self.ensure_empty()?;
        let samples = rows
            .into_iter()
            .map(|row| parse_known_row(row.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        self.load_samples(samples)
    }

    /// Partitions already-parsed samples and stamps the upload time.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::AlreadyLoaded`] if this instance is not empty.
    #[tracing::instrument(skip(self, samples), fields(name = %self.name))]
    pub fn load_samples(
        &mut self,
        samples: impl IntoIterator<Item = KnownSample>,
    ) -> Result<(), KnnError> {
        self.ensure_empty()?;
        let partition = ShufflingPartition::new(samples.into_iter().collect(), self.config.clone())?;
        let (training, testing) = partition.into_parts();

        self.training = training.into_iter().map(Sample::training).collect();
        self.testing = testing.into_iter().map(Sample::testing).collect();
        self.uploaded = Some(Utc::now());
        self.state = DataState::Loaded;

        info!(
            n_training = self.training.len(),
            n_testing = self.testing.len(),
            "training data loaded"
        );
        Ok(())
    }

    /// Wraps this instance for observation by [`Hyperparameter`](crate::Hyperparameter) trials.
    pub fn into_shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }

    pub fn state(&self) -> DataState {
        self.state
    }

    /// When [`load`](Self::load) completed.
    pub fn uploaded(&self) -> Option<DateTime<Utc>> {
        self.uploaded
    }

    /// When the most recent trial test finished.
    pub fn tested(&self) -> Option<DateTime<Utc>> {
        self.tested
    }

    pub fn training(&self) -> &[Sample] {
        &self.training
    }

    pub fn testing(&self) -> &[Sample] {
        &self.testing
    }

    /// Records of every completed trial test, oldest first.
    pub fn tuning(&self) -> &[TrialRecord] {
        &self.tuning
    }

    /// Training samples alongside mutable testing samples, for a test run.
    pub(crate) fn split_mut(&mut self) -> (&[Sample], &mut [Sample]) {
        (&self.training, &mut self.testing)
    }

    pub(crate) fn record_trial(&mut self, record: TrialRecord) {
        self.tested = Some(record.tested_at);
        self.state = DataState::Tested;
        self.tuning.push(record);
    }

    fn ensure_empty(&self) -> Result<(), KnnError> {
        if self.state != DataState::Empty {
            return Err(KnnError::AlreadyLoaded {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}
