//! Error types for the iris-knn crate.

use crate::sample::Purpose;

/// Error type for all fallible operations in the iris-knn crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnnError {
    /// Returned when a raw row cannot be parsed into a sample.
    #[error("malformed row {row:?}: {reason}")]
    MalformedRow {
        /// The offending row, fields joined with commas.
        row: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Returned when k is zero.
    #[error("k must be >= 1, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
    },

    /// Returned when a distance metric name is not recognised.
    #[error("unknown distance metric: {name:?}")]
    UnknownMetric {
        /// The name that failed to parse.
        name: String,
    },

    /// Returned when the training subset ratio is non-finite or outside `[0, 1]`.
    #[error("training subset must be within [0, 1], got {ratio}")]
    InvalidTrainingSubset {
        /// The invalid ratio.
        ratio: f64,
    },

    /// Returned when a trial's training data has been dropped.
    #[error("training data no longer exists")]
    BrokenReference,

    /// Returned when classifying against zero training samples.
    #[error("no training samples to compare against")]
    EmptyTrainingSet,

    /// Returned when testing against zero testing samples.
    #[error("no testing samples")]
    NoTestingSamples,

    /// Returned when a sample attribute is read or written for the wrong purpose.
    #[error("{attribute} is not available for a {purpose} sample")]
    PurposeMismatch {
        /// Purpose of the sample that was accessed.
        purpose: Purpose,
        /// Attribute that was accessed.
        attribute: &'static str,
    },

    /// Returned when loading training data that was already loaded.
    #[error("training data {name:?} is already loaded")]
    AlreadyLoaded {
        /// Name of the training data.
        name: String,
    },

    /// Returned when the lock guarding shared training data is poisoned.
    #[error("training data lock poisoned")]
    LockPoisoned,
}
