//! Error types for iris-io.

use std::path::PathBuf;

use iris_knn::KnnError;

/// Error type for all fallible operations in the iris-io crate.
///
/// Covers missing files, CSV framing failures, rows that fail the sample
/// parsing contract, and report serialization or write failures.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV reader.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// A row that was read but does not form a valid sample.
    #[error("line {line}: {source}")]
    Sample {
        /// 1-based line number of the row, when known.
        line: u64,
        /// The parsing failure.
        #[source]
        source: KnnError,
    },

    /// Returned when a report cannot be serialized.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the serialization failure.
        reason: String,
    },

    /// Returned when a report cannot be written to disk.
    #[error("failed to write {}: {reason}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Serialization {
            reason: e.to_string(),
        }
    }
}
