//! JSON report of a tuning session.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use iris_knn::{TrainingData, TrialRecord};

use crate::error::IoError;

/// Summary of a [`TrainingData`] and every trial tested against it.
#[derive(Debug, Clone, Serialize)]
pub struct TuningReport {
    pub name: String,
    pub uploaded: Option<DateTime<Utc>>,
    pub tested: Option<DateTime<Utc>>,
    pub training_subset: f64,
    pub seed: u64,
    pub n_training: usize,
    pub n_testing: usize,
    /// Trials in the order they were tested.
    pub trials: Vec<TrialRecord>,
}

impl TuningReport {
    /// Snapshots the current state of `data`.
    pub fn from_training_data(data: &TrainingData) -> Self {
        Self {
            name: data.name().to_string(),
            uploaded: data.uploaded(),
            tested: data.tested(),
            training_subset: data.config().training_subset(),
            seed: data.config().seed(),
            n_training: data.training().len(),
            n_testing: data.testing().len(),
            trials: data.tuning().to_vec(),
        }
    }

    /// Highest-quality trial; the earliest wins ties.
    pub fn best(&self) -> Option<&TrialRecord> {
        self.trials
            .iter()
            .reduce(|best, t| if t.quality > best.quality { t } else { best })
    }
}

/// Serialize a tuning report to a pretty-printed JSON string.
pub fn to_json(report: &TuningReport) -> Result<String, IoError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes a tuning report as JSON to `path`.
///
/// # Errors
///
/// Returns [`IoError::Serialization`] or [`IoError::Write`].
pub fn write_report(path: &Path, report: &TuningReport) -> Result<(), IoError> {
    let json = to_json(report)?;
    std::fs::write(path, json).map_err(|e| IoError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(path = %path.display(), n_trials = report.trials.len(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_knn::{Hyperparameter, Metric, PartitionConfig};

    fn tested_data() -> TrainingData {
        let mut data =
            TrainingData::with_config("report", PartitionConfig::new(0.5).with_seed(2)).unwrap();
        data.load([
            ["5.1", "3.5", "1.4", "0.2", "Iris-setosa"],
            ["4.9", "3.0", "1.4", "0.2", "Iris-setosa"],
            ["7.0", "3.2", "4.7", "1.4", "Iris-versicolor"],
            ["6.4", "3.2", "4.5", "1.5", "Iris-versicolor"],
        ])
        .unwrap();
        let shared = data.into_shared();
        for k in [1, 2] {
            Hyperparameter::new(k, Metric::Euclidean, &shared)
                .unwrap()
                .test()
                .unwrap();
        }
        std::sync::Arc::try_unwrap(shared)
            .unwrap()
            .into_inner()
            .unwrap()
    }

    #[test]
    fn test_snapshot() {
        let report = TuningReport::from_training_data(&tested_data());
        assert_eq!(report.name, "report");
        assert_eq!(report.n_training, 2);
        assert_eq!(report.n_testing, 2);
        assert_eq!(report.seed, 2);
        assert_eq!(report.trials.len(), 2);
        assert!(report.uploaded.is_some());
        assert!(report.tested.is_some());
    }

    #[test]
    fn test_to_json_fields() {
        let report = TuningReport::from_training_data(&tested_data());
        let json = to_json(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["name"], "report");
        assert_eq!(parsed["trials"][0]["k"], 1);
        assert_eq!(parsed["trials"][0]["metric"], "euclidean");
        assert_eq!(parsed["trials"][1]["k"], 2);
        assert_eq!(parsed["trials"][0]["total"], 2);
    }

    #[test]
    fn test_best_prefers_earliest_on_ties() {
        let mut report = TuningReport::from_training_data(&tested_data());
        report.trials[0].quality = 0.5;
        report.trials[1].quality = 0.5;
        assert_eq!(report.best().map(|t| t.k), Some(1));

        report.trials[1].quality = 1.0;
        assert_eq!(report.best().map(|t| t.k), Some(2));
    }

    #[test]
    fn test_best_empty() {
        let report = TuningReport::from_training_data(&TrainingData::new("empty"));
        assert!(report.best().is_none());
    }
}
