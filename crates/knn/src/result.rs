//! Outcome of a hyperparameter test run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::distance::Metric;

/// Record of one completed [`Hyperparameter::test`](crate::Hyperparameter::test) run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// Number of neighbors consulted.
    pub k: usize,
    /// Distance metric used.
    pub metric: Metric,
    /// Testing samples whose prediction matched the species.
    pub correct: usize,
    /// Testing samples classified.
    pub total: usize,
    /// `correct / total`.
    pub quality: f64,
    /// When the run finished.
    pub tested_at: DateTime<Utc>,
}

impl TrialRecord {
    pub(crate) fn new(k: usize, metric: Metric, correct: usize, total: usize) -> Self {
        Self {
            k,
            metric,
            correct,
            total,
            quality: correct as f64 / total as f64,
            tested_at: Utc::now(),
        }
    }
}
