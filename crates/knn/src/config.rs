//! Configuration for partitioning loaded samples.

use crate::error::KnnError;

/// Configuration for splitting known samples into training and testing subsets.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use iris_knn::PartitionConfig;
///
/// let config = PartitionConfig::default()
///     .with_training_subset(0.75)
///     .with_seed(42);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionConfig {
    /// Fraction of samples assigned to the training subset.
    training_subset: f64,
    /// Seed for the one-time shuffle.
    seed: u64,
}

impl PartitionConfig {
    /// Creates a new configuration with the given training fraction.
    ///
    /// Defaults: `seed = 0`.
    pub fn new(training_subset: f64) -> Self {
        Self {
            training_subset,
            seed: 0,
        }
    }

    /// Sets the training fraction.
    pub fn with_training_subset(mut self, training_subset: f64) -> Self {
        self.training_subset = training_subset;
        self
    }

    /// Sets the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the training fraction.
    pub fn training_subset(&self) -> f64 {
        self.training_subset
    }

    /// Returns the shuffle seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the training fraction is non-finite or outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), KnnError> {
        if !self.training_subset.is_finite() || !(0.0..=1.0).contains(&self.training_subset) {
            return Err(KnnError::InvalidTrainingSubset {
                ratio: self.training_subset,
            });
        }
        Ok(())
    }
}

impl Default for PartitionConfig {
    /// 80% training, seed 0.
    fn default() -> Self {
        Self::new(0.80)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = PartitionConfig::default();
        assert!((cfg.training_subset() - 0.80).abs() < f64::EPSILON);
        assert_eq!(cfg.seed(), 0);
    }

    #[test]
    fn test_builder_chaining() {
        let cfg = PartitionConfig::default()
            .with_training_subset(0.5)
            .with_seed(7);
        assert!((cfg.training_subset() - 0.5).abs() < f64::EPSILON);
        assert_eq!(cfg.seed(), 7);
    }

    #[test]
    fn test_validate_bounds_inclusive() {
        assert!(PartitionConfig::new(0.0).validate().is_ok());
        assert!(PartitionConfig::new(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_training_subset() {
        for ratio in [-0.1, 1.01, f64::NAN, f64::INFINITY] {
            let result = PartitionConfig::new(ratio).validate();
            assert!(
                matches!(result, Err(KnnError::InvalidTrainingSubset { .. })),
                "ratio {ratio} accepted"
            );
        }
    }
}
