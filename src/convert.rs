//! Pure conversion functions: TOML config and CLI strings -> crate API types.

use anyhow::{Context, Result, bail};

use iris_knn::{Features, Metric, PartitionConfig, default_k, parse_row};

use crate::config::{DataToml, TuningToml};

/// Builds a [`PartitionConfig`] from the TOML data configuration and a resolved seed.
pub fn build_partition_config(data: &DataToml, seed: u64) -> Result<PartitionConfig> {
    let cfg = PartitionConfig::new(data.training_subset).with_seed(seed);
    cfg.validate().context("invalid [data] configuration")?;
    Ok(cfg)
}

/// Parses the configured metric names, rejecting unknown names and empty lists.
pub fn parse_metrics(tuning: &TuningToml) -> Result<Vec<Metric>> {
    if tuning.metrics.is_empty() {
        bail!("[tuning].metrics must name at least one distance metric");
    }
    tuning
        .metrics
        .iter()
        .map(|name| name.parse::<Metric>().context("invalid [tuning].metrics"))
        .collect()
}

/// Neighbor counts to try; an empty list falls back to the sqrt heuristic.
pub fn resolve_k(tuning: &TuningToml, n_training: usize) -> Vec<usize> {
    if tuning.k.is_empty() {
        vec![default_k(n_training)]
    } else {
        tuning.k.clone()
    }
}

/// Parses `"5.1,3.5,1.4,0.2"` into features.
pub fn parse_features(s: &str) -> Result<Features> {
    let fields: Vec<&str> = s.split(',').collect();
    let (features, _) = parse_row(&fields).with_context(|| format!("invalid sample {s:?}"))?;
    Ok(features)
}
