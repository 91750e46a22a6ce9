use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level iris configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IrisConfig {
    /// Partition seed. Drawn from OS entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Sample source and partition settings.
    #[serde(default)]
    pub data: DataToml,

    /// Trials to run.
    #[serde(default)]
    pub tuning: TuningToml,
}

impl IrisConfig {
    /// Reads and parses a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    pub input: Option<PathBuf>,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_training_subset")]
    pub training_subset: f64,
}

impl Default for DataToml {
    fn default() -> Self {
        Self {
            input: None,
            name: default_name(),
            training_subset: default_training_subset(),
        }
    }
}

fn default_name() -> String {
    "iris".to_string()
}
fn default_training_subset() -> f64 {
    0.8
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuningToml {
    /// Neighbor counts to try. Empty means the sqrt heuristic only.
    #[serde(default = "default_k")]
    pub k: Vec<usize>,
    #[serde(default = "default_metrics")]
    pub metrics: Vec<String>,
}

impl Default for TuningToml {
    fn default() -> Self {
        Self {
            k: default_k(),
            metrics: default_metrics(),
        }
    }
}

fn default_k() -> Vec<usize> {
    vec![1, 3, 5, 7]
}
fn default_metrics() -> Vec<String> {
    ["euclidean", "manhattan", "chebyshev", "sorensen"]
        .map(String::from)
        .to_vec()
}
