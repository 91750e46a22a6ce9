//! Shared setup: resolve configuration and load training data.

use std::sync::{Arc, RwLock};

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use iris_io::read_known_samples;
use iris_knn::TrainingData;

use crate::cli::DataArgs;
use crate::config::IrisConfig;
use crate::convert;

/// Configuration with CLI overrides applied and the seed resolved.
pub struct Session {
    pub config: IrisConfig,
    pub seed: u64,
}

impl Session {
    /// Loads the TOML file (or defaults) and applies `--input` and `--seed`.
    pub fn from_args(args: &DataArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => IrisConfig::load(path)?,
            None => IrisConfig::default(),
        };
        if let Some(input) = &args.input {
            config.data.input = Some(input.clone());
        }
        let seed = match args.seed.or(config.seed) {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                info!(seed, "no seed configured, drew one from OS entropy");
                seed
            }
        };
        Ok(Self { config, seed })
    }

    /// Reads the sample CSV and partitions it.
    pub fn load_training_data(&self) -> Result<Arc<RwLock<TrainingData>>> {
        let _span = info_span!("load").entered();
        let input = self.config.data.input.as_ref().ok_or_else(|| {
            anyhow!("no input path: set [data].input in config or use --input")
        })?;
        let partition = convert::build_partition_config(&self.config.data, self.seed)?;

        info!(path = %input.display(), seed = self.seed, "reading samples");
        let samples = read_known_samples(input)
            .with_context(|| format!("failed to read samples: {}", input.display()))?;

        let mut data = TrainingData::with_config(&self.config.data.name, partition)?;
        data.load_samples(samples)
            .context("failed to partition samples")?;
        Ok(data.into_shared())
    }
}
