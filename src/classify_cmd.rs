//! Classify command: predict the species of unknown samples.

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, info_span};

use iris_io::SampleReader;
use iris_knn::{Hyperparameter, Metric, Sample, default_k};

use crate::cli::ClassifyArgs;
use crate::convert;
use crate::session::Session;

/// Classify every `--sample` and every row of `--unknown`.
pub fn run(args: ClassifyArgs) -> Result<()> {
    let _cmd = info_span!("classify").entered();
    if args.samples.is_empty() && args.unknown.is_none() {
        bail!("nothing to classify: provide --sample or --unknown");
    }

    let metric: Metric = args.metric.parse().context("invalid --metric")?;
    let mut samples = args
        .samples
        .iter()
        .map(|s| convert::parse_features(s).map(Sample::unknown))
        .collect::<Result<Vec<_>>>()?;
    if let Some(path) = &args.unknown {
        let reader = SampleReader::open(path)
            .with_context(|| format!("failed to open samples: {}", path.display()))?;
        for features in reader.into_samples() {
            let features =
                features.with_context(|| format!("failed to read samples: {}", path.display()))?;
            samples.push(Sample::unknown(features));
        }
    }

    let session = Session::from_args(&args.data)?;
    let data = session.load_training_data()?;
    let k = match args.k {
        Some(k) => k,
        None => default_k(
            data.read()
                .map_err(|_| anyhow!("training data lock poisoned"))?
                .training()
                .len(),
        ),
    };
    debug!(k, %metric, n_samples = samples.len(), "classifying");

    let trial = Hyperparameter::new(k, metric, &data)?;
    for sample in &mut samples {
        trial.classify_sample(sample)?;
        let f = sample.features();
        let species = sample.classification()?.unwrap_or_default();
        println!(
            "{},{},{},{} -> {species}",
            f.sepal_length, f.sepal_width, f.petal_length, f.petal_width
        );
    }
    Ok(())
}
