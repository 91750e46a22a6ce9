//! Tune command: test every (k, metric) trial against the testing subset.

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use iris_io::{TuningReport, write_report};
use iris_knn::Hyperparameter;

use crate::cli::TuneArgs;
use crate::convert;
use crate::session::Session;

/// Run every configured trial and report the best.
pub fn run(args: TuneArgs) -> Result<()> {
    let _cmd = info_span!("tune").entered();
    let session = Session::from_args(&args.data)?;
    let metrics = convert::parse_metrics(&session.config.tuning)?;
    let data = session.load_training_data()?;

    let n_training = data
        .read()
        .map_err(|_| anyhow!("training data lock poisoned"))?
        .training()
        .len();
    let ks = convert::resolve_k(&session.config.tuning, n_training);

    for &metric in &metrics {
        for &k in &ks {
            let mut trial = Hyperparameter::new(k, metric, &data)
                .with_context(|| format!("invalid trial k={k} metric={metric}"))?;
            let quality = trial
                .test()
                .with_context(|| format!("trial k={k} metric={metric} failed"))?;
            info!(k, %metric, quality, "trial complete");
        }
    }

    let report = TuningReport::from_training_data(
        &*data
            .read()
            .map_err(|_| anyhow!("training data lock poisoned"))?,
    );

    println!(
        "{}: {} training / {} testing samples, seed {}",
        report.name, report.n_training, report.n_testing, report.seed
    );
    for t in &report.trials {
        println!(
            "  k={:<3} {:<10} quality={:.4} ({}/{})",
            t.k, t.metric, t.quality, t.correct, t.total
        );
    }
    if let Some(best) = report.best() {
        println!(
            "best: k={} metric={} quality={:.4}",
            best.k, best.metric, best.quality
        );
    }

    if let Some(path) = &args.output {
        write_report(path, &report)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
    }

    Ok(())
}
