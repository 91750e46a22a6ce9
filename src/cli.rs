use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// k-nearest-neighbor classifier tuning for the iris data set.
#[derive(Parser)]
#[command(
    name = "iris",
    version,
    about = "k-nearest-neighbor classifier tuning for the iris data set"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Test every configured (k, metric) trial and report its quality.
    Tune(TuneArgs),
    /// Classify unknown samples with a single trial.
    Classify(ClassifyArgs),
}

/// Options shared by every subcommand that loads training data.
#[derive(clap::Args)]
pub struct DataArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the sample CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override the partition seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `tune` subcommand.
#[derive(clap::Args)]
pub struct TuneArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Path for the JSON tuning report.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `classify` subcommand.
#[derive(clap::Args)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Number of neighbors; defaults to floor(sqrt(training samples)).
    #[arg(short, long)]
    pub k: Option<usize>,

    /// Distance metric: euclidean, manhattan, chebyshev or sorensen.
    #[arg(short, long, default_value = "euclidean")]
    pub metric: String,

    /// Sample to classify as four comma-separated measurements. Repeatable.
    #[arg(long = "sample", value_name = "SL,SW,PL,PW")]
    pub samples: Vec<String>,

    /// Header-less CSV of samples to classify; any species column is ignored.
    #[arg(short, long)]
    pub unknown: Option<PathBuf>,
}
