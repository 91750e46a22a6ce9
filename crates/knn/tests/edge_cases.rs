//! Edge case integration tests.

use iris_knn::{
    DataState, Features, Hyperparameter, Metric, PartitionConfig, Sample, TrainingData, default_k,
};

/// Loading zero rows is allowed; every trial then fails on its empty subsets.
#[test]
fn load_no_rows() {
    let mut data = TrainingData::new("empty");
    data.load(Vec::<Vec<String>>::new()).unwrap();
    assert_eq!(data.state(), DataState::Loaded);
    assert!(data.training().is_empty());
    assert!(data.testing().is_empty());
}

/// All identical samples: distances all zero, the earliest training label wins.
#[test]
fn identical_features_different_labels() {
    let mut data = TrainingData::with_config("same", PartitionConfig::new(1.0)).unwrap();
    data.load([
        ["5.0", "3.0", "1.5", "0.2", "b"],
        ["5.0", "3.0", "1.5", "0.2", "a"],
        ["5.0", "3.0", "1.5", "0.2", "c"],
    ])
    .unwrap();
    let data = data.into_shared();
    let first = data.read().unwrap().training()[0]
        .species()
        .unwrap()
        .to_string();

    let trial = Hyperparameter::new(1, Metric::Euclidean, &data).unwrap();
    let label = trial.classify(&Features::new(5.0, 3.0, 1.5, 0.2)).unwrap();
    assert_eq!(label, first);

    // k = 3: one vote each, smallest label wins
    let trial = Hyperparameter::new(3, Metric::Euclidean, &data).unwrap();
    let label = trial.classify(&Features::new(5.0, 3.0, 1.5, 0.2)).unwrap();
    assert_eq!(label, "a");
}

/// Extra columns beyond the species are ignored.
#[test]
fn extra_columns_ignored() {
    let mut data = TrainingData::with_config("wide", PartitionConfig::new(1.0)).unwrap();
    data.load([vec!["5.0", "3.0", "1.5", "0.2", "a", "ignored", "also ignored"]])
        .unwrap();
    assert_eq!(data.training()[0].species(), Some("a"));
}

/// Unknown samples can be classified and keep their purpose.
#[test]
fn classify_unknown_sample() {
    let mut data = TrainingData::with_config("unknown", PartitionConfig::new(1.0)).unwrap();
    data.load([
        ["5.0", "3.5", "1.3", "0.3", "Iris-setosa"],
        ["6.7", "3.0", "5.2", "2.3", "Iris-virginica"],
    ])
    .unwrap();
    let data = data.into_shared();
    let trial = Hyperparameter::new(1, Metric::Chebyshev, &data).unwrap();

    let mut sample = Sample::unknown(Features::new(6.5, 3.0, 5.5, 2.0));
    trial.classify_sample(&mut sample).unwrap();
    assert_eq!(sample.classification().unwrap(), Some("Iris-virginica"));
    assert!(sample.species().is_none());
}

/// The heuristic never returns zero.
#[test]
fn default_k_is_positive() {
    for n in 0..200 {
        assert!(default_k(n) >= 1);
    }
}
