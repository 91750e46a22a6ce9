//! Integration test: CSV sample reading and file-not-found handling.

use std::io::Write;
use std::path::Path;

use iris_io::{IoError, SampleReader, read_known_samples};
use iris_knn::{Hyperparameter, Metric, PartitionConfig, TrainingData};

const IRIS_HEAD: &str = "\
5.1,3.5,1.4,0.2,Iris-setosa
4.9,3.0,1.4,0.2,Iris-setosa
4.7,3.2,1.3,0.2,Iris-setosa
4.6,3.1,1.5,0.2,Iris-setosa
5.0,3.6,1.4,0.2,Iris-setosa
7.0,3.2,4.7,1.4,Iris-versicolor
6.4,3.2,4.5,1.5,Iris-versicolor
6.9,3.1,4.9,1.5,Iris-versicolor
5.5,2.3,4.0,1.3,Iris-versicolor
6.5,2.8,4.6,1.5,Iris-versicolor
6.3,3.3,6.0,2.5,Iris-virginica
5.8,2.7,5.1,1.9,Iris-virginica
7.1,3.0,5.9,2.1,Iris-virginica
6.3,2.9,5.6,1.8,Iris-virginica
6.5,3.0,5.8,2.2,Iris-virginica

";

fn write_file(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("iris.data");
    let mut file = std::fs::File::create(&path).expect("create data file");
    file.write_all(contents.as_bytes()).expect("write data file");
    path
}

#[test]
fn open_file_not_found() {
    let path = Path::new("/tmp/iris_test_nonexistent_file.data");
    let err = SampleReader::open(path).unwrap_err();
    assert!(
        matches!(err, IoError::FileNotFound { .. }),
        "expected FileNotFound, got {err:?}",
    );
}

#[test]
fn read_known_samples_from_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_file(dir.path(), IRIS_HEAD);

    let samples = read_known_samples(&path).unwrap();
    assert_eq!(samples.len(), 15);
    assert_eq!(samples[0].species, "Iris-setosa");
    assert_eq!(samples[14].species, "Iris-virginica");
}

#[test]
fn reader_is_restartable_by_reopening() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_file(dir.path(), IRIS_HEAD);

    let first: Vec<_> = SampleReader::open(&path)
        .unwrap()
        .into_samples()
        .collect::<Result<_, _>>()
        .unwrap();
    let second: Vec<_> = SampleReader::open(&path)
        .unwrap()
        .into_samples()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn malformed_row_reports_line() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_file(dir.path(), "5.1,3.5,1.4,0.2,a\n5.1,3.5,1.4,0.2,a\n5.1,3.5,,0.2,a\n");

    let err = read_known_samples(&path).unwrap_err();
    assert!(
        matches!(err, IoError::Sample { line: 3, .. }),
        "expected Sample error on line 3, got {err:?}",
    );
}

#[test]
fn skipping_malformed_rows_is_the_callers_choice() {
    let data = "5.1,3.5,1.4,0.2,a\nbad row\n6.0,3.0,5.0,1.8,b\n";
    let good: Vec<_> = SampleReader::from_reader(data.as_bytes())
        .into_known_samples()
        .filter_map(Result::ok)
        .collect();
    assert_eq!(good.len(), 2);
}

#[test]
fn reader_feeds_training_data() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_file(dir.path(), IRIS_HEAD);

    let samples = read_known_samples(&path).unwrap();
    let config = PartitionConfig::default().with_seed(42);
    let mut data = TrainingData::with_config("iris", config).unwrap();
    data.load_samples(samples).unwrap();
    assert_eq!(data.training().len(), 12);
    assert_eq!(data.testing().len(), 3);

    let data = data.into_shared();
    let mut trial = Hyperparameter::new(3, Metric::Euclidean, &data).unwrap();
    let quality = trial.test().unwrap();
    assert!((0.0..=1.0).contains(&quality));
}
