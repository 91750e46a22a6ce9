//! Header-less CSV sample reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};
use tracing::{debug, info};

use iris_knn::{Features, KnnError, KnownSample, parse_known_row, parse_row};

use crate::error::IoError;

/// Column names in file order, as documented for `bezdekIris.data`.
pub const HEADER: [&str; 5] = [
    "sepal_length",
    "sepal_width",
    "petal_length",
    "petal_width",
    "class",
];

/// Reads iris samples from header-less CSV.
///
/// Rows hold four measurements and an optional species column; extra columns
/// are ignored and blank lines are skipped. Every `into_*` iterator is lazy,
/// preserves row order, and consumes the reader: re-open the source to read
/// it again.
///
/// A malformed row yields an `Err` for that row only. Iteration continues,
/// so the caller chooses whether to stop (`collect::<Result<_, _>>()`) or skip.
///
/// # Example
///
/// ```
/// use iris_io::SampleReader;
///
/// let data = "5.1,3.5,1.4,0.2,Iris-setosa\n7.0,3.2,4.7,1.4,Iris-versicolor\n";
/// let samples: Vec<_> = SampleReader::from_reader(data.as_bytes())
///     .into_known_samples()
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(samples.len(), 2);
/// assert_eq!(samples[1].species, "Iris-versicolor");
/// ```
#[derive(Debug)]
pub struct SampleReader<R> {
    reader: csv::Reader<R>,
}

impl SampleReader<File> {
    /// Opens a CSV file.
    ///
    /// # Errors
    ///
    /// - [`IoError::FileNotFound`] if `path` does not exist
    /// - [`IoError::Csv`] if the file cannot be opened
    pub fn open(path: &Path) -> Result<Self, IoError> {
        if !path.exists() {
            return Err(IoError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        debug!(path = %path.display(), "opening sample file");
        let reader = builder().from_path(path)?;
        Ok(Self { reader })
    }
}

impl<R: Read> SampleReader<R> {
    /// Wraps any byte source.
    pub fn from_reader(source: R) -> Self {
        Self {
            reader: builder().from_reader(source),
        }
    }

    /// Yields the measurements and optional species of each row.
    pub fn into_records(self) -> impl Iterator<Item = Result<(Features, Option<String>), IoError>> {
        self.reader
            .into_records()
            .map(|record| parse_record(&record?, |fields| parse_row(fields)))
    }

    /// Yields the measurements of each row, ignoring any species column.
    pub fn into_samples(self) -> impl Iterator<Item = Result<Features, IoError>> {
        self.into_records()
            .map(|record| record.map(|(features, _)| features))
    }

    /// Yields each row as a known sample; a row without species is malformed.
    pub fn into_known_samples(self) -> impl Iterator<Item = Result<KnownSample, IoError>> {
        self.reader
            .into_records()
            .map(|record| parse_record(&record?, |fields| parse_known_row(fields)))
    }
}

/// Reads every row of `path` as a known sample, stopping at the first error.
///
/// # Errors
///
/// Returns [`IoError`] if the file is missing, unreadable, or holds a malformed row.
pub fn read_known_samples(path: &Path) -> Result<Vec<KnownSample>, IoError> {
    let samples = SampleReader::open(path)?
        .into_known_samples()
        .collect::<Result<Vec<_>, _>>()?;
    info!(path = %path.display(), n_samples = samples.len(), "samples read");
    Ok(samples)
}

fn builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true).trim(Trim::All);
    builder
}

fn parse_record<T>(
    record: &StringRecord,
    parse: impl FnOnce(&[&str]) -> Result<T, KnnError>,
) -> Result<T, IoError> {
    let fields: Vec<&str> = record.iter().collect();
    parse(&fields).map_err(|source| IoError::Sample {
        line: record.position().map_or(0, |p| p.line()),
        source: match source {
            KnnError::MalformedRow { reason, .. } => KnnError::MalformedRow {
                row: record_text(record),
                reason,
            },
            other => other,
        },
    })
}

/// Re-encodes a record as one CSV line, quoting fields that need it.
///
/// Fields are already trimmed, so whitespace around them is not preserved.
fn record_text(record: &StringRecord) -> String {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    let encoded = writer
        .write_record(record)
        .ok()
        .and_then(|()| writer.into_inner().ok());
    match encoded {
        Some(bytes) => String::from_utf8_lossy(&bytes).trim_end_matches('\n').to_string(),
        None => record.iter().collect::<Vec<_>>().join(","),
    }
}
