//! Sample records and the raw-row parsing contract.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::KnnError;

/// Column names of the four measurement fields, in file order.
pub const FEATURE_NAMES: [&str; 4] = ["sepal_length", "sepal_width", "petal_length", "petal_width"];

/// The four iris measurements of one flower.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Features {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

impl Features {
    /// Creates a feature vector from the four measurements.
    pub fn new(sepal_length: f64, sepal_width: f64, petal_length: f64, petal_width: f64) -> Self {
        Self {
            sepal_length,
            sepal_width,
            petal_length,
            petal_width,
        }
    }

    /// Returns the measurements in column order.
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ]
    }
}

impl From<[f64; 4]> for Features {
    fn from(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

/// What a [`Sample`] is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    /// Unknown species, awaiting a prediction.
    Classification,
    /// Known species, classified once per test run.
    Testing,
    /// Known species, used as a neighbor candidate and never classified.
    Training,
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Purpose::Classification => "classification",
            Purpose::Testing => "testing",
            Purpose::Training => "training",
        };
        f.write_str(s)
    }
}

/// Features with a ground-truth species label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnownSample {
    pub features: Features,
    pub species: String,
}

impl KnownSample {
    pub fn new(features: Features, species: impl Into<String>) -> Self {
        Self {
            features,
            species: species.into(),
        }
    }
}

/// A sample tagged with its purpose and a predicted-label slot.
///
/// Training samples never carry a prediction: reading or writing
/// [`classification`](Self::classification) on one is a
/// [`KnnError::PurposeMismatch`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    features: Features,
    species: Option<String>,
    purpose: Purpose,
    classification: Option<String>,
}

impl Sample {
    /// Creates a sample of unknown species, awaiting classification.
    pub fn unknown(features: Features) -> Self {
        Self {
            features,
            species: None,
            purpose: Purpose::Classification,
            classification: None,
        }
    }

    /// Creates a training sample from a known sample.
    pub fn training(known: KnownSample) -> Self {
        Self {
            features: known.features,
            species: Some(known.species),
            purpose: Purpose::Training,
            classification: None,
        }
    }

    /// Creates a testing sample from a known sample, not yet classified.
    pub fn testing(known: KnownSample) -> Self {
        Self {
            features: known.features,
            species: Some(known.species),
            purpose: Purpose::Testing,
            classification: None,
        }
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    /// Ground-truth species, `None` for samples awaiting classification.
    pub fn species(&self) -> Option<&str> {
        self.species.as_deref()
    }

    pub fn purpose(&self) -> Purpose {
        self.purpose
    }

    /// Returns the predicted species, `None` if not classified yet.
    ///
    /// # Errors
    ///
    /// [`KnnError::PurposeMismatch`] for training samples.
    pub fn classification(&self) -> Result<Option<&str>, KnnError> {
        self.require_classifiable()?;
        Ok(self.classification.as_deref())
    }

    /// Stores a predicted species, replacing any earlier prediction.
    ///
    /// # Errors
    ///
    /// [`KnnError::PurposeMismatch`] for training samples.
    pub fn set_classification(&mut self, label: impl Into<String>) -> Result<(), KnnError> {
        self.require_classifiable()?;
        self.classification = Some(label.into());
        Ok(())
    }

    /// Whether the prediction equals the ground truth.
    ///
    /// Only testing samples have both; an unclassified testing sample never matches.
    ///
    /// # Errors
    ///
    /// [`KnnError::PurposeMismatch`] for training and classification samples.
    pub fn matches(&self) -> Result<bool, KnnError> {
        if self.purpose != Purpose::Testing {
            return Err(KnnError::PurposeMismatch {
                purpose: self.purpose,
                attribute: "matches",
            });
        }
        Ok(self.classification.is_some() && self.classification == self.species)
    }

    fn require_classifiable(&self) -> Result<(), KnnError> {
        if self.purpose == Purpose::Training {
            return Err(KnnError::PurposeMismatch {
                purpose: self.purpose,
                attribute: "classification",
            });
        }
        Ok(())
    }
}

/// Parses one raw row into features and an optional species label.
///
/// The first four fields must be finite numbers. A fifth non-empty field is
/// taken as the species; any further fields are ignored.
///
/// # Errors
///
/// [`KnnError::MalformedRow`] naming the whole row when a field is missing,
/// non-numeric, or non-finite. The row is reported as the fields joined with
/// `,`; callers holding the source text may substitute it.
pub fn parse_row<S: AsRef<str>>(fields: &[S]) -> Result<(Features, Option<String>), KnnError> {
    let malformed = |reason: String| KnnError::MalformedRow {
        row: fields
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(","),
        reason,
    };

    if fields.len() < FEATURE_NAMES.len() {
        return Err(malformed(format!(
            "expected at least {} fields, got {}",
            FEATURE_NAMES.len(),
            fields.len()
        )));
    }

    let mut values = [0.0; 4];
    for (i, (value, name)) in values.iter_mut().zip(FEATURE_NAMES).enumerate() {
        let raw = fields[i].as_ref().trim();
        let parsed: f64 = raw
            .parse()
            .map_err(|_| malformed(format!("{name} is not a number: {raw:?}")))?;
        if !parsed.is_finite() {
            return Err(malformed(format!("{name} is not finite: {raw:?}")));
        }
        *value = parsed;
    }

    let species = fields
        .get(FEATURE_NAMES.len())
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok((Features::from(values), species))
}

/// Parses one raw row that must carry a species label.
///
/// # Errors
///
/// [`KnnError::MalformedRow`] as for [`parse_row`], or when the label is missing.
pub fn parse_known_row<S: AsRef<str>>(fields: &[S]) -> Result<KnownSample, KnnError> {
    match parse_row(fields)? {
        (features, Some(species)) => Ok(KnownSample { features, species }),
        (_, None) => Err(KnnError::MalformedRow {
            row: fields
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(","),
            reason: "missing species".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> KnownSample {
        KnownSample::new(Features::new(5.1, 3.5, 1.4, 0.2), "Iris-setosa")
    }

    #[test]
    fn test_parse_row_with_species() {
        let (features, species) =
            parse_row(&["5.1", "3.5", "1.4", "0.2", "Iris-setosa"]).unwrap();
        assert_eq!(features, Features::new(5.1, 3.5, 1.4, 0.2));
        assert_eq!(species.as_deref(), Some("Iris-setosa"));
    }

    #[test]
    fn test_parse_row_trims_whitespace() {
        let (features, species) = parse_row(&[" 6.3", "2.9 ", "5.6", "1.8", " Iris-virginica "]).unwrap();
        assert_eq!(features.sepal_length, 6.3);
        assert_eq!(features.sepal_width, 2.9);
        assert_eq!(species.as_deref(), Some("Iris-virginica"));
    }

    #[test]
    fn test_parse_row_without_species() {
        let (_, species) = parse_row(&["5.1", "3.5", "1.4", "0.2"]).unwrap();
        assert!(species.is_none());
        let (_, species) = parse_row(&["5.1", "3.5", "1.4", "0.2", ""]).unwrap();
        assert!(species.is_none());
    }

    #[test]
    fn test_parse_row_non_numeric() {
        let err = parse_row(&["5.1", "abc", "1.4", "0.2", "Iris-setosa"]).unwrap_err();
        match err {
            KnnError::MalformedRow { row, reason } => {
                assert_eq!(row, "5.1,abc,1.4,0.2,Iris-setosa");
                assert!(reason.contains("sepal_width"), "reason: {reason}");
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_row_missing_field() {
        let err = parse_row(&["5.1", "3.5", "1.4"]).unwrap_err();
        assert!(
            matches!(&err, KnnError::MalformedRow { row, .. } if row == "5.1,3.5,1.4"),
            "got {err:?}"
        );
    }

    #[test]
    fn test_parse_row_non_finite() {
        let err = parse_row(&["5.1", "3.5", "NaN", "0.2"]).unwrap_err();
        assert!(matches!(err, KnnError::MalformedRow { .. }));
        let err = parse_row(&["inf", "3.5", "1.4", "0.2"]).unwrap_err();
        assert!(matches!(err, KnnError::MalformedRow { .. }));
    }

    #[test]
    fn test_parse_known_row_requires_species() {
        let err = parse_known_row(&["5.1", "3.5", "1.4", "0.2"]).unwrap_err();
        assert!(
            matches!(&err, KnnError::MalformedRow { reason, .. } if reason == "missing species"),
            "got {err:?}"
        );
        let ok = parse_known_row(&["5.1", "3.5", "1.4", "0.2", "Iris-setosa"]).unwrap();
        assert_eq!(ok, known());
    }

    #[test]
    fn test_training_sample_rejects_classification() {
        let mut s = Sample::training(known());
        assert_eq!(s.purpose(), Purpose::Training);
        assert!(matches!(
            s.classification(),
            Err(KnnError::PurposeMismatch {
                purpose: Purpose::Training,
                attribute: "classification"
            })
        ));
        assert!(s.set_classification("Iris-setosa").is_err());
        assert!(s.matches().is_err());
    }

    #[test]
    fn test_testing_sample_classification() {
        let mut s = Sample::testing(known());
        assert_eq!(s.classification().unwrap(), None);
        assert!(!s.matches().unwrap());

        s.set_classification("Iris-versicolor").unwrap();
        assert_eq!(s.classification().unwrap(), Some("Iris-versicolor"));
        assert!(!s.matches().unwrap());

        // Overwrites the earlier prediction
        s.set_classification("Iris-setosa").unwrap();
        assert!(s.matches().unwrap());
    }

    #[test]
    fn test_unknown_sample() {
        let mut s = Sample::unknown(Features::new(5.0, 3.0, 1.5, 0.3));
        assert_eq!(s.purpose(), Purpose::Classification);
        assert!(s.species().is_none());
        s.set_classification("Iris-setosa").unwrap();
        assert_eq!(s.classification().unwrap(), Some("Iris-setosa"));
        assert!(s.matches().is_err());
    }

    #[test]
    fn test_purpose_display() {
        assert_eq!(Purpose::Classification.to_string(), "classification");
        assert_eq!(Purpose::Testing.to_string(), "testing");
        assert_eq!(Purpose::Training.to_string(), "training");
    }
}
