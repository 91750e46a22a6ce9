//! Distance metrics between feature vectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KnnError;
use crate::sample::Features;

/// Distance metric used to rank training samples against a query.
///
/// | Metric | Formula |
/// |--------|---------|
/// | Manhattan | `Σ |aᵢ − bᵢ|` |
/// | Euclidean | `√Σ (aᵢ − bᵢ)²` via repeated `hypot` |
/// | Chebyshev | `max |aᵢ − bᵢ|` |
/// | Sorensen | `Σ |aᵢ − bᵢ| / Σ (|aᵢ| + |bᵢ|)` |
///
/// Every metric is symmetric, non-negative, and zero for identical vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Manhattan,
    #[default]
    Euclidean,
    Chebyshev,
    /// Sorensen (Bray-Curtis) dissimilarity, always in `[0, 1]`.
    Sorensen,
}

impl Metric {
    /// All metrics, in the order trials are usually run.
    pub const ALL: [Metric; 4] = [
        Metric::Euclidean,
        Metric::Manhattan,
        Metric::Chebyshev,
        Metric::Sorensen,
    ];

    /// Computes the distance between two feature vectors.
    pub fn distance(&self, a: &Features, b: &Features) -> f64 {
        let a = a.as_array();
        let b = b.as_array();
        match self {
            Metric::Manhattan => manhattan(&a, &b),
            Metric::Euclidean => euclidean(&a, &b),
            Metric::Chebyshev => chebyshev(&a, &b),
            Metric::Sorensen => sorensen(&a, &b),
        }
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Manhattan => "manhattan",
            Metric::Euclidean => "euclidean",
            Metric::Chebyshev => "chebyshev",
            Metric::Sorensen => "sorensen",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = KnnError;

    /// Accepts the full name or the two-letter abbreviation, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "manhattan" | "md" => Ok(Metric::Manhattan),
            "euclidean" | "ed" => Ok(Metric::Euclidean),
            "chebyshev" | "cd" => Ok(Metric::Chebyshev),
            "sorensen" | "sd" => Ok(Metric::Sorensen),
            _ => Err(KnnError::UnknownMetric {
                name: s.to_string(),
            }),
        }
    }
}

#[inline]
fn manhattan(a: &[f64; 4], b: &[f64; 4]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

#[inline]
fn euclidean(a: &[f64; 4], b: &[f64; 4]) -> f64 {
    a.iter().zip(b).fold(0.0_f64, |acc, (x, y)| acc.hypot(x - y))
}

#[inline]
fn chebyshev(a: &[f64; 4], b: &[f64; 4]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

#[inline]
fn sorensen(a: &[f64; 4], b: &[f64; 4]) -> f64 {
    let num = manhattan(a, b);
    let den: f64 = a.iter().zip(b).map(|(x, y)| x.abs() + y.abs()).sum();
    // 0/0 only when both vectors are all zeros
    if den == 0.0 { 0.0 } else { num / den }
}
