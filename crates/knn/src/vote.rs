//! Majority vote among neighbor labels.

use std::collections::BTreeMap;

/// Returns the most frequent label, `None` for no labels.
///
/// Frequency ties go to the lexicographically smallest label.
pub(crate) fn majority_vote<'a>(labels: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut counts: BTreeMap<&'a str, usize> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }

    // BTreeMap iterates in ascending key order; strict `>` keeps the smallest on ties
    let mut best: Option<(&'a str, usize)> = None;
    for (label, count) in counts {
        match best {
            Some((_, c)) if count <= c => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_majority() {
        let labels = ["b", "a", "b", "c", "b"];
        assert_eq!(majority_vote(labels), Some("b"));
    }

    #[test]
    fn test_tie_goes_to_smallest_label() {
        let labels = ["virginica", "setosa", "virginica", "setosa"];
        assert_eq!(majority_vote(labels), Some("setosa"));
    }

    #[test]
    fn test_single() {
        assert_eq!(majority_vote(["x"]), Some("x"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(majority_vote(std::iter::empty()), None);
    }
}
