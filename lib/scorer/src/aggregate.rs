//! Per-neighbourhood aggregation
//!
//! Turns polarity samples into the persisted score table: mean polarity per
//! (neighbourhood, dimension), rescaled to 0-100, filtered by review count, and
//! with missing cells filled by the dimension median.

use crate::score::PolaritySample;
use crate::source::ReviewRecord;
use ahash::AHashMap;
use nbhdfit_core::{round1, Dimension, Error, NeighbourhoodScores, Result, ScoreTable, DIMENSION_COUNT};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// A neighbourhood row before imputation; `None` where no review matched
#[derive(Debug, Clone, PartialEq)]
pub struct PartialRow {
    pub name: String,
    pub scores: [Option<f64>; DIMENSION_COUNT],
}

/// Map a mean polarity in [-1, 1] to a 0-100 score with one decimal
#[inline]
pub fn rescale(polarity: f64) -> f64 {
    round1((polarity.clamp(-1.0, 1.0) + 1.0) / 2.0 * 100.0)
}

/// Mean polarity per (neighbourhood, dimension), pivoted to one row per
/// neighbourhood sorted by name
pub fn aggregate(samples: &[PolaritySample]) -> Vec<PartialRow> {
    let mut sums: BTreeMap<&str, [(f64, usize); DIMENSION_COUNT]> = BTreeMap::new();
    for sample in samples {
        let cell = &mut sums
            .entry(sample.neighbourhood.as_str())
            .or_insert([(0.0, 0); DIMENSION_COUNT])[sample.dimension.index()];
        cell.0 += sample.polarity;
        cell.1 += 1;
    }

    sums.into_iter()
        .map(|(name, cells)| PartialRow {
            name: name.to_string(),
            scores: cells.map(|(sum, n)| (n > 0).then(|| rescale(sum / n as f64))),
        })
        .collect()
}

/// Joined review count per neighbourhood, whether or not any keyword matched
pub fn review_counts(reviews: &[ReviewRecord]) -> AHashMap<String, usize> {
    let mut counts = AHashMap::new();
    for review in reviews {
        *counts.entry(review.neighbourhood.clone()).or_insert(0) += 1;
    }
    counts
}

/// Median of the values, averaging the middle pair for an even count
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted: Vec<OrderedFloat<f64>> = values.iter().copied().map(OrderedFloat).collect();
    sorted.sort();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1].0 + sorted[mid].0) / 2.0)
    } else {
        Some(sorted[mid].0)
    }
}

/// Drop neighbourhoods under `min_reviews`, then fill every missing cell with the
/// median of its dimension over the surviving rows.
///
/// An empty result, or a dimension with no value in any surviving row, is an error.
pub fn filter_and_impute(
    rows: Vec<PartialRow>,
    counts: &AHashMap<String, usize>,
    min_reviews: usize,
) -> Result<ScoreTable> {
    let before = rows.len();
    let kept: Vec<PartialRow> = rows
        .into_iter()
        .filter(|row| counts.get(&row.name).copied().unwrap_or(0) >= min_reviews)
        .collect();

    info!(
        "Kept {} of {} neighbourhoods with at least {} reviews",
        kept.len(),
        before,
        min_reviews
    );

    if kept.is_empty() {
        return Err(Error::EmptyTable(format!(
            "no neighbourhood has at least {} reviews",
            min_reviews
        )));
    }

    let mut medians = [0.0; DIMENSION_COUNT];
    for dim in Dimension::ALL {
        let present: Vec<f64> = kept.iter().filter_map(|r| r.scores[dim.index()]).collect();
        medians[dim.index()] =
            median(&present).ok_or_else(|| Error::NoSamples(dim.name().to_string()))?;
        debug!("Median for {}: {}", dim, medians[dim.index()]);
    }

    let mut imputed = 0usize;
    let rows = kept
        .into_iter()
        .map(|row| {
            let mut scores = [0.0; DIMENSION_COUNT];
            for dim in Dimension::ALL {
                scores[dim.index()] = match row.scores[dim.index()] {
                    Some(v) => v,
                    None => {
                        imputed += 1;
                        medians[dim.index()]
                    }
                };
            }
            NeighbourhoodScores::new(row.name, scores)
        })
        .collect();

    if imputed > 0 {
        warn!("Imputed {} missing cells with dimension medians", imputed);
    }

    ScoreTable::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(nbhd: &str, dim: Dimension, polarity: f64) -> PolaritySample {
        PolaritySample {
            neighbourhood: nbhd.to_string(),
            dimension: dim,
            polarity,
        }
    }

    fn full_row(name: &str, value: f64) -> PartialRow {
        PartialRow {
            name: name.to_string(),
            scores: [Some(value); DIMENSION_COUNT],
        }
    }

    fn counts(entries: &[(&str, usize)]) -> AHashMap<String, usize> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_rescale() {
        assert_eq!(rescale(-1.0), 0.0);
        assert_eq!(rescale(0.0), 50.0);
        assert_eq!(rescale(1.0), 100.0);
        assert_eq!(rescale(0.25), 62.5);
        assert_eq!(rescale(0.124), 56.2);
        assert_eq!(rescale(0.125), 56.2);
        assert_eq!(rescale(0.625), 81.2);
    }

    #[test]
    fn test_aggregate_means_and_pivots() {
        let samples = vec![
            sample("Sants", Dimension::Transport, 0.5),
            sample("Sants", Dimension::Transport, 0.1),
            sample("Gràcia", Dimension::Food, -0.2),
        ];
        let rows = aggregate(&samples);

        assert_eq!(rows.len(), 2);
        // sorted by name
        assert_eq!(rows[0].name, "Gràcia");
        assert_eq!(rows[0].scores[Dimension::Food.index()], Some(40.0));
        assert_eq!(rows[1].scores[Dimension::Transport.index()], Some(65.0));
        assert_eq!(rows[1].scores[Dimension::Food.index()], None);
    }

    #[test]
    fn test_unmatched_review_leaves_mean_unchanged() {
        let with_match = vec![sample("A", Dimension::Safety, 0.6)];
        let review = ReviewRecord::new("A", "we had a wonderful time");
        let extra = crate::score::score_review(&review, &crate::sentiment::LexiconPolarity::new());
        assert!(extra.is_empty());

        let mut combined = with_match.clone();
        combined.extend(extra);
        assert_eq!(aggregate(&with_match), aggregate(&combined));
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn test_filter_drops_low_review_neighbourhoods() {
        let rows = vec![full_row("A", 60.0), full_row("B", 70.0)];
        let table = filter_and_impute(rows, &counts(&[("A", 150), ("B", 99)]), 100).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].name, "A");
    }

    #[test]
    fn test_impute_uses_median_of_surviving_rows() {
        let mut gap = full_row("C", 10.0);
        gap.scores[Dimension::Family.index()] = None;
        let rows = vec![full_row("A", 60.0), full_row("B", 80.0), gap, full_row("D", 5.0)];

        // D is filtered out, so its value must not shift the median
        let table = filter_and_impute(
            rows,
            &counts(&[("A", 100), ("B", 100), ("C", 100), ("D", 10)]),
            100,
        )
        .unwrap();

        let c = table.get("C").unwrap();
        assert_eq!(c.score(Dimension::Family), 70.0);
        assert_eq!(c.score(Dimension::Food), 10.0);
    }

    #[test]
    fn test_empty_after_filter_is_fatal() {
        let rows = vec![full_row("A", 60.0)];
        let err = filter_and_impute(rows, &counts(&[("A", 5)]), 100).unwrap_err();
        assert!(matches!(err, Error::EmptyTable(_)));
    }

    #[test]
    fn test_dimension_without_any_sample_is_fatal() {
        let mut row = full_row("A", 60.0);
        row.scores[Dimension::Nature.index()] = None;
        let err = filter_and_impute(vec![row], &counts(&[("A", 500)]), 100).unwrap_err();
        assert!(matches!(err, Error::NoSamples(ref d) if d == "Nature & Parks"));
    }
}
