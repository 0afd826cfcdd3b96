//! Cosine-similarity ranking
//!
//! Ranks every neighbourhood by how closely the shape of its score vector
//! follows the shape of the user's priorities. Cosine similarity ignores
//! magnitude, so priorities of all-5 and all-3 rank identically.

use crate::preferences::UserPreferences;
use nbhdfit_core::{round1, NeighbourhoodScores, ScoreTable};
use std::sync::Arc;

/// A neighbourhood with its fit to one preference vector
#[derive(Debug, Clone, PartialEq)]
pub struct RankedNeighbourhood {
    pub neighbourhood: NeighbourhoodScores,
    /// Cosine similarity in [0, 1] for non-negative inputs
    pub similarity: f64,
    /// `similarity * 100` rounded to one decimal
    pub fit_score: f64,
}

impl RankedNeighbourhood {
    pub fn name(&self) -> &str {
        &self.neighbourhood.name
    }
}

/// Cosine similarity between the normalised preference and score vectors
pub fn similarity(prefs: &UserPreferences, row: &NeighbourhoodScores) -> f64 {
    prefs.vector().normalized().dot(&row.scores.normalized())
}

#[inline]
pub fn fit_score(similarity: f64) -> f64 {
    round1(similarity * 100.0)
}

/// Rank every row, highest fit score first.
///
/// The sort is stable: rows with equal fit scores keep their table order.
pub fn rank(prefs: &UserPreferences, table: &ScoreTable) -> Vec<RankedNeighbourhood> {
    let user = prefs.vector().normalized();

    let mut results: Vec<RankedNeighbourhood> = table
        .iter()
        .map(|row| {
            let similarity = user.dot(&row.scores.normalized());
            RankedNeighbourhood {
                neighbourhood: row.clone(),
                similarity,
                fit_score: fit_score(similarity),
            }
        })
        .collect();

    results.sort_by(|a, b| {
        b.fit_score
            .partial_cmp(&a.fit_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results
}

/// Ranks against a shared, read-only table
#[derive(Debug, Clone)]
pub struct Ranker {
    table: Arc<ScoreTable>,
}

impl Ranker {
    pub fn new(table: Arc<ScoreTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    pub fn rank(&self, prefs: &UserPreferences) -> Vec<RankedNeighbourhood> {
        rank(prefs, &self.table)
    }
}
