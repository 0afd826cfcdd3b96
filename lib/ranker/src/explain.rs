//! Explainability for ranked neighbourhoods
//!
//! Output records that pair each fit score with its label and the
//! strengths/frictions behind it, plus summary statistics for a ranking.

use crate::analysis::{analyze_match, DimensionScore, MatchAnalysis};
use crate::label::{classify_fit, FitLabel};
use crate::preferences::UserPreferences;
use crate::rank::RankedNeighbourhood;
use nbhdfit_core::{Dimension, Error, Result};
use serde::Serialize;

/// Priority 1-5 is shown on the 0-100 axis as `priority * 20`
pub const PRIORITY_DISPLAY_SCALE: f64 = 20.0;

/// A ranked neighbourhood with its label and match analysis
#[derive(Debug, Clone, Serialize)]
pub struct ExplainedMatch {
    /// 1-based position in the ranking
    pub rank: usize,
    pub neighbourhood: String,
    pub scores: Vec<DimensionScore>,
    pub similarity: f64,
    pub fit_score: f64,
    pub label: FitLabel,
    pub colour: &'static str,
    pub analysis: MatchAnalysis,
}

impl ExplainedMatch {
    pub fn from_ranked(rank: usize, ranked: &RankedNeighbourhood, prefs: &UserPreferences) -> Self {
        let label = classify_fit(ranked.fit_score);
        Self {
            rank,
            neighbourhood: ranked.neighbourhood.name.clone(),
            scores: Dimension::ALL
                .into_iter()
                .map(|d| DimensionScore {
                    dimension: d,
                    score: ranked.neighbourhood.score(d),
                })
                .collect(),
            similarity: ranked.similarity,
            fit_score: ranked.fit_score,
            label,
            colour: label.colour(),
            analysis: analyze_match(prefs, &ranked.neighbourhood),
        }
    }

    /// Explain a whole ranking, keeping its order
    pub fn from_ranked_list(ranked: &[RankedNeighbourhood], prefs: &UserPreferences) -> Vec<Self> {
        ranked
            .iter()
            .enumerate()
            .map(|(i, r)| Self::from_ranked(i + 1, r, prefs))
            .collect()
    }
}

/// User priority and neighbourhood score side by side on the 0-100 axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfilePoint {
    pub dimension: Dimension,
    pub user: f64,
    pub neighbourhood: f64,
}

pub fn profile_overlay(prefs: &UserPreferences, ranked: &RankedNeighbourhood) -> Vec<ProfilePoint> {
    Dimension::ALL
        .into_iter()
        .map(|d| ProfilePoint {
            dimension: d,
            user: f64::from(prefs.priority(d)) * PRIORITY_DISPLAY_SCALE,
            neighbourhood: ranked.neighbourhood.score(d),
        })
        .collect()
}

/// Where one neighbourhood landed in a ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusPosition {
    pub neighbourhood: String,
    pub rank: usize,
    pub total: usize,
    /// Share of neighbourhoods this one ranks at or above, 0-100
    pub percentile: u32,
    pub fit_score: f64,
    pub label: FitLabel,
}

/// Summary statistics for a ranking
#[derive(Debug, Clone, Serialize)]
pub struct RankingSummary {
    pub total: usize,
    pub best_neighbourhood: Option<String>,
    pub best_score: f64,
    pub avg_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<FocusPosition>,
}

impl RankingSummary {
    /// Compute stats from a sorted ranking.
    ///
    /// A `focus` name that is not in the ranking is an error.
    pub fn compute(ranked: &[RankedNeighbourhood], focus: Option<&str>) -> Result<Self> {
        let focus = focus.map(|name| locate(ranked, name)).transpose()?;

        if ranked.is_empty() {
            return Ok(Self {
                total: 0,
                best_neighbourhood: None,
                best_score: 0.0,
                avg_score: 0.0,
                focus,
            });
        }

        let avg_score = ranked.iter().map(|r| r.fit_score).sum::<f64>() / ranked.len() as f64;

        Ok(Self {
            total: ranked.len(),
            best_neighbourhood: Some(ranked[0].neighbourhood.name.clone()),
            best_score: ranked[0].fit_score, // sorted
            avg_score,
            focus,
        })
    }
}

/// Rank and percentile of `name` in a sorted ranking
pub fn locate(ranked: &[RankedNeighbourhood], name: &str) -> Result<FocusPosition> {
    let index = ranked
        .iter()
        .position(|r| r.neighbourhood.name == name)
        .ok_or_else(|| Error::UnknownNeighbourhood(name.to_string()))?;

    let total = ranked.len();
    let rank = index + 1;
    let percentile = ((1.0 - (rank - 1) as f64 / total as f64) * 100.0).round_ties_even() as u32;

    Ok(FocusPosition {
        neighbourhood: name.to_string(),
        rank,
        total,
        percentile,
        fit_score: ranked[index].fit_score,
        label: classify_fit(ranked[index].fit_score),
    })
}
