//! Strengths and frictions between user priorities and neighbourhood scores

use crate::preferences::{UserPreferences, HIGH_PRIORITY};
use nbhdfit_core::{Dimension, NeighbourhoodScores};
use serde::Serialize;

/// A dimension is a strength at or above this score...
pub const STRENGTH_MIN_SCORE: f64 = 70.0;
/// ...when the user rated it at least this high
pub const STRENGTH_MIN_PRIORITY: u8 = HIGH_PRIORITY;

/// A dimension is a friction below this score...
pub const FRICTION_MAX_SCORE: f64 = 55.0;
/// ...when the user rated it at least this high
pub const FRICTION_MIN_PRIORITY: u8 = 3;

/// Number of high-priority dimensions for a high-confidence note
pub const HIGH_CONFIDENCE_DIMS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub score: f64,
}

/// How sharply the user's priorities separate neighbourhoods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Moderate,
    Low,
}

impl Confidence {
    pub fn from_high_priority_count(count: usize) -> Self {
        match count {
            0 => Confidence::Low,
            n if n >= HIGH_CONFIDENCE_DIMS => Confidence::High,
            _ => Confidence::Moderate,
        }
    }

    pub fn note(self) -> &'static str {
        match self {
            Confidence::High => {
                "High confidence: you have strong preferences across many dimensions."
            }
            Confidence::Moderate => {
                "Moderate confidence: the model is weighting your top priorities."
            }
            Confidence::Low => {
                "Lower confidence: your preferences are evenly distributed. Try setting some dimensions higher to get a sharper recommendation."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchAnalysis {
    pub strengths: Vec<DimensionScore>,
    pub frictions: Vec<DimensionScore>,
    pub confidence: Confidence,
    pub confidence_note: &'static str,
}

/// Compare one neighbourhood against the user's priorities, in dimension order
pub fn analyze_match(prefs: &UserPreferences, row: &NeighbourhoodScores) -> MatchAnalysis {
    let pick = |keep: &dyn Fn(f64, u8) -> bool| -> Vec<DimensionScore> {
        Dimension::ALL
            .into_iter()
            .filter(|d| keep(row.score(*d), prefs.priority(*d)))
            .map(|d| DimensionScore {
                dimension: d,
                score: row.score(d),
            })
            .collect()
    };

    let strengths = pick(&|score: f64, priority: u8| {
        score >= STRENGTH_MIN_SCORE && priority >= STRENGTH_MIN_PRIORITY
    });
    let frictions = pick(&|score: f64, priority: u8| {
        score < FRICTION_MAX_SCORE && priority >= FRICTION_MIN_PRIORITY
    });

    let confidence = Confidence::from_high_priority_count(prefs.high_priority_dimensions().len());

    MatchAnalysis {
        strengths,
        frictions,
        confidence,
        confidence_note: confidence.note(),
    }
}
