//! # nbhdfit
//!
//! Recommends the neighbourhood that best fits a traveller, by comparing their
//! priorities with per-neighbourhood sentiment scores mined from guest reviews.
//!
//! ## Two phases
//!
//! - **Offline scorer** ([`nbhdfit_scorer`]): downloads listings and reviews, tags each
//!   review with the lifestyle dimensions its keywords mention, scores its tone, and
//!   writes a neighbourhood × dimension table of 0-100 scores.
//! - **Online ranker** ([`nbhdfit_ranker`]): loads that table and ranks every
//!   neighbourhood by cosine similarity to a 1-5 priority per dimension, with a
//!   fit label and the strengths and frictions behind it.
//!
//! ## Quick Start
//!
//! ```bash
//! nbhdfit score --output neighbourhood_scores.csv
//! nbhdfit rank --scores neighbourhood_scores.csv --prefs 5,1,5,1,5,3,3,1 --top 5
//! ```
//!
//! ## As a Library
//!
//! ```rust
//! use nbhdfit::prelude::*;
//!
//! let table = ScoreTable::new(vec![
//!     NeighbourhoodScores::new("Gràcia", [72.0, 64.5, 80.0, 61.0, 77.0, 70.0, 68.0, 59.0]),
//!     NeighbourhoodScores::new("el Raval", [90.0, 20.0, 85.0, 25.0, 88.0, 60.0, 70.0, 15.0]),
//! ])
//! .unwrap();
//!
//! let prefs: UserPreferences = "3,5,4,5,3,4,3,5".parse().unwrap();
//! let ranked = rank(&prefs, &table);
//! let explained = ExplainedMatch::from_ranked_list(&ranked, &prefs);
//! assert_eq!(explained[0].neighbourhood, "Gràcia");
//! ```
//!
//! ## Crate Structure
//!
//! - [`nbhdfit-core`](nbhdfit_core) - Dimensions, vectors, the score table file format
//! - [`nbhdfit-scorer`](nbhdfit_scorer) - Offline review scoring pipeline
//! - [`nbhdfit-ranker`](nbhdfit_ranker) - Ranking, labels, match analysis, table cache

pub use nbhdfit_core as core;
pub use nbhdfit_ranker as ranker;
pub use nbhdfit_scorer as scorer;

// Re-export core types
pub use nbhdfit_core::{Dimension, Error, NeighbourhoodScores, Result, ScoreTable, Vector};

/// Prelude module for convenient imports
pub mod prelude {
    pub use nbhdfit_core::{Dimension, Error, NeighbourhoodScores, Result, ScoreTable, Vector};
    pub use nbhdfit_ranker::{
        analyze_match, classify_fit, rank, ExplainedMatch, FitLabel, MatchAnalysis,
        RankedNeighbourhood, Ranker, RankingSummary, ScoreTableCache, UserPreferences,
    };
    pub use nbhdfit_scorer::{LexiconPolarity, PolarityScorer, ScorePipeline, ScorerConfig};
}
