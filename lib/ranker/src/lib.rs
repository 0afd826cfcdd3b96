//! # nbhdfit Ranker
//!
//! Ranks neighbourhoods against a traveller's priorities and explains the result.
//!
//! ## Features
//!
//! - **Cosine ranking**: priority-shape matching that ignores the overall level of the ratings
//! - **Fit labels**: fixed tiers from "Fair match" to "Excellent match"
//! - **Match analysis**: strengths, frictions and a confidence note per neighbourhood
//! - **Read-through cache**: a loaded table is reused until its file changes
//!
//! ## Example
//!
//! ```rust
//! use nbhdfit_core::{NeighbourhoodScores, ScoreTable};
//! use nbhdfit_ranker::{rank, classify_fit, FitLabel, UserPreferences};
//!
//! let table = ScoreTable::new(vec![
//!     NeighbourhoodScores::new("el Born", [90.0, 20.0, 85.0, 25.0, 88.0, 60.0, 70.0, 15.0]),
//!     NeighbourhoodScores::new("Sarrià", [20.0, 90.0, 40.0, 85.0, 40.0, 85.0, 50.0, 90.0]),
//! ])
//! .unwrap();
//!
//! let prefs: UserPreferences = "5,1,5,1,5,3,3,1".parse().unwrap();
//! let ranked = rank(&prefs, &table);
//!
//! assert_eq!(ranked[0].name(), "el Born");
//! assert_eq!(ranked[0].fit_score, 99.4);
//! assert_eq!(classify_fit(ranked[0].fit_score), FitLabel::Excellent);
//! ```
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ score table │────>│   Ranker    │────>│  Explained  │
//! │  (cached)   │     │  (cosine)   │     │   matches   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            ^
//!                     ┌─────────────┐
//!                     │ preferences │
//!                     │   (1-5)     │
//!                     └─────────────┘
//! ```

pub mod analysis;
pub mod cache;
pub mod explain;
pub mod label;
pub mod preferences;
pub mod rank;

pub use analysis::{analyze_match, Confidence, DimensionScore, MatchAnalysis};
pub use cache::{load_scores, ScoreTableCache};
pub use explain::{locate, profile_overlay, ExplainedMatch, FocusPosition, ProfilePoint, RankingSummary};
pub use label::{classify_fit, FitLabel};
pub use preferences::UserPreferences;
pub use rank::{fit_score, rank, similarity, RankedNeighbourhood, Ranker};
