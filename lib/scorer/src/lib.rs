//! # nbhdfit Scorer
//!
//! Offline batch that turns raw guest reviews into the neighbourhood score table.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  listings   │────>│    join     │────>│  keyword    │
//! │  reviews    │     │ (lossy left)│     │  gating     │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │ filter and  │<────│  polarity   │
//!                     │  impute     │     │  mean, 0-100│
//!                     └─────────────┘     └─────────────┘
//!                            │
//!                     ┌─────────────┐
//!                     │ score table │
//!                     │   (CSV)     │
//!                     └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use nbhdfit_scorer::{LexiconPolarity, PolarityScorer, score_dimension};
//! use nbhdfit_core::Dimension;
//!
//! let scorer = LexiconPolarity::new();
//! let text = "lovely flat, the metro was two minutes away";
//! assert!(score_dimension(text, Dimension::Transport.keywords(), &scorer).unwrap() > 0.0);
//! assert!(score_dimension(text, Dimension::Family.keywords(), &scorer).is_none());
//! ```

pub mod aggregate;
pub mod config;
pub mod fetch;
pub mod pipeline;
pub mod score;
pub mod sentiment;
pub mod source;

#[cfg(test)]
mod test_http;

pub use aggregate::{aggregate, filter_and_impute, median, rescale, review_counts, PartialRow};
pub use config::ScorerConfig;
pub use fetch::{fetch, fetch_table, gzip_reader, GzTable};
pub use pipeline::{PipelineReport, ScorePipeline};
pub use score::{score_dimension, score_review, score_reviews, PolaritySample};
pub use sentiment::{LexiconPolarity, PolarityScorer};
pub use source::{merge_reviews_with_neighbourhood, read_listings, read_reviews, Listing, RawReview, ReviewRecord};
