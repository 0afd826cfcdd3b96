// Offline scoring pipeline: download, join, score, aggregate, persist
use crate::aggregate::{aggregate, filter_and_impute, review_counts};
use crate::config::ScorerConfig;
use crate::fetch::fetch_table;
use crate::score::score_reviews;
use crate::sentiment::{LexiconPolarity, PolarityScorer};
use crate::source::{merge_reviews_with_neighbourhood, read_listings, read_reviews};
use nbhdfit_core::{Result, ScoreTable};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

/// Counters from one run
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PipelineReport {
    pub listings_read: usize,
    pub reviews_read: usize,
    pub reviews_joined: usize,
    pub samples: usize,
    pub neighbourhoods_scored: usize,
    pub neighbourhoods_kept: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

/// Runs the offline scorer with a given polarity heuristic
pub struct ScorePipeline<S: PolarityScorer = LexiconPolarity> {
    config: ScorerConfig,
    scorer: S,
}

impl ScorePipeline<LexiconPolarity> {
    pub fn new(config: ScorerConfig) -> Result<Self> {
        Self::with_scorer(config, LexiconPolarity::new())
    }
}

impl<S: PolarityScorer> ScorePipeline<S> {
    pub fn with_scorer(config: ScorerConfig, scorer: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, scorer })
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Download both sources, build the table and write it to `config.output`.
    ///
    /// Nothing is written unless every step succeeds.
    pub async fn run(&self) -> Result<PipelineReport> {
        info!("Downloading listings...");
        let listings = fetch_table(&self.config.listings_url, self.config.listings_timeout()).await?;

        info!("Downloading reviews...");
        let reviews = fetch_table(&self.config.reviews_url, self.config.reviews_timeout()).await?;

        let (table, mut report) = self.build_table(listings, reviews)?;

        table.write_to_path(&self.config.output)?;
        info!("Saved {} neighbourhoods to {:?}", table.len(), self.config.output);

        report.output = Some(self.config.output.clone());
        Ok(report)
    }

    /// Build the score table from listings and reviews CSV readers
    pub fn build_table<L: Read, R: Read>(
        &self,
        listings: L,
        reviews: R,
    ) -> Result<(ScoreTable, PipelineReport)> {
        let listings = read_listings(listings)?;
        let raw_reviews = read_reviews(reviews)?;
        let reviews_read = raw_reviews.len();
        let joined = merge_reviews_with_neighbourhood(raw_reviews, &listings);

        info!("Scoring reviews...");
        let samples = score_reviews(&joined, &self.scorer, self.config.progress_every);
        let rows = aggregate(&samples);
        let neighbourhoods_scored = rows.len();

        let counts = review_counts(&joined);
        let table = filter_and_impute(rows, &counts, self.config.min_reviews)?;
        info!("Done. {} neighbourhoods scored", table.len());

        let report = PipelineReport {
            listings_read: listings.len(),
            reviews_read,
            reviews_joined: joined.len(),
            samples: samples.len(),
            neighbourhoods_scored,
            neighbourhoods_kept: table.len(),
            output: None,
        };
        Ok((table, report))
    }
}
