//! Offline scorer configuration

use nbhdfit_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_LISTINGS_URL: &str =
    "http://data.insideairbnb.com/spain/catalonia/barcelona/2024-09-10/data/listings.csv.gz";
pub const DEFAULT_REVIEWS_URL: &str =
    "http://data.insideairbnb.com/spain/catalonia/barcelona/2024-09-10/data/reviews.csv.gz";
pub const DEFAULT_MIN_REVIEWS: usize = 100;
pub const DEFAULT_OUTPUT: &str = "neighbourhood_scores.csv";

/// Settings for one scoring run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScorerConfig {
    /// Gzip CSV with `id` and `neighbourhood_cleansed`
    pub listings_url: String,
    /// Gzip CSV with `listing_id` and `comments`
    pub reviews_url: String,
    pub listings_timeout_secs: u64,
    pub reviews_timeout_secs: u64,
    /// Neighbourhoods with fewer joined reviews are dropped
    pub min_reviews: usize,
    pub output: PathBuf,
    /// Log a progress line every N scored reviews
    pub progress_every: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            listings_url: DEFAULT_LISTINGS_URL.to_string(),
            reviews_url: DEFAULT_REVIEWS_URL.to_string(),
            listings_timeout_secs: 60,
            reviews_timeout_secs: 120,
            min_reviews: DEFAULT_MIN_REVIEWS,
            output: PathBuf::from(DEFAULT_OUTPUT),
            progress_every: 5000,
        }
    }
}

impl ScorerConfig {
    /// Load from a JSON file; missing keys take their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: ScorerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.listings_url.trim().is_empty() {
            return Err(Error::InvalidConfig("listings_url is empty".to_string()));
        }
        if self.reviews_url.trim().is_empty() {
            return Err(Error::InvalidConfig("reviews_url is empty".to_string()));
        }
        if self.listings_timeout_secs == 0 || self.reviews_timeout_secs == 0 {
            return Err(Error::InvalidConfig("timeouts must be positive".to_string()));
        }
        if self.progress_every == 0 {
            return Err(Error::InvalidConfig("progress_every must be positive".to_string()));
        }
        Ok(())
    }

    pub fn listings_timeout(&self) -> Duration {
        Duration::from_secs(self.listings_timeout_secs)
    }

    pub fn reviews_timeout(&self) -> Duration {
        Duration::from_secs(self.reviews_timeout_secs)
    }
}
