//! Listings and reviews sources
//!
//! Readers for the two raw CSV files and the lossy left join that attaches a
//! neighbourhood label to every review.

use ahash::AHashMap;
use nbhdfit_core::{Error, Result};
use std::io::Read;
use tracing::info;

pub const LISTING_ID_COLUMN: &str = "id";
pub const NEIGHBOURHOOD_LABEL_COLUMN: &str = "neighbourhood_cleansed";
pub const REVIEW_LISTING_COLUMN: &str = "listing_id";
pub const COMMENTS_COLUMN: &str = "comments";

/// A listing and the neighbourhood it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub neighbourhood: Option<String>,
}

/// A review as read from the source file
#[derive(Debug, Clone, PartialEq)]
pub struct RawReview {
    pub listing_id: String,
    pub comment: Option<String>,
}

/// A review with a known neighbourhood and a lower-cased comment
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub neighbourhood: String,
    pub comment: String,
}

impl ReviewRecord {
    pub fn new(neighbourhood: impl Into<String>, comment: &str) -> Self {
        Self {
            neighbourhood: neighbourhood.into(),
            comment: comment.to_lowercase(),
        }
    }
}

/// Only a truly empty cell is null; whitespace-only text is kept as a value
fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(|v| v.to_string())
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| Error::MissingColumn(name.to_string()))
}

/// Read `id` and `neighbourhood_cleansed` from a listings CSV
pub fn read_listings<R: Read>(source: R) -> Result<Vec<Listing>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(source);
    let headers = reader.headers()?.clone();
    let id_idx = column_index(&headers, LISTING_ID_COLUMN)?;
    let nbhd_idx = column_index(&headers, NEIGHBOURHOOD_LABEL_COLUMN)?;

    let mut listings = Vec::new();
    for record in reader.records() {
        let record = record?;
        let id = record.get(id_idx).unwrap_or_default().trim();
        if id.is_empty() {
            continue;
        }
        listings.push(Listing {
            id: id.to_string(),
            neighbourhood: non_empty(record.get(nbhd_idx)),
        });
    }

    info!("Read {} listings", listings.len());
    Ok(listings)
}

/// Read `listing_id` and `comments` from a reviews CSV
pub fn read_reviews<R: Read>(source: R) -> Result<Vec<RawReview>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(source);
    let headers = reader.headers()?.clone();
    let listing_idx = column_index(&headers, REVIEW_LISTING_COLUMN)?;
    let comments_idx = column_index(&headers, COMMENTS_COLUMN)?;

    let mut reviews = Vec::new();
    for record in reader.records() {
        let record = record?;
        reviews.push(RawReview {
            listing_id: record.get(listing_idx).unwrap_or_default().trim().to_string(),
            comment: non_empty(record.get(comments_idx)),
        });
    }

    info!("Read {} reviews", reviews.len());
    Ok(reviews)
}

/// Left-join reviews to listings on the listing id.
///
/// Reviews whose listing is unknown, whose listing has no neighbourhood, or
/// that have no comment are dropped. The first listing wins on duplicate ids.
/// Raw reviews are consumed so their text is freed as the join proceeds.
pub fn merge_reviews_with_neighbourhood(
    reviews: Vec<RawReview>,
    listings: &[Listing],
) -> Vec<ReviewRecord> {
    let total = reviews.len();
    let mut lookup: AHashMap<&str, Option<&str>> = AHashMap::with_capacity(listings.len());
    for listing in listings {
        lookup
            .entry(listing.id.as_str())
            .or_insert(listing.neighbourhood.as_deref());
    }

    let joined: Vec<ReviewRecord> = reviews
        .into_iter()
        .filter_map(|review| {
            let neighbourhood = lookup.get(review.listing_id.as_str()).copied().flatten()?;
            let comment = review.comment?;
            Some(ReviewRecord::new(neighbourhood, &comment))
        })
        .collect();

    info!(
        "Joined {} of {} reviews to a neighbourhood ({} dropped)",
        joined.len(),
        total,
        total - joined.len()
    );
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTINGS: &str = "id,name,neighbourhood_cleansed\n1,Flat A,el Raval\n2,Flat B,\n3,\"Loft, sunny\",Gràcia\n";
    const REVIEWS: &str = "listing_id,id,date,comments\n1,10,2024-01-01,\"Great BAR scene, loved it\"\n2,11,2024-01-02,nice\n3,12,2024-01-03,\n4,13,2024-01-04,orphan review\n3,14,2024-01-05,\"Quiet street,\nlovely park\"\n";

    #[test]
    fn test_read_listings() {
        let listings = read_listings(LISTINGS.as_bytes()).unwrap();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].neighbourhood.as_deref(), Some("el Raval"));
        assert_eq!(listings[1].neighbourhood, None);
        assert_eq!(listings[2].neighbourhood.as_deref(), Some("Gràcia"));
    }

    #[test]
    fn test_read_reviews_handles_multiline_comments() {
        let reviews = read_reviews(REVIEWS.as_bytes()).unwrap();
        assert_eq!(reviews.len(), 5);
        assert_eq!(reviews[2].comment, None);
        assert_eq!(reviews[4].comment.as_deref(), Some("Quiet street,\nlovely park"));
    }

    #[test]
    fn test_missing_source_column() {
        let err = read_reviews("listing_id,text\n1,hello\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(ref c) if c == "comments"));
    }

    #[test]
    fn test_merge_drops_unusable_rows() {
        let listings = read_listings(LISTINGS.as_bytes()).unwrap();
        let reviews = read_reviews(REVIEWS.as_bytes()).unwrap();
        let joined = merge_reviews_with_neighbourhood(reviews, &listings);

        // null neighbourhood, null comment and unknown listing are all dropped
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].neighbourhood, "el Raval");
        assert_eq!(joined[0].comment, "great bar scene, loved it");
        assert_eq!(joined[1].neighbourhood, "Gràcia");
    }

    #[test]
    fn test_whitespace_comment_is_not_null() {
        let listings = read_listings("id,neighbourhood_cleansed\n1,Sants\n".as_bytes()).unwrap();
        let reviews = read_reviews("listing_id,comments\n1,\"   \"\n1,\n".as_bytes()).unwrap();
        assert_eq!(reviews[0].comment.as_deref(), Some("   "));
        assert_eq!(reviews[1].comment, None);

        // the blank review still counts toward the neighbourhood's review total
        let joined = merge_reviews_with_neighbourhood(reviews, &listings);
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].neighbourhood, "Sants");
    }
}
