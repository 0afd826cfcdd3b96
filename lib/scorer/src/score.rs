//! Keyword-gated review scoring

use crate::sentiment::PolarityScorer;
use crate::source::ReviewRecord;
use nbhdfit_core::{contains_keyword, Dimension};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// One (neighbourhood, dimension, polarity) observation
#[derive(Debug, Clone, PartialEq)]
pub struct PolaritySample {
    pub neighbourhood: String,
    pub dimension: Dimension,
    pub polarity: f64,
}

/// Polarity of the whole text if any keyword occurs in it, otherwise `None`
pub fn score_dimension<S: PolarityScorer + ?Sized>(
    text: &str,
    keywords: &[&str],
    scorer: &S,
) -> Option<f64> {
    let lowered = text.to_lowercase();
    contains_keyword(&lowered, keywords).then(|| scorer.polarity(&lowered))
}

/// Samples for every dimension whose keywords occur in the review.
///
/// The comment is already lower-case, so gating does not allocate. The polarity
/// is computed at most once per review since it does not depend on the dimension.
pub fn score_review<S: PolarityScorer + ?Sized>(
    review: &ReviewRecord,
    scorer: &S,
) -> Vec<PolaritySample> {
    let mut polarity = None;
    Dimension::ALL
        .into_iter()
        .filter(|dim| dim.mentioned_in(&review.comment))
        .map(|dimension| {
            let value = *polarity.get_or_insert_with(|| scorer.polarity(&review.comment));
            PolaritySample {
                neighbourhood: review.neighbourhood.clone(),
                dimension,
                polarity: value,
            }
        })
        .collect()
}

/// Score all reviews in parallel, logging every `progress_every` reviews
pub fn score_reviews<S: PolarityScorer + ?Sized>(
    reviews: &[ReviewRecord],
    scorer: &S,
    progress_every: usize,
) -> Vec<PolaritySample> {
    let total = reviews.len();
    let done = AtomicUsize::new(0);
    let every = progress_every.max(1);

    let samples: Vec<PolaritySample> = reviews
        .par_iter()
        .flat_map_iter(|review| {
            let n = done.fetch_add(1, Ordering::Relaxed);
            if n % every == 0 {
                info!("Scoring review {}/{}...", n, total);
            }
            score_review(review, scorer)
        })
        .collect();

    info!("Scored {} reviews into {} samples", total, samples.len());
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::LexiconPolarity;

    /// Returns the same polarity for any text
    struct Constant(f64);

    impl PolarityScorer for Constant {
        fn polarity(&self, _text: &str) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_no_keyword_no_signal() {
        let scorer = Constant(0.9);
        let result = score_dimension("lovely host", Dimension::Transport.keywords(), &scorer);
        assert_eq!(result, None);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let scorer = Constant(0.4);
        let result = score_dimension("Right next to the METRO", Dimension::Transport.keywords(), &scorer);
        assert_eq!(result, Some(0.4));
    }

    #[test]
    fn test_polarity_covers_whole_comment() {
        let scorer = LexiconPolarity::new();
        // "terrible" is nowhere near "metro" but still sets the tone
        let text = "terrible host. the metro was close";
        let result = score_dimension(text, Dimension::Transport.keywords(), &scorer).unwrap();
        assert_eq!(result, scorer.polarity(text));
        assert!(result < 0.0);
    }

    #[test]
    fn test_noise_keyword_not_inverted() {
        let scorer = LexiconPolarity::new();
        let text = "wonderful flat, perfect location, lovely host. street a bit noisy";
        let result = score_dimension(text, Dimension::Peaceful.keywords(), &scorer).unwrap();
        assert!(result > 0.0);
    }

    #[test]
    fn test_score_review_tags_every_matching_dimension() {
        let review = ReviewRecord::new("el Born", "Lovely tapas bar near the beach and the metro");
        let samples = score_review(&review, &Constant(0.5));
        let dims: Vec<Dimension> = samples.iter().map(|s| s.dimension).collect();
        assert_eq!(dims, vec![Dimension::Nightlife, Dimension::Nature, Dimension::Transport]);
        assert!(samples.iter().all(|s| s.neighbourhood == "el Born" && s.polarity == 0.5));
    }

    #[test]
    fn test_score_review_agrees_with_score_dimension() {
        let scorer = LexiconPolarity::new();
        let review = ReviewRecord::new("Gràcia", "Quiet street, but the bus was NOT great");
        let samples = score_review(&review, &scorer);
        for dim in Dimension::ALL {
            let expected = score_dimension("Quiet street, but the bus was NOT great", dim.keywords(), &scorer);
            let got = samples.iter().find(|s| s.dimension == dim).map(|s| s.polarity);
            assert_eq!(got, expected, "{}", dim);
        }
    }

    #[test]
    fn test_score_reviews_collects_all_samples() {
        let reviews = vec![
            ReviewRecord::new("A", "quiet and safe"),
            ReviewRecord::new("B", "nothing to say"),
            ReviewRecord::new("A", "kids loved the playground"),
        ];
        let samples = score_reviews(&reviews, &Constant(0.2), 1);
        assert_eq!(samples.len(), 3);
        assert!(samples.iter().all(|s| s.neighbourhood == "A"));
    }
}
