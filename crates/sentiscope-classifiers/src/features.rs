//! Bigram feature extraction for the long-review path

use std::collections::HashSet;

use sentiscope_core::{Bigram, FeatureVector, FeatureVocabulary, Review};
use tracing::debug;

use crate::stopwords::StopwordSet;

/// Turns reviews into boolean bigram-presence vectors.
///
/// Stopword tokens are dropped first and bigrams are built over the
/// filtered sequence, so removals create adjacencies that do not exist in
/// the raw text. With `normalize_case` unset, matching against the
/// lowercase stopword list is literal and capitalized tokens slip through,
/// mirroring the upstream training setup; the switch lowercases tokens
/// before both filtering and bigram construction.
pub struct FeatureExtractor {
    stopwords: StopwordSet,
    normalize_case: bool,
}

impl FeatureExtractor {
    /// Create an extractor with literal stopword matching
    pub fn new(stopwords: StopwordSet) -> Self {
        Self {
            stopwords,
            normalize_case: false,
        }
    }

    /// Lowercase tokens before filtering and bigram construction
    pub fn with_normalized_case(mut self) -> Self {
        self.normalize_case = true;
        self
    }

    /// Build the feature vector for one review.
    ///
    /// The output has exactly one flag per vocabulary bigram, in vocabulary
    /// order. Fewer than two filtered tokens yield an all-false vector.
    pub fn extract(&self, review: &Review, vocabulary: &FeatureVocabulary) -> FeatureVector {
        let filtered = self.filtered_tokens(review);

        let mut present: HashSet<Bigram> = HashSet::new();
        for pair in filtered.windows(2) {
            present.insert(Bigram::new(pair[0].as_str(), pair[1].as_str()));
        }

        let flags = vocabulary
            .bigrams()
            .iter()
            .map(|bigram| present.contains(bigram))
            .collect();
        FeatureVector::new(flags)
    }

    /// Feature vectors for a slice of reviews, order-preserved
    pub fn extract_batch(
        &self,
        reviews: &[Review],
        vocabulary: &FeatureVocabulary,
    ) -> Vec<FeatureVector> {
        let vectors: Vec<_> = reviews
            .iter()
            .map(|review| self.extract(review, vocabulary))
            .collect();
        debug!(
            reviews = vectors.len(),
            features = vocabulary.len(),
            "built feature vectors"
        );
        vectors
    }

    /// Tokens surviving the stopword filter, in order
    fn filtered_tokens(&self, review: &Review) -> Vec<String> {
        review
            .tokens
            .iter()
            .map(|token| {
                if self.normalize_case {
                    token.to_lowercase()
                } else {
                    token.clone()
                }
            })
            .filter(|token| !self.stopwords.contains(token))
            .collect()
    }
}
