//! Length-based review routing

use sentiscope_core::Review;

/// Scoring path for one review
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Lexicon scorer path
    Short,
    /// Bigram classifier path
    Long,
}

/// Routes reviews by word count against a configurable threshold.
///
/// Reviews strictly shorter than the threshold go short, everything else
/// long. A threshold of zero sends every review long.
#[derive(Debug, Clone, Copy)]
pub struct Router {
    threshold: usize,
}

impl Router {
    /// Create a router with the given word-count threshold
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    /// The configured threshold
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Deterministic routing decision for one review
    pub fn route(&self, review: &Review) -> Route {
        if review.word_count() < self.threshold {
            Route::Short
        } else {
            Route::Long
        }
    }

    /// Split a corpus into short and long streams, preserving relative order
    pub fn partition(&self, reviews: Vec<Review>) -> (Vec<Review>, Vec<Review>) {
        let mut short = Vec::new();
        let mut long = Vec::new();
        for review in reviews {
            match self.route(&review) {
                Route::Short => short.push(review),
                Route::Long => long.push(review),
            }
        }
        (short, long)
    }
}
