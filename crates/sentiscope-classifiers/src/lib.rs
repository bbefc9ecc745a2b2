//! Sentiscope Classifiers
//!
//! Scoring components for batch review sentiment analysis.
//!
//! Reviews take one of two paths chosen by word count:
//! - Short reviews go to a lexicon polarity scorer (no model required)
//! - Long reviews become boolean bigram feature vectors and are labeled by
//!   a pretrained Naive Bayes model in a single batch call
//!
//! Everything runs on CPU; the only external artifacts are the feature
//! vocabulary and the serialized model.

pub mod bayes;
pub mod classifier;
pub mod features;
pub mod lexicon;
pub mod pipeline;
pub mod router;
pub mod scorer;
pub mod stopwords;
pub mod vocabulary;

pub use bayes::{BigramNaiveBayes, ClassLikelihoods, ModelArtifact};
pub use classifier::ReviewClassifier;
pub use features::FeatureExtractor;
pub use lexicon::LexiconScorer;
pub use pipeline::{AnalysisPipeline, ScorerFailurePolicy};
pub use router::{Route, Router};
pub use scorer::PolarityScorer;
pub use stopwords::StopwordSet;
pub use vocabulary::{load_vocabulary, parse_bigram_literal};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::bayes::BigramNaiveBayes;
    pub use crate::classifier::ReviewClassifier;
    pub use crate::features::FeatureExtractor;
    pub use crate::lexicon::LexiconScorer;
    pub use crate::pipeline::{AnalysisPipeline, ScorerFailurePolicy};
    pub use crate::router::{Route, Router};
    pub use crate::scorer::PolarityScorer;
    pub use crate::stopwords::StopwordSet;
    pub use crate::vocabulary::load_vocabulary;
}
