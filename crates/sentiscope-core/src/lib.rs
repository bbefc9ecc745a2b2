//! Sentiscope Core
//!
//! Core types and utilities shared across Sentiscope components.
//!
//! This crate provides:
//! - Common types for reviews, bigram features, and polarity scores
//! - The corpus statistics accumulator and the final analysis report
//! - Error types and result handling

pub mod error;
pub mod stats;
pub mod types;

pub use error::{Error, Result};
pub use stats::{AnalysisReport, CorpusStats, Exemplar, Overall};
pub use types::{Bigram, FeatureVector, FeatureVocabulary, Label, PolarityScore, Review};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::stats::{AnalysisReport, CorpusStats, Exemplar, Overall};
    pub use crate::types::{Bigram, FeatureVector, FeatureVocabulary, Label, PolarityScore, Review};
}
