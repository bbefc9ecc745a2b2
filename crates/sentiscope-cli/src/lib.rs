//! Sentiscope CLI
//!
//! Binary-support library for the `sentiscope` command: configuration
//! loading, corpus reading, pipeline assembly, and report rendering.

pub mod cli;
pub mod config;
pub mod corpus;
pub mod report;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use sentiscope_classifiers::{
    AnalysisPipeline, BigramNaiveBayes, FeatureExtractor, LexiconScorer, Router, StopwordSet,
};
use sentiscope_core::AnalysisReport;

use config::AnalyzerConfig;

/// Assemble the pipeline from the configured artifacts and analyze the corpus.
///
/// Any missing or malformed artifact aborts before a single review is
/// scored; no partial report is produced.
pub async fn analyze_corpus(config: &AnalyzerConfig) -> anyhow::Result<AnalysisReport> {
    let mut stopwords = match &config.stopwords {
        Some(path) => StopwordSet::from_file(Path::new(path))
            .with_context(|| format!("failed to load stopword list from {path}"))?,
        None => StopwordSet::default_english(),
    };
    if let Some(path) = &config.names {
        stopwords
            .extend_with_names(Path::new(path))
            .with_context(|| format!("failed to load name list from {path}"))?;
    }

    let vocabulary = sentiscope_classifiers::load_vocabulary(Path::new(&config.vocabulary))
        .with_context(|| format!("failed to load bigram vocabulary from {}", config.vocabulary))?;
    let model = BigramNaiveBayes::from_file(Path::new(&config.model), &vocabulary)
        .with_context(|| format!("failed to load classifier model from {}", config.model))?;

    let mut extractor = FeatureExtractor::new(stopwords);
    if config.normalize_case {
        extractor = extractor.with_normalized_case();
    }

    let pipeline = AnalysisPipeline::new(
        Router::new(config.threshold),
        Arc::new(LexiconScorer::new()?),
        extractor,
        Arc::new(model),
        vocabulary,
    )
    .with_failure_policy(config.on_scorer_error);

    let reviews = corpus::load_reviews(Path::new(&config.reviews))
        .with_context(|| format!("failed to load reviews from {}", config.reviews))?;

    Ok(pipeline.analyze(reviews).await?)
}
