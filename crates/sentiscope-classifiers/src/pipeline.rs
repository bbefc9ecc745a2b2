//! Dual-path analysis pipeline
//!
//! Routes each review to the lexicon scorer (short) or the bigram
//! classifier (long), accumulates corpus statistics across both paths, and
//! finalizes the analysis report. The classifier is invoked exactly once,
//! with the complete long-review batch; zero long reviews mean it is never
//! invoked at all.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sentiscope_core::{AnalysisReport, CorpusStats, Error, FeatureVocabulary, Result, Review};
use tracing::{debug, info, warn};

use crate::classifier::ReviewClassifier;
use crate::features::FeatureExtractor;
use crate::router::Router;
use crate::scorer::PolarityScorer;

/// What to do when the lexicon scorer fails on a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorerFailurePolicy {
    /// Fail the whole run
    Abort,

    /// Log a warning and leave the review out of all counts
    Skip,
}

impl Default for ScorerFailurePolicy {
    fn default() -> Self {
        Self::Abort
    }
}

impl std::str::FromStr for ScorerFailurePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(Error::config(format!(
                "unknown scorer failure policy '{other}', expected 'abort' or 'skip'"
            ))),
        }
    }
}

/// End-to-end analyzer for one review corpus
pub struct AnalysisPipeline {
    router: Router,
    scorer: Arc<dyn PolarityScorer>,
    extractor: FeatureExtractor,
    classifier: Arc<dyn ReviewClassifier>,
    vocabulary: FeatureVocabulary,
    failure_policy: ScorerFailurePolicy,
}

impl AnalysisPipeline {
    /// Assemble a pipeline; scorer failures abort by default
    pub fn new(
        router: Router,
        scorer: Arc<dyn PolarityScorer>,
        extractor: FeatureExtractor,
        classifier: Arc<dyn ReviewClassifier>,
        vocabulary: FeatureVocabulary,
    ) -> Self {
        Self {
            router,
            scorer,
            extractor,
            classifier,
            vocabulary,
            failure_policy: ScorerFailurePolicy::default(),
        }
    }

    /// Override the scorer failure policy
    pub fn with_failure_policy(mut self, policy: ScorerFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Analyze a corpus and produce the final report.
    ///
    /// Every review is consumed by exactly one path. Fatal errors abort
    /// the run before any report exists; with the `skip` policy, scorer
    /// failures exclude the affected reviews from all counts instead.
    pub async fn analyze(&self, reviews: Vec<Review>) -> Result<AnalysisReport> {
        let total = reviews.len();
        let (short, long) = self.router.partition(reviews);
        info!(
            total,
            short = short.len(),
            long = long.len(),
            threshold = self.router.threshold(),
            "routed reviews"
        );
        let short_count = short.len();
        let long_count = long.len();

        let mut stats = CorpusStats::new();
        let mut skipped = 0usize;
        for review in &short {
            let text = review.joined();
            match self.scorer.score(&text).await {
                Ok(score) => stats.record_score(score, &text),
                Err(err) => match self.failure_policy {
                    ScorerFailurePolicy::Abort => return Err(err),
                    ScorerFailurePolicy::Skip => {
                        skipped += 1;
                        warn!(scorer = self.scorer.name(), error = %err, "scorer failed, skipping review");
                    }
                },
            }
        }

        if long.is_empty() {
            debug!("no long reviews, classifier not invoked");
        } else {
            let vectors = self.extractor.extract_batch(&long, &self.vocabulary);
            for vector in &vectors {
                if vector.len() != self.vocabulary.len() {
                    return Err(Error::feature(format!(
                        "feature vector has {} entries for a {}-bigram vocabulary",
                        vector.len(),
                        self.vocabulary.len()
                    )));
                }
            }
            debug!(reviews = vectors.len(), "feature map created");

            let labels = self.classifier.classify_batch(&vectors).await?;
            if labels.len() != vectors.len() {
                return Err(Error::model(format!(
                    "classifier returned {} labels for {} reviews",
                    labels.len(),
                    vectors.len()
                )));
            }
            for label in labels {
                stats.record_label(label);
            }
        }

        if skipped > 0 {
            warn!(skipped, "reviews excluded after scorer failures");
        }

        let report = AnalysisReport::from_stats(stats, short_count, long_count);
        info!(
            analyzed = report.total_analyzed,
            positive = report.total_positive,
            negative = report.total_negative,
            neutral = report.neutral,
            overall = report.overall.as_str(),
            "analysis complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwords::StopwordSet;
    use async_trait::async_trait;
    use sentiscope_core::{Bigram, FeatureVector, Label, Overall, PolarityScore};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Scorer that maps exact texts to fixed scores, zero otherwise
    struct MockScorer {
        scores: HashMap<String, PolarityScore>,
    }

    impl MockScorer {
        fn new(entries: &[(&str, f64, f64)]) -> Self {
            let scores = entries
                .iter()
                .map(|(text, positive, negative)| {
                    (
                        text.to_string(),
                        PolarityScore {
                            positive: *positive,
                            negative: *negative,
                            neutral: 1.0 - positive - negative,
                            compound: positive - negative,
                        },
                    )
                })
                .collect();
            Self { scores }
        }
    }

    #[async_trait]
    impl PolarityScorer for MockScorer {
        async fn score(&self, text: &str) -> Result<PolarityScore> {
            Ok(self
                .scores
                .get(text)
                .copied()
                .unwrap_or(PolarityScore::zero()))
        }

        fn name(&self) -> &str {
            "mock-scorer"
        }
    }

    struct FailingScorer;

    #[async_trait]
    impl PolarityScorer for FailingScorer {
        async fn score(&self, _text: &str) -> Result<PolarityScore> {
            Err(Error::scorer("mock failure"))
        }

        fn name(&self) -> &str {
            "failing-scorer"
        }
    }

    // Classifier that labels by the first feature flag and counts calls
    struct MockBatchClassifier {
        calls: AtomicUsize,
        truncate: bool,
    }

    impl MockBatchClassifier {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                truncate: false,
            }
        }

        fn truncating() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                truncate: true,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ReviewClassifier for MockBatchClassifier {
        async fn classify_batch(&self, batch: &[FeatureVector]) -> Result<Vec<Label>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut labels: Vec<Label> = batch
                .iter()
                .map(|vector| {
                    if vector.any_present() {
                        Label::Pos
                    } else {
                        Label::Neg
                    }
                })
                .collect();
            if self.truncate {
                labels.pop();
            }
            Ok(labels)
        }

        fn name(&self) -> &str {
            "mock-batch"
        }
    }

    fn vocabulary() -> FeatureVocabulary {
        FeatureVocabulary::new(vec![Bigram::new("good", "movie")]).unwrap()
    }

    fn pipeline(
        threshold: usize,
        scorer: Arc<dyn PolarityScorer>,
        classifier: Arc<dyn ReviewClassifier>,
    ) -> AnalysisPipeline {
        AnalysisPipeline::new(
            Router::new(threshold),
            scorer,
            FeatureExtractor::new(StopwordSet::default_english()),
            classifier,
            vocabulary(),
        )
    }

    fn corpus(lines: &[&str]) -> Vec<Review> {
        lines.iter().map(|line| Review::from_line(line)).collect()
    }

    #[tokio::test]
    async fn test_both_paths_feed_the_report() {
        let scorer = Arc::new(MockScorer::new(&[("bad", 0.0, 0.8), ("fine", 0.7, 0.1)]));
        let classifier = Arc::new(MockBatchClassifier::new());
        let pipeline = pipeline(3, scorer, classifier.clone());

        let reviews = corpus(&[
            "bad",
            "fine",
            "what a good movie this is",
            "dreary plot nothing else works",
        ]);
        let report = pipeline.analyze(reviews).await.unwrap();

        assert_eq!(report.short_reviews, 2);
        assert_eq!(report.long_reviews, 2);
        assert_eq!(report.total_positive, 2);
        assert_eq!(report.total_negative, 2);
        assert_eq!(report.neutral, 0);
        assert_eq!(report.total_analyzed, 4);
        assert_eq!(report.overall, Overall::Negative);
        assert_eq!(classifier.call_count(), 1);
    }

    #[tokio::test]
    async fn test_short_review_updates_exemplars() {
        let scorer = Arc::new(MockScorer::new(&[("bad", 0.0, 0.8)]));
        let pipeline = pipeline(5, scorer, Arc::new(MockBatchClassifier::new()));

        let report = pipeline.analyze(corpus(&["bad"])).await.unwrap();

        assert_eq!(report.total_negative, 1);
        let exemplar = report.max_negative.unwrap();
        assert_eq!(exemplar.score, 0.8);
        assert_eq!(exemplar.text, "bad");
        assert!(report.max_positive.is_none());
    }

    #[tokio::test]
    async fn test_zero_long_reviews_never_invokes_classifier() {
        let scorer = Arc::new(MockScorer::new(&[]));
        let classifier = Arc::new(MockBatchClassifier::new());
        let pipeline = pipeline(100, scorer, classifier.clone());

        let report = pipeline.analyze(corpus(&["short one", "short two"])).await.unwrap();

        assert_eq!(classifier.call_count(), 0);
        assert_eq!(report.long_reviews, 0);
        assert_eq!(report.neutral, 2);
    }

    #[tokio::test]
    async fn test_partial_batch_is_a_model_error() {
        let scorer = Arc::new(MockScorer::new(&[]));
        let classifier = Arc::new(MockBatchClassifier::truncating());
        let pipeline = pipeline(1, scorer, classifier);

        let err = pipeline
            .analyze(corpus(&["good movie overall", "bad film overall"]))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Model(_)));
    }

    #[tokio::test]
    async fn test_scorer_failure_aborts_by_default() {
        let pipeline = pipeline(5, Arc::new(FailingScorer), Arc::new(MockBatchClassifier::new()));
        let err = pipeline.analyze(corpus(&["bad"])).await.unwrap_err();
        assert!(matches!(err, Error::Scorer(_)));
    }

    #[tokio::test]
    async fn test_skip_policy_excludes_failed_reviews_from_counts() {
        let pipeline = pipeline(5, Arc::new(FailingScorer), Arc::new(MockBatchClassifier::new()))
            .with_failure_policy(ScorerFailurePolicy::Skip);

        let report = pipeline.analyze(corpus(&["bad", "fine"])).await.unwrap();

        assert_eq!(report.total_analyzed, 0);
        assert_eq!(report.short_reviews, 2);
        assert_eq!(report.overall, Overall::Negative);
    }

    #[tokio::test]
    async fn test_counts_are_conserved_across_paths() {
        let scorer = Arc::new(MockScorer::new(&[("bad", 0.0, 0.8), ("fine", 0.7, 0.1)]));
        let pipeline = pipeline(3, scorer, Arc::new(MockBatchClassifier::new()));

        let reviews = corpus(&[
            "bad",
            "fine",
            "meh",
            "what a good movie this is",
            "dreary plot nothing else works",
        ]);
        let total = reviews.len();
        let report = pipeline.analyze(reviews).await.unwrap();

        assert_eq!(
            report.total_positive + report.total_negative + report.neutral,
            total
        );
        assert_eq!(report.total_analyzed, total);
    }

    #[tokio::test]
    async fn test_empty_corpus_degrades_gracefully() {
        let scorer = Arc::new(MockScorer::new(&[]));
        let classifier = Arc::new(MockBatchClassifier::new());
        let pipeline = pipeline(3, scorer, classifier.clone());

        let report = pipeline.analyze(Vec::new()).await.unwrap();

        assert_eq!(report.total_analyzed, 0);
        assert_eq!(report.overall, Overall::Negative);
        assert!(report.max_positive.is_none());
        assert!(report.max_negative.is_none());
        assert_eq!(classifier.call_count(), 0);
    }

    #[tokio::test]
    async fn test_rerun_yields_identical_report() {
        let scorer = Arc::new(MockScorer::new(&[("bad", 0.0, 0.8)]));
        let pipeline = pipeline(3, scorer, Arc::new(MockBatchClassifier::new()));

        let reviews = corpus(&["bad", "what a good movie this is"]);
        let first = pipeline.analyze(reviews.clone()).await.unwrap();
        let second = pipeline.analyze(reviews).await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_failure_policy_parses_from_str() {
        assert_eq!(
            "abort".parse::<ScorerFailurePolicy>().unwrap(),
            ScorerFailurePolicy::Abort
        );
        assert_eq!(
            "skip".parse::<ScorerFailurePolicy>().unwrap(),
            ScorerFailurePolicy::Skip
        );
        assert!("ignore".parse::<ScorerFailurePolicy>().is_err());
    }
}
