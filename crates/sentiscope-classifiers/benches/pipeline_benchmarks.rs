//! Throughput benchmarks for the analysis pipeline
//!
//! Covers the hot paths: lexicon scoring for short reviews, bigram feature
//! extraction for long reviews, batch classification, and the end-to-end
//! pipeline.
//!
//! Run with: cargo bench -p sentiscope-classifiers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use tokio::runtime::Runtime;

use sentiscope_classifiers::bayes::{BigramNaiveBayes, ClassLikelihoods, ModelArtifact};
use sentiscope_classifiers::{
    AnalysisPipeline, FeatureExtractor, LexiconScorer, PolarityScorer, ReviewClassifier, Router,
    StopwordSet,
};
use sentiscope_core::{Bigram, FeatureVector, FeatureVocabulary, Review};

fn synthetic_tokens(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("word{}", i % 40)).collect()
}

fn synthetic_vocabulary(size: usize) -> FeatureVocabulary {
    let bigrams = (0..size)
        .map(|i| {
            if i < 39 {
                Bigram::new(format!("word{i}"), format!("word{}", i + 1))
            } else {
                Bigram::new(format!("rare{i}"), format!("rare{i}x"))
            }
        })
        .collect();
    FeatureVocabulary::new(bigrams).expect("synthetic vocabulary is duplicate-free")
}

fn synthetic_model(vocabulary: &FeatureVocabulary) -> BigramNaiveBayes {
    let n = vocabulary.len();
    let artifact = ModelArtifact {
        classes: vec!["pos".to_string(), "neg".to_string()],
        log_priors: vec![0.5f64.ln(), 0.5f64.ln()],
        features: vocabulary.bigrams().to_vec(),
        likelihoods: vec![
            ClassLikelihoods {
                present: vec![0.7f64.ln(); n],
                absent: vec![0.3f64.ln(); n],
            },
            ClassLikelihoods {
                present: vec![0.2f64.ln(); n],
                absent: vec![0.8f64.ln(); n],
            },
        ],
    };
    BigramNaiveBayes::from_artifact(artifact, vocabulary).expect("synthetic model is valid")
}

/// Benchmark the lexicon scorer on typical short reviews
fn benchmark_lexicon_scorer(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let scorer = LexiconScorer::new().expect("Failed to create lexicon scorer");

    let test_cases = vec![
        ("short_positive", "a great movie, truly wonderful"),
        ("short_negative", "boring and predictable, a total mess"),
        ("short_neutral", "the plot follows a detective in a city"),
        (
            "medium_mixed",
            "the first act is a masterpiece but the ending falls flat, not good at all \
             despite some stunning photography and a superb lead performance",
        ),
    ];

    let mut group = c.benchmark_group("Lexicon_Scorer");
    group.sample_size(100);

    for (name, text) in test_cases {
        group.bench_with_input(BenchmarkId::new("score", name), &text, |b, text| {
            b.iter(|| rt.block_on(async { scorer.score(black_box(text)).await.unwrap() }));
        });
    }

    group.finish();
}

/// Benchmark feature extraction across review lengths
fn benchmark_feature_extraction(c: &mut Criterion) {
    let vocabulary = synthetic_vocabulary(500);
    let extractor = FeatureExtractor::new(StopwordSet::default_english());

    let mut group = c.benchmark_group("Feature_Extraction");
    group.sample_size(100);

    for tokens in [50usize, 250, 1000] {
        let review = Review::from_tokens(synthetic_tokens(tokens));
        group.bench_with_input(BenchmarkId::new("extract", tokens), &review, |b, review| {
            b.iter(|| extractor.extract(black_box(review), &vocabulary));
        });
    }

    group.finish();
}

/// Benchmark single-call batch classification
fn benchmark_batch_classification(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let vocabulary = synthetic_vocabulary(500);
    let extractor = FeatureExtractor::new(StopwordSet::default_english());
    let model = synthetic_model(&vocabulary);

    let vector = extractor.extract(&Review::from_tokens(synthetic_tokens(250)), &vocabulary);

    let mut group = c.benchmark_group("Batch_Classification");
    group.sample_size(100);

    for batch_size in [10usize, 100] {
        let batch: Vec<FeatureVector> = vec![vector.clone(); batch_size];
        group.bench_with_input(
            BenchmarkId::new("classify_batch", batch_size),
            &batch,
            |b, batch| {
                b.iter(|| {
                    rt.block_on(async { model.classify_batch(black_box(batch)).await.unwrap() })
                });
            },
        );
    }

    group.finish();
}

/// End-to-end pipeline benchmark over a mixed corpus
fn benchmark_full_pipeline(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let vocabulary = synthetic_vocabulary(500);

    let scorer: Arc<dyn PolarityScorer> =
        Arc::new(LexiconScorer::new().expect("Failed to create lexicon scorer"));
    let classifier: Arc<dyn ReviewClassifier> = Arc::new(synthetic_model(&vocabulary));
    let pipeline = AnalysisPipeline::new(
        Router::new(200),
        scorer,
        FeatureExtractor::new(StopwordSet::default_english()),
        classifier,
        vocabulary,
    );

    let corpus: Vec<Review> = (0..100)
        .map(|i| {
            if i % 2 == 0 {
                Review::from_line("loved it, a superb and memorable film")
            } else {
                Review::from_tokens(synthetic_tokens(250))
            }
        })
        .collect();

    let mut group = c.benchmark_group("Full_Pipeline");
    group.sample_size(50);

    group.bench_function("analyze_100_reviews", |b| {
        b.iter(|| {
            rt.block_on(async { pipeline.analyze(black_box(corpus.clone())).await.unwrap() })
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_lexicon_scorer,
    benchmark_feature_extraction,
    benchmark_batch_classification,
    benchmark_full_pipeline
);
criterion_main!(benches);
