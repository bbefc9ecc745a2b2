//! Analyzer configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use sentiscope_classifiers::ScorerFailurePolicy;

use crate::cli::Cli;

/// Analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Review corpus path, one review per line
    pub reviews: String,

    /// Bigram vocabulary file path
    pub vocabulary: String,

    /// Naive Bayes model artifact path
    pub model: String,

    /// Stopword list replacing the built-in English set
    #[serde(default)]
    pub stopwords: Option<String>,

    /// Name list merged into the stopword set
    #[serde(default)]
    pub names: Option<String>,

    /// Word-count threshold separating short reviews from long ones
    #[serde(default = "default_threshold")]
    pub threshold: usize,

    /// Lowercase tokens before stopword filtering
    #[serde(default)]
    pub normalize_case: bool,

    /// Policy when the lexicon scorer fails
    #[serde(default)]
    pub on_scorer_error: ScorerFailurePolicy,
}

impl AnalyzerConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, cli: &Cli) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        // Apply CLI overrides
        if let Some(reviews) = &cli.reviews {
            config.reviews = reviews.clone();
        }

        if let Some(vocabulary) = &cli.vocabulary {
            config.vocabulary = vocabulary.clone();
        }

        if let Some(model) = &cli.model {
            config.model = model.clone();
        }

        if let Some(stopwords) = &cli.stopwords {
            config.stopwords = Some(stopwords.clone());
        }

        if let Some(names) = &cli.names {
            config.names = Some(names.clone());
        }

        if let Some(threshold) = cli.threshold {
            config.threshold = threshold;
        }

        if cli.normalize_case {
            config.normalize_case = true;
        }

        if let Some(policy) = &cli.on_scorer_error {
            config.on_scorer_error = policy.parse()?;
        }

        Ok(config)
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            reviews: "reviews.txt".to_string(),
            vocabulary: "bigram_features.txt".to_string(),
            model: "naive_bayes.json".to_string(),
            stopwords: None,
            names: None,
            threshold: default_threshold(),
            normalize_case: false,
            on_scorer_error: ScorerFailurePolicy::default(),
        }
    }
}

fn default_threshold() -> usize {
    200
}
