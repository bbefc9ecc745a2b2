//! Naive Bayes batch classifier over boolean bigram features
//!
//! The model is trained externally and shipped as a JSON artifact holding
//! log-priors and per-class log-likelihood tables for feature presence and
//! absence. Loading validates the artifact's shape and its alignment with
//! the feature vocabulary before any classification happens.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sentiscope_core::{Bigram, Error, FeatureVector, FeatureVocabulary, Label, Result};
use tracing::{debug, info};

use crate::classifier::ReviewClassifier;

/// Serialized form of a trained model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Class labels in artifact order
    pub classes: Vec<String>,

    /// Log prior per class
    pub log_priors: Vec<f64>,

    /// Feature bigrams, which must match the vocabulary order exactly
    pub features: Vec<Bigram>,

    /// Log-likelihood tables, one per class
    pub likelihoods: Vec<ClassLikelihoods>,
}

/// Per-class log-likelihoods, one entry per feature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassLikelihoods {
    /// log P(feature present | class)
    pub present: Vec<f64>,

    /// log P(feature absent | class)
    pub absent: Vec<f64>,
}

/// Pretrained binary Naive Bayes classifier for long reviews
#[derive(Debug)]
pub struct BigramNaiveBayes {
    name: String,
    labels: Vec<Label>,
    log_priors: Vec<f64>,
    likelihoods: Vec<ClassLikelihoods>,
    feature_count: usize,
}

impl BigramNaiveBayes {
    /// Load a model artifact from disk and validate it against the vocabulary
    pub fn from_file(path: &Path, vocabulary: &FeatureVocabulary) -> Result<Self> {
        if !path.exists() {
            return Err(Error::artifact(format!(
                "model artifact not found: {}",
                path.display()
            )));
        }
        info!(path = %path.display(), "loading classifier model");
        let content = std::fs::read_to_string(path)?;
        let artifact: ModelArtifact = serde_json::from_str(&content)
            .map_err(|e| Error::model(format!("malformed model artifact: {e}")))?;
        Self::from_artifact(artifact, vocabulary)
    }

    /// Validate an artifact's shape and vocabulary alignment
    pub fn from_artifact(artifact: ModelArtifact, vocabulary: &FeatureVocabulary) -> Result<Self> {
        let labels = artifact
            .classes
            .iter()
            .map(|class| class.parse::<Label>())
            .collect::<Result<Vec<_>>>()?;
        if labels.len() != 2 || labels[0] == labels[1] {
            return Err(Error::model(format!(
                "class set must be exactly pos and neg, got {:?}",
                artifact.classes
            )));
        }
        if artifact.log_priors.len() != labels.len() {
            return Err(Error::model(format!(
                "expected {} log-priors, got {}",
                labels.len(),
                artifact.log_priors.len()
            )));
        }
        if artifact.likelihoods.len() != labels.len() {
            return Err(Error::model(format!(
                "expected {} likelihood tables, got {}",
                labels.len(),
                artifact.likelihoods.len()
            )));
        }
        if artifact.features.as_slice() != vocabulary.bigrams() {
            return Err(Error::model(
                "model features do not match the loaded vocabulary",
            ));
        }
        let feature_count = artifact.features.len();
        for (class, table) in artifact.classes.iter().zip(&artifact.likelihoods) {
            if table.present.len() != feature_count || table.absent.len() != feature_count {
                return Err(Error::model(format!(
                    "likelihood table for class '{class}' does not cover all {feature_count} features"
                )));
            }
        }

        info!(features = feature_count, "classifier model validated");
        Ok(Self {
            name: "bigram-naive-bayes".to_string(),
            labels,
            log_priors: artifact.log_priors,
            likelihoods: artifact.likelihoods,
            feature_count,
        })
    }

    /// Argmax over per-class log-posteriors; ties keep the first class
    fn classify_one(&self, vector: &FeatureVector) -> Result<Label> {
        if vector.len() != self.feature_count {
            return Err(Error::model(format!(
                "feature vector has {} entries, model expects {}",
                vector.len(),
                self.feature_count
            )));
        }

        let mut best: Option<(Label, f64)> = None;
        for (i, &label) in self.labels.iter().enumerate() {
            let table = &self.likelihoods[i];
            let mut log_prob = self.log_priors[i];
            for (j, &present) in vector.flags.iter().enumerate() {
                log_prob += if present {
                    table.present[j]
                } else {
                    table.absent[j]
                };
            }
            match best {
                Some((_, top)) if log_prob <= top => {}
                _ => best = Some((label, log_prob)),
            }
        }
        best.map(|(label, _)| label)
            .ok_or_else(|| Error::model("model has no classes"))
    }
}

#[async_trait]
impl ReviewClassifier for BigramNaiveBayes {
    async fn classify_batch(&self, batch: &[FeatureVector]) -> Result<Vec<Label>> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }
        let mut labels = Vec::with_capacity(batch.len());
        for vector in batch {
            labels.push(self.classify_one(vector)?);
        }
        debug!(batch = labels.len(), "classified feature vector batch");
        Ok(labels)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
