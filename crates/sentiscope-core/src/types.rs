//! Core types for Sentiscope

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single review as an ordered sequence of whitespace-split tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Tokens in original order
    pub tokens: Vec<String>,
}

impl Review {
    /// Create a review by whitespace-splitting one line of raw input
    pub fn from_line(line: &str) -> Self {
        Self {
            tokens: line.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// Create a review from pre-split tokens
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Number of tokens in this review
    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }

    /// Space-joined text, the form scorers receive and exemplars store
    pub fn joined(&self) -> String {
        self.tokens.join(" ")
    }
}

/// An ordered pair of adjacent tokens
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bigram(pub String, pub String);

impl Bigram {
    /// Create a new bigram
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self(first.into(), second.into())
    }
}

impl std::fmt::Display for Bigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "('{}', '{}')", self.0, self.1)
    }
}

/// The fixed, externally-trained ordered set of bigram features.
///
/// The order of bigrams is a stable contract: every feature vector is
/// aligned index-for-index with it, and classifier models are validated
/// against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVocabulary {
    bigrams: Vec<Bigram>,
}

impl FeatureVocabulary {
    /// Build a vocabulary from ordered bigrams, rejecting duplicates
    pub fn new(bigrams: Vec<Bigram>) -> Result<Self> {
        let mut seen = std::collections::HashSet::with_capacity(bigrams.len());
        for bigram in &bigrams {
            if !seen.insert(bigram) {
                return Err(Error::vocabulary(format!("duplicate bigram {bigram}")));
            }
        }
        Ok(Self { bigrams })
    }

    /// Number of bigram features
    pub fn len(&self) -> usize {
        self.bigrams.len()
    }

    /// Whether the vocabulary holds no features
    pub fn is_empty(&self) -> bool {
        self.bigrams.is_empty()
    }

    /// Bigrams in vocabulary order
    pub fn bigrams(&self) -> &[Bigram] {
        &self.bigrams
    }
}

/// Boolean feature-presence flags aligned index-for-index with a vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector {
    /// One flag per vocabulary bigram, in vocabulary order
    pub flags: Vec<bool>,
}

impl FeatureVector {
    /// Create a feature vector from ordered flags
    pub fn new(flags: Vec<bool>) -> Self {
        Self { flags }
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether the vector holds no features
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Whether any feature is present
    pub fn any_present(&self) -> bool {
        self.flags.iter().any(|&f| f)
    }
}

/// Structured output of the lexicon scorer.
///
/// `positive`, `negative`, and `neutral` are proportions in [0, 1] summing
/// to roughly 1; `compound` is a normalized aggregate in [-1, 1]. The
/// pipeline reads only the positive and negative components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScore {
    /// Positive proportion
    pub positive: f64,

    /// Negative proportion
    pub negative: f64,

    /// Neutral proportion
    pub neutral: f64,

    /// Normalized aggregate valence
    pub compound: f64,
}

impl PolarityScore {
    /// The all-zero score, what empty text scores
    pub fn zero() -> Self {
        Self {
            positive: 0.0,
            negative: 0.0,
            neutral: 0.0,
            compound: 0.0,
        }
    }

    /// Whether positive and negative components are exactly equal
    pub fn is_tie(&self) -> bool {
        self.positive == self.negative
    }
}

/// Classifier output label for the bigram path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Positive sentiment
    Pos,
    /// Negative sentiment
    Neg,
}

impl Label {
    /// Wire form of the label
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Pos => "pos",
            Label::Neg => "neg",
        }
    }
}

impl std::str::FromStr for Label {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pos" => Ok(Label::Pos),
            "neg" => Ok(Label::Neg),
            other => Err(Error::model(format!("unknown label '{other}'"))),
        }
    }
}
