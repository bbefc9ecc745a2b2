//! Error types for Sentiscope

/// Result type alias using Sentiscope's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Sentiscope operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input artifact is missing or unreadable
    #[error("artifact error: {0}")]
    Artifact(String),

    /// The feature vocabulary file is malformed
    #[error("vocabulary error: {0}")]
    Vocabulary(String),

    /// The classifier model artifact is malformed or inconsistent
    #[error("model error: {0}")]
    Model(String),

    /// The lexicon scorer failed to produce a score
    #[error("scorer error: {0}")]
    Scorer(String),

    /// Feature extraction failed (programming-error class)
    #[error("feature extraction error: {0}")]
    Feature(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// File IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new artifact error
    pub fn artifact(msg: impl Into<String>) -> Self {
        Self::Artifact(msg.into())
    }

    /// Create a new vocabulary error
    pub fn vocabulary(msg: impl Into<String>) -> Self {
        Self::Vocabulary(msg.into())
    }

    /// Create a new model error
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Create a new scorer error
    pub fn scorer(msg: impl Into<String>) -> Self {
        Self::Scorer(msg.into())
    }

    /// Create a new feature extraction error
    pub fn feature(msg: impl Into<String>) -> Self {
        Self::Feature(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
