//! Batch review classifier trait

use async_trait::async_trait;
use sentiscope_core::{FeatureVector, Label, Result};

/// Trait for pretrained classifiers used on the long-review path.
///
/// Implementations receive the complete batch in one call and must return
/// one label per input vector, order-preserved. An empty batch is a no-op
/// returning an empty label sequence.
#[async_trait]
pub trait ReviewClassifier: Send + Sync {
    /// Classify a batch of feature vectors
    async fn classify_batch(&self, batch: &[FeatureVector]) -> Result<Vec<Label>>;

    /// Get the classifier name
    fn name(&self) -> &str;
}
