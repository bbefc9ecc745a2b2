//! Polarity scorer trait

use async_trait::async_trait;
use sentiscope_core::{PolarityScore, Result};

/// Trait for lexicon-style polarity scorers used on the short-review path
#[async_trait]
pub trait PolarityScorer: Send + Sync {
    /// Score the given text
    async fn score(&self, text: &str) -> Result<PolarityScore>;

    /// Get the scorer name
    fn name(&self) -> &str;
}
