//! Review corpus loading

use std::path::Path;

use tracing::info;

use sentiscope_core::{Error, Result, Review};

/// Read a review corpus, one review per line.
///
/// Blank lines are kept: an empty review still routes through the short
/// path and lands in the neutral bucket.
pub fn load_reviews(path: &Path) -> Result<Vec<Review>> {
    if !path.exists() {
        return Err(Error::artifact(format!(
            "review corpus not found: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let reviews: Vec<Review> = content.lines().map(Review::from_line).collect();

    info!(count = reviews.len(), path = %path.display(), "loaded review corpus");

    Ok(reviews)
}
