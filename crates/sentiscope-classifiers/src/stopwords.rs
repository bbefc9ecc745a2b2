//! Stopword sets for token filtering

use std::collections::HashSet;
use std::path::Path;

use sentiscope_core::{Error, Result};
use tracing::{debug, info};

/// Default English stopword list, lowercase
const DEFAULT_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// The set of tokens removed before bigram construction.
///
/// Entries are stored lowercase. Membership checks are literal: a
/// capitalized review token does not match its lowercase entry. Callers
/// wanting case-insensitive filtering normalize tokens before asking
/// (see the feature extractor's `normalize_case` switch).
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The embedded default English list
    pub fn default_english() -> Self {
        Self {
            words: DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Build a set from explicit words, lowercasing each entry
    pub fn from_words(words: impl IntoIterator<Item = String>) -> Self {
        Self {
            words: words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Load a replacement list from a file, one word per line.
    ///
    /// Entries are trimmed and lowercased; blank lines are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = read_word_file(path, "stopword")?;
        let set = Self::from_words(content);
        debug!(words = set.len(), path = %path.display(), "loaded stopword list");
        Ok(set)
    }

    /// Merge a name-list file into this set, lowercasing each entry.
    ///
    /// Returns the number of entries read from the file.
    pub fn extend_with_names(&mut self, path: &Path) -> Result<usize> {
        let names = read_word_file(path, "name list")?;
        let count = names.len();
        self.words.extend(names.into_iter().map(|n| n.to_lowercase()));
        info!(names = count, path = %path.display(), "merged name list into stopwords");
        Ok(count)
    }

    /// Literal membership check
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn read_word_file(path: &Path, kind: &str) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(Error::artifact(format!(
            "{kind} file not found: {}",
            path.display()
        )));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}
