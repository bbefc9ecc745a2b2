//! Command-line arguments

use clap::Parser;

/// Flags and overrides accepted by the `sentiscope` binary.
///
/// Every artifact path can come from the configuration file; flags given
/// here win over the file.
#[derive(Parser, Debug)]
#[command(name = "sentiscope")]
#[command(about = "Batch sentiment analyzer for review corpora", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "sentiscope.yaml")]
    pub config: String,

    /// Review corpus, one review per line
    #[arg(short, long)]
    pub reviews: Option<String>,

    /// Bigram vocabulary file
    #[arg(long)]
    pub vocabulary: Option<String>,

    /// Naive Bayes model artifact
    #[arg(short, long)]
    pub model: Option<String>,

    /// Stopword list replacing the built-in English set
    #[arg(long)]
    pub stopwords: Option<String>,

    /// Name list merged into the stopword set
    #[arg(long)]
    pub names: Option<String>,

    /// Word-count threshold separating short reviews from long ones
    #[arg(short, long)]
    pub threshold: Option<usize>,

    /// Lowercase tokens before stopword filtering
    #[arg(long)]
    pub normalize_case: bool,

    /// Policy when the lexicon scorer fails: abort or skip
    #[arg(long)]
    pub on_scorer_error: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
