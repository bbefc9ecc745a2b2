//! Sentiscope command-line entry point.
//!
//! Loads the review corpus and classifier artifacts, routes every review
//! through the analysis pipeline, and prints the aggregate sentiment report
//! to stdout.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sentiscope_cli::cli::Cli;
use sentiscope_cli::config::AnalyzerConfig;
use sentiscope_cli::{analyze_corpus, report};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = AnalyzerConfig::load(&cli.config, &cli)?;

    tracing::info!(
        reviews = %config.reviews,
        vocabulary = %config.vocabulary,
        model = %config.model,
        threshold = config.threshold,
        "starting sentiscope"
    );

    let analysis = analyze_corpus(&config).await?;
    print!("{}", report::render(&analysis));

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sentiscope=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sentiscope=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
