//! Report rendering
//!
//! Turns a finished [`AnalysisReport`] into the human-readable summary
//! printed on stdout. Rendering is pure so tests can assert on the output
//! without capturing the terminal.

use sentiscope_core::{AnalysisReport, Exemplar};

const NO_DATA: &str = "no data";

/// Render the final summary, one value per line.
pub fn render(report: &AnalysisReport) -> String {
    let mut lines = vec![
        "Sentiment analysis started".to_string(),
        format!("Total analyzed reviews: {}", report.total_analyzed),
        format!("Short reviews scored by lexicon: {}", report.short_reviews),
        format!("Long reviews classified in batch: {}", report.long_reviews),
        format!("Total positive reviews: {}", report.total_positive),
        format!("Total negative reviews: {}", report.total_negative),
        format!("Overall: {}", report.overall.as_str()),
    ];

    push_exemplar(
        &mut lines,
        "Max positive score",
        "Most positive short review",
        report.max_positive.as_ref(),
    );
    push_exemplar(
        &mut lines,
        "Max negative score",
        "Most negative short review",
        report.max_negative.as_ref(),
    );

    lines.push("Sentiment analysis complete".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn push_exemplar(
    lines: &mut Vec<String>,
    score_label: &str,
    text_label: &str,
    exemplar: Option<&Exemplar>,
) {
    match exemplar {
        Some(exemplar) => {
            lines.push(format!("{score_label}: {:.4}", exemplar.score));
            lines.push(format!("{text_label}: {}", exemplar.text));
        }
        None => {
            lines.push(format!("{score_label}: {NO_DATA}"));
            lines.push(format!("{text_label}: {NO_DATA}"));
        }
    }
}
