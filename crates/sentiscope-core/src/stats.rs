//! Corpus statistics accumulation and the final analysis report

use serde::{Deserialize, Serialize};

use crate::types::{Label, PolarityScore};

/// The single review achieving the highest observed score for one polarity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exemplar {
    /// The winning score
    pub score: f64,

    /// Space-joined text of the winning review
    pub text: String,
}

/// Overall corpus sentiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overall {
    /// Strictly more positive than negative reviews
    Positive,
    /// Everything else, ties included
    Negative,
}

impl Overall {
    /// Human-readable label
    pub fn as_str(&self) -> &'static str {
        match self {
            Overall::Positive => "Positive",
            Overall::Negative => "Negative",
        }
    }
}

/// Running statistics accumulated while scoring a corpus.
///
/// Counts and exemplars grow incrementally on the short path and once from
/// the batch labels on the long path. Exemplar slots start empty and are
/// claimed only by strictly increasing scores (from a 0.0 floor), so the
/// first review to reach a given score keeps it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Reviews scored positive
    pub positive: usize,

    /// Reviews scored negative
    pub negative: usize,

    /// Reviews scored neutral (positive/negative tie)
    pub neutral: usize,

    /// Highest positive score seen, with its review text
    pub max_positive: Option<Exemplar>,

    /// Highest negative score seen, with its review text
    pub max_negative: Option<Exemplar>,
}

impl CorpusStats {
    /// Empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one short review's polarity score.
    ///
    /// Exemplar updates and sign counting are independent: a review can
    /// claim an exemplar slot and still count as neutral. A tie between the
    /// positive and negative components counts as neutral only.
    pub fn record_score(&mut self, score: PolarityScore, text: &str) {
        if score.positive > Self::floor(&self.max_positive) {
            self.max_positive = Some(Exemplar {
                score: score.positive,
                text: text.to_owned(),
            });
        }
        if score.negative > Self::floor(&self.max_negative) {
            self.max_negative = Some(Exemplar {
                score: score.negative,
                text: text.to_owned(),
            });
        }

        if score.is_tie() {
            self.neutral += 1;
        } else if score.positive > score.negative {
            self.positive += 1;
        } else {
            self.negative += 1;
        }
    }

    /// Record one long review's classifier label
    pub fn record_label(&mut self, label: Label) {
        match label {
            Label::Pos => self.positive += 1,
            Label::Neg => self.negative += 1,
        }
    }

    /// Total reviews that contributed to any count
    pub fn total_classified(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Merge another partial accumulator into this one.
    ///
    /// Sums add; exemplars keep the strictly higher score, ties keeping
    /// `self` (the earlier operand), so merging partials in any association
    /// matches sequential accumulation.
    pub fn merge(&mut self, other: CorpusStats) {
        self.positive += other.positive;
        self.negative += other.negative;
        self.neutral += other.neutral;
        self.max_positive = Self::merge_exemplar(self.max_positive.take(), other.max_positive);
        self.max_negative = Self::merge_exemplar(self.max_negative.take(), other.max_negative);
    }

    fn merge_exemplar(left: Option<Exemplar>, right: Option<Exemplar>) -> Option<Exemplar> {
        match (left, right) {
            (Some(l), Some(r)) => Some(if r.score > l.score { r } else { l }),
            (l, r) => l.or(r),
        }
    }

    fn floor(exemplar: &Option<Exemplar>) -> f64 {
        exemplar.as_ref().map(|e| e.score).unwrap_or(0.0)
    }
}

/// Terminal summary of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Total reviews analyzed (positive + negative + neutral)
    pub total_analyzed: usize,

    /// Total positive reviews across both paths
    pub total_positive: usize,

    /// Total negative reviews across both paths
    pub total_negative: usize,

    /// Neutral reviews (short-path ties)
    pub neutral: usize,

    /// Reviews routed to the short path
    pub short_reviews: usize,

    /// Reviews routed to the long path
    pub long_reviews: usize,

    /// Overall corpus sentiment
    pub overall: Overall,

    /// Most positive short review, if any scored above zero
    pub max_positive: Option<Exemplar>,

    /// Most negative short review, if any scored above zero
    pub max_negative: Option<Exemplar>,
}

impl AnalysisReport {
    /// Finalize accumulated statistics into a report.
    ///
    /// Overall sentiment is Positive only when positives strictly exceed
    /// negatives; a tie resolves to Negative.
    pub fn from_stats(stats: CorpusStats, short_reviews: usize, long_reviews: usize) -> Self {
        let overall = if stats.positive > stats.negative {
            Overall::Positive
        } else {
            Overall::Negative
        };
        Self {
            total_analyzed: stats.total_classified(),
            total_positive: stats.positive,
            total_negative: stats.negative,
            neutral: stats.neutral,
            short_reviews,
            long_reviews,
            overall,
            max_positive: stats.max_positive,
            max_negative: stats.max_negative,
        }
    }
}
