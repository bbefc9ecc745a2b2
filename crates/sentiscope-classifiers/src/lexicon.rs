//! Lexicon-based polarity scorer
//!
//! A rule/dictionary scorer in the VADER family: per-token valences from an
//! embedded lexicon, adjusted by boosters and negations in a three-token
//! window, plus multi-word phrase valences. No training required.

use std::collections::{HashMap, HashSet};

use aho_corasick::AhoCorasick;
use async_trait::async_trait;
use sentiscope_core::{Error, PolarityScore, Result};

use crate::scorer::PolarityScorer;

/// Normalization constant for the compound score
const ALPHA: f64 = 15.0;

/// Valence multiplier applied when a negation precedes a token
const NEGATION_SCALAR: f64 = -0.74;

/// Booster damping by distance from the scored token
const BOOSTER_DAMPING: [f64; 3] = [1.0, 0.95, 0.9];

/// Word valences, roughly on a [-4, 4] scale
const LEXICON: &[(&str, f64)] = &[
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("brilliant", 2.8),
    ("charming", 2.4),
    ("classic", 1.8),
    ("clever", 2.1),
    ("compelling", 2.1),
    ("delightful", 2.8),
    ("engaging", 1.9),
    ("enjoyable", 1.9),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("flawless", 3.1),
    ("fresh", 1.3),
    ("fun", 2.3),
    ("good", 1.9),
    ("great", 3.1),
    ("gripping", 2.2),
    ("happy", 2.7),
    ("hilarious", 2.7),
    ("impressive", 2.4),
    ("love", 3.2),
    ("loved", 2.9),
    ("masterpiece", 3.4),
    ("memorable", 2.0),
    ("perfect", 2.7),
    ("recommend", 1.7),
    ("recommended", 1.9),
    ("remarkable", 2.4),
    ("satisfying", 2.1),
    ("solid", 1.6),
    ("stunning", 2.9),
    ("superb", 3.1),
    ("thrilling", 2.4),
    ("wonderful", 2.7),
    ("witty", 2.2),
    ("annoying", -2.2),
    ("atrocious", -3.0),
    ("awful", -3.1),
    ("awkward", -1.5),
    ("bad", -2.5),
    ("bland", -1.6),
    ("boring", -2.5),
    ("cheap", -1.3),
    ("cliche", -1.5),
    ("clumsy", -1.6),
    ("confusing", -1.6),
    ("disappointed", -2.2),
    ("disappointing", -2.3),
    ("dreadful", -2.9),
    ("dull", -1.9),
    ("failure", -2.4),
    ("fails", -1.9),
    ("flawed", -1.7),
    ("forgettable", -1.8),
    ("garbage", -2.5),
    ("hate", -2.7),
    ("hated", -2.9),
    ("horrible", -2.9),
    ("lame", -2.2),
    ("lifeless", -1.9),
    ("mediocre", -1.6),
    ("mess", -1.9),
    ("miscast", -1.5),
    ("nonsense", -1.7),
    ("overrated", -1.9),
    ("painful", -2.2),
    ("pathetic", -2.6),
    ("pointless", -2.2),
    ("poor", -2.3),
    ("predictable", -1.4),
    ("pretentious", -1.8),
    ("ridiculous", -1.9),
    ("sad", -2.1),
    ("shallow", -1.7),
    ("stupid", -2.4),
    ("tedious", -2.1),
    ("terrible", -3.0),
    ("trash", -2.2),
    ("unfunny", -2.1),
    ("uninspired", -1.9),
    ("waste", -2.4),
    ("wasted", -2.2),
    ("weak", -1.8),
    ("worst", -3.1),
];

/// Words that flip the sign of a following valence
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "nothing", "nowhere", "hardly", "barely", "scarcely",
    "without", "cannot", "cant", "can't", "dont", "don't", "doesnt", "doesn't", "didnt", "didn't",
    "isnt", "isn't", "wasnt", "wasn't", "werent", "weren't", "wont", "won't", "wouldnt",
    "wouldn't", "shouldnt", "shouldn't", "couldnt", "couldn't", "aint", "ain't", "lacks",
    "lacking",
];

/// Intensity adjustments contributed by a preceding word
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("completely", 0.293),
    ("deeply", 0.293),
    ("especially", 0.293),
    ("extremely", 0.293),
    ("hugely", 0.293),
    ("incredibly", 0.293),
    ("particularly", 0.293),
    ("really", 0.293),
    ("remarkably", 0.293),
    ("so", 0.293),
    ("thoroughly", 0.293),
    ("totally", 0.293),
    ("truly", 0.293),
    ("utterly", 0.293),
    ("very", 0.293),
    ("almost", -0.293),
    ("fairly", -0.293),
    ("marginally", -0.293),
    ("partly", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
];

/// Multi-word phrases contributing valence entries on top of word scores
const PHRASES: &[(&str, f64)] = &[
    ("the bomb", 3.0),
    ("bad ass", 1.5),
    ("to die for", 3.0),
    ("tour de force", 3.0),
    ("edge of your seat", 2.5),
    ("yeah right", -2.0),
    ("kiss of death", -1.5),
    ("broken heart", -2.9),
    ("fell flat", -2.1),
    ("falls flat", -2.1),
];

/// VADER-style polarity scorer over an embedded valence lexicon
pub struct LexiconScorer {
    name: String,
    valences: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
    boosters: HashMap<&'static str, f64>,
    phrases: AhoCorasick,
    phrase_valences: Vec<f64>,
}

impl LexiconScorer {
    /// Create a scorer over the embedded lexicon
    pub fn new() -> Result<Self> {
        Self::with_name("lexicon")
    }

    /// Create a scorer with a custom name
    pub fn with_name(name: impl Into<String>) -> Result<Self> {
        let (phrase_strs, phrase_valences): (Vec<_>, Vec<_>) = PHRASES.iter().copied().unzip();

        let phrases = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&phrase_strs)
            .map_err(|e| Error::scorer(format!("failed to build phrase matcher: {e}")))?;

        Ok(Self {
            name: name.into(),
            valences: LEXICON.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
            phrases,
            phrase_valences,
        })
    }

    /// Valence of each token after booster and negation adjustment.
    ///
    /// Tokens outside the lexicon contribute 0.0, which feeds the neutral
    /// proportion.
    fn token_valences(&self, words: &[String]) -> Vec<f64> {
        let mut valences = Vec::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            if self.boosters.contains_key(word.as_str()) {
                valences.push(0.0);
                continue;
            }
            let Some(&base) = self.valences.get(word.as_str()) else {
                valences.push(0.0);
                continue;
            };

            let mut valence = base;
            let mut negated = false;
            for (distance, damping) in BOOSTER_DAMPING.iter().enumerate() {
                let Some(j) = i.checked_sub(distance + 1) else {
                    break;
                };
                let prior = words[j].as_str();
                if let Some(&boost) = self.boosters.get(prior) {
                    let aligned = if base < 0.0 { -boost } else { boost };
                    valence += aligned * damping;
                }
                if self.negations.contains(prior) {
                    negated = true;
                }
            }
            if negated {
                valence *= NEGATION_SCALAR;
            }
            valences.push(valence);
        }
        valences
    }

    /// Valences contributed by multi-word phrase matches
    fn phrase_hits(&self, text: &str) -> Vec<f64> {
        self.phrases
            .find_iter(text)
            .map(|m| self.phrase_valences[m.pattern().as_usize()])
            .collect()
    }

    fn normalize(sum: f64) -> f64 {
        let compound = sum / (sum * sum + ALPHA).sqrt();
        compound.clamp(-1.0, 1.0)
    }
}

#[async_trait]
impl PolarityScorer for LexiconScorer {
    async fn score(&self, text: &str) -> Result<PolarityScore> {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|w| {
                w.trim_matches(|c: char| c.is_ascii_punctuation())
                    .to_lowercase()
            })
            .collect();

        let mut valences = self.token_valences(&words);
        valences.extend(self.phrase_hits(text));

        if valences.is_empty() {
            return Ok(PolarityScore::zero());
        }

        let mut positive_sum = 0.0;
        let mut negative_sum = 0.0;
        let mut neutral_count = 0.0;
        for &v in &valences {
            if v > 0.0 {
                positive_sum += v + 1.0;
            } else if v < 0.0 {
                negative_sum += v - 1.0;
            } else {
                neutral_count += 1.0;
            }
        }

        let total = positive_sum + negative_sum.abs() + neutral_count;
        let (positive, negative, neutral) = if total > 0.0 {
            (
                positive_sum / total,
                negative_sum.abs() / total,
                neutral_count / total,
            )
        } else {
            (0.0, 0.0, 0.0)
        };

        let sum: f64 = valences.iter().sum();
        Ok(PolarityScore {
            positive,
            negative,
            neutral,
            compound: Self::normalize(sum),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
