//! Configuration type definitions

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnscoreError;
use crate::metrics::quality::QualityWeights;

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Which language backend to run
    #[serde(default)]
    pub backend: BackendPreference,

    /// Aggregation weights for the quality score
    #[serde(default)]
    pub weights: QualityWeights,

    /// Sentence-length heuristic parameters
    #[serde(default)]
    pub readability: ReadabilityConfig,

    /// Length preference window
    #[serde(default)]
    pub conciseness: ConcisenessConfig,

    /// TF-IDF similarity options
    #[serde(default)]
    pub similarity: SimilarityConfig,

    /// Sentiment lexicon options
    #[serde(default)]
    pub sentiment: SentimentConfig,
}

/// Backend selection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendPreference {
    /// Use the rich backend; a lexicon that fails to load degrades sentiment only
    #[default]
    Auto,
    /// Require the rich backend; asset failure is a startup error
    Rich,
    /// Pure string operations only
    Naive,
}

impl FromStr for BackendPreference {
    type Err = AnscoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(BackendPreference::Auto),
            "rich" => Ok(BackendPreference::Rich),
            "naive" => Ok(BackendPreference::Naive),
            other => Err(AnscoreError::invalid_value("backend", other)),
        }
    }
}

impl fmt::Display for BackendPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendPreference::Auto => write!(f, "auto"),
            BackendPreference::Rich => write!(f, "rich"),
            BackendPreference::Naive => write!(f, "naive"),
        }
    }
}

/// Readability: score peaks when the average sentence length equals `ideal_sentence_chars`
/// and falls linearly to zero `tolerance_chars` away from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityConfig {
    #[serde(default = "default_ideal_sentence_chars")]
    pub ideal_sentence_chars: f64,

    #[serde(default = "default_tolerance_chars")]
    pub tolerance_chars: f64,
}

impl Default for ReadabilityConfig {
    fn default() -> Self {
        Self {
            ideal_sentence_chars: default_ideal_sentence_chars(),
            tolerance_chars: default_tolerance_chars(),
        }
    }
}

fn default_ideal_sentence_chars() -> f64 {
    40.0
}

fn default_tolerance_chars() -> f64 {
    40.0
}

/// Conciseness: full score inside `[min_chars, max_chars]`, linear ramp below,
/// linear decay above reaching zero at `zero_chars`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcisenessConfig {
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,

    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    #[serde(default = "default_zero_chars")]
    pub zero_chars: usize,
}

impl Default for ConcisenessConfig {
    fn default() -> Self {
        Self {
            min_chars: default_min_chars(),
            max_chars: default_max_chars(),
            zero_chars: default_zero_chars(),
        }
    }
}

fn default_min_chars() -> usize {
    50
}

fn default_max_chars() -> usize {
    300
}

fn default_zero_chars() -> usize {
    1000
}

/// TF-IDF similarity options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// Reduce terms with the English Snowball stemmer before vectorizing
    #[serde(default)]
    pub stemming: bool,
}

/// Sentiment lexicon options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentConfig {
    /// External lexicon (TSV: token, valence) replacing the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexicon_path: Option<PathBuf>,
}
