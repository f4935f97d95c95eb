//! Weighted aggregation of sub-scores into a 0-100 quality score

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bail_config;
use crate::error::{AnscoreError, Result};

/// Metric name to value; `None` marks a metric the caller knows but has no value for
pub type MetricMap = BTreeMap<String, Option<f64>>;

/// Allowed deviation of the weight total from 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Per-metric weights of the quality score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityWeights {
    pub is_correct: f64,
    pub bleu_score: f64,
    pub similarity_score: f64,
    pub relevance_score: f64,
    pub sentiment_score: f64,
    pub readability_score: f64,
    pub diversity_score: f64,
    pub conciseness_score: f64,
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            is_correct: 0.25,
            bleu_score: 0.15,
            similarity_score: 0.15,
            relevance_score: 0.15,
            sentiment_score: 0.05,
            readability_score: 0.10,
            diversity_score: 0.05,
            conciseness_score: 0.10,
        }
    }
}

impl QualityWeights {
    /// Metric names paired with their weights, in a fixed order
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("is_correct", self.is_correct),
            ("bleu_score", self.bleu_score),
            ("similarity_score", self.similarity_score),
            ("relevance_score", self.relevance_score),
            ("sentiment_score", self.sentiment_score),
            ("readability_score", self.readability_score),
            ("diversity_score", self.diversity_score),
            ("conciseness_score", self.conciseness_score),
        ]
    }

    pub fn total(&self) -> f64 {
        self.entries().iter().map(|(_, w)| w).sum()
    }

    /// Weights must be finite, non-negative and sum to 1.0
    pub fn validate(&self) -> Result<()> {
        for (name, weight) in self.entries() {
            if !weight.is_finite() || weight < 0.0 {
                bail_config!("weight for {} must be a non-negative number, got {}", name, weight);
            }
        }
        let total = self.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            bail_config!("weights must sum to 1.0, got {}", total);
        }
        Ok(())
    }
}

/// Computes the quality score from a metric map
#[derive(Debug, Clone, Default)]
pub struct QualityAggregator {
    weights: QualityWeights,
}

impl QualityAggregator {
    pub fn new(weights: QualityWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &QualityWeights {
        &self.weights
    }

    /// Weighted sum of present metrics scaled to [0, 100].
    ///
    /// Absent, `None` and non-finite entries contribute nothing; the remaining
    /// weights are not renormalized. Names outside the weight table are ignored.
    pub fn aggregate(&self, metrics: &MetricMap) -> f64 {
        let raw: f64 = self.weighted(metrics).map(|(value, weight)| value * weight).sum();
        (raw * 100.0).clamp(0.0, 100.0)
    }

    /// Number of entries that contribute to [`aggregate`](Self::aggregate)
    pub fn contributing(&self, metrics: &MetricMap) -> usize {
        self.weighted(metrics).count()
    }

    fn weighted<'a>(&'a self, metrics: &'a MetricMap) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.weights
            .entries()
            .into_iter()
            .filter_map(move |(name, weight)| match metrics.get(name) {
                Some(Some(value)) if value.is_finite() => Some((*value, weight)),
                _ => None,
            })
    }
}

/// Human correctness judgment supplied alongside an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "CorrectnessRepr")]
pub enum Correctness {
    Correct,
    Partial,
    Incorrect,
}

impl Correctness {
    pub fn value(self) -> f64 {
        match self {
            Correctness::Correct => 1.0,
            Correctness::Partial => 0.5,
            Correctness::Incorrect => 0.0,
        }
    }
}

impl FromStr for Correctness {
    type Err = AnscoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "correct" | "正確" | "1" | "1.0" => Ok(Correctness::Correct),
            "partial" | "部分的に正確" | "0.5" => Ok(Correctness::Partial),
            "incorrect" | "不正確" | "0" | "0.0" => Ok(Correctness::Incorrect),
            other => Err(AnscoreError::invalid_value(
                "correctness (expected correct, partial, or incorrect)",
                other,
            )),
        }
    }
}

/// Accepts either a label or one of the numeric grades 1.0, 0.5, 0.0
#[derive(Deserialize)]
#[serde(untagged)]
enum CorrectnessRepr {
    Grade(f64),
    Label(String),
}

impl TryFrom<CorrectnessRepr> for Correctness {
    type Error = AnscoreError;

    fn try_from(repr: CorrectnessRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            CorrectnessRepr::Grade(g) if g == 1.0 => Ok(Correctness::Correct),
            CorrectnessRepr::Grade(g) if g == 0.5 => Ok(Correctness::Partial),
            CorrectnessRepr::Grade(g) if g == 0.0 => Ok(Correctness::Incorrect),
            CorrectnessRepr::Grade(g) => Err(AnscoreError::invalid_value(
                "correctness grade (expected 1.0, 0.5, or 0.0)",
                g,
            )),
            CorrectnessRepr::Label(label) => label.parse(),
        }
    }
}

impl fmt::Display for Correctness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Correctness::Correct => write!(f, "correct"),
            Correctness::Partial => write!(f, "partial"),
            Correctness::Incorrect => write!(f, "incorrect"),
        }
    }
}
