//! Evaluation engine: per-answer metrics and the aggregate quality score
//!
//! Every sub-score is computed independently. A scorer that fails degrades to its
//! documented default (0.0, or 0.5 for sentiment) so `compute_metrics` always
//! returns a complete result.

pub mod bleu;
pub mod conciseness;
pub mod diversity;
pub mod quality;
pub mod readability;
pub mod relevance;
pub mod sentiment;
pub mod similarity;

use std::sync::OnceLock;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::backend::{select_backend, LanguageBackend, NaiveBackend};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::trace_time;

pub use quality::{Correctness, MetricMap, QualityAggregator, QualityWeights};

/// Neutral sentiment, reported when nothing better is known
pub const NEUTRAL_SENTIMENT: f64 = 0.5;

/// Scores for one candidate answer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsResult {
    pub bleu_score: f64,
    pub similarity_score: f64,
    pub word_count: usize,
    pub relevance_score: f64,
    pub sentiment_score: f64,
    pub readability_score: f64,
    pub diversity_score: f64,
    pub conciseness_score: f64,
}

impl Default for MetricsResult {
    fn default() -> Self {
        Self {
            bleu_score: 0.0,
            similarity_score: 0.0,
            word_count: 0,
            relevance_score: 0.0,
            sentiment_score: NEUTRAL_SENTIMENT,
            readability_score: 0.0,
            diversity_score: 0.0,
            conciseness_score: 0.0,
        }
    }
}

impl MetricsResult {
    /// Scores keyed by metric name, ready for aggregation
    pub fn to_metric_map(&self) -> MetricMap {
        [
            ("bleu_score", self.bleu_score),
            ("similarity_score", self.similarity_score),
            ("word_count", self.word_count as f64),
            ("relevance_score", self.relevance_score),
            ("sentiment_score", self.sentiment_score),
            ("readability_score", self.readability_score),
            ("diversity_score", self.diversity_score),
            ("conciseness_score", self.conciseness_score),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), Some(value)))
        .collect()
    }
}

/// Scores answers with a fixed backend and configuration
#[derive(Debug)]
pub struct Evaluator {
    backend: Box<dyn LanguageBackend>,
    config: EngineConfig,
    aggregator: QualityAggregator,
}

impl Evaluator {
    /// Validate the configuration and select the language backend
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let backend = select_backend(&config)?;
        Ok(Self::with_backend(config, backend))
    }

    /// Use an already constructed backend
    pub fn with_backend(config: EngineConfig, backend: Box<dyn LanguageBackend>) -> Self {
        let aggregator = QualityAggregator::new(config.weights);
        Self {
            backend,
            config,
            aggregator,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score `candidate` against `reference` (empty when there is none). Never fails.
    pub fn compute_metrics(&self, candidate: &str, reference: &str) -> MetricsResult {
        let start = Instant::now();
        let mut result = MetricsResult::default();
        if candidate.is_empty() {
            return result;
        }

        let tokens = self.backend.tokenize(candidate);
        result.word_count = tokens.len();
        result.sentiment_score = match self.backend.sentiment(candidate) {
            Ok(score) => score,
            Err(e) => {
                warn!(error = %e, "sentiment analysis failed, using keyword counts");
                sentiment::keyword_sentiment(candidate)
            }
        };
        result.readability_score = readability::readability(candidate, &self.config.readability);
        result.diversity_score = diversity::diversity(&tokens);
        result.conciseness_score = conciseness::conciseness(candidate, &self.config.conciseness);

        if !reference.is_empty() {
            let candidate_lower = candidate.to_lowercase();
            let reference_lower = reference.to_lowercase();

            let candidate_tokens = self.backend.tokenize(&candidate_lower);
            let reference_tokens = self.backend.tokenize(&reference_lower);
            result.bleu_score = if candidate_tokens.is_empty() {
                0.0
            } else {
                self.backend.bleu(&candidate_tokens, &reference_tokens)
            };

            result.similarity_score = settle(
                "similarity",
                similarity::tfidf_similarity(
                    &candidate_lower,
                    &reference_lower,
                    self.config.similarity.stemming,
                ),
                0.0,
            );
            result.relevance_score = relevance::relevance(&candidate_lower, &reference_lower);
        }

        trace_time!(start, "compute_metrics", backend = self.backend.name());
        debug!(
            word_count = result.word_count,
            has_reference = !reference.is_empty(),
            "metrics computed"
        );
        result
    }

    /// Quality score in [0, 100] using the configured weights
    pub fn aggregate_quality(&self, metrics: &MetricMap) -> f64 {
        self.aggregator.aggregate(metrics)
    }

    /// Number of weighted, present and finite entries in a metric map
    pub fn contributing_metrics(&self, metrics: &MetricMap) -> usize {
        self.aggregator.contributing(metrics)
    }
}

/// Collapse a scorer result to its default at the component boundary
fn settle(scorer: &str, result: Result<f64>, default: f64) -> f64 {
    match result {
        Ok(score) if score.is_finite() => score,
        Ok(score) => {
            warn!(scorer, score, "non-finite score replaced by default");
            default
        }
        Err(e) => {
            warn!(scorer, error = %e, "scorer failed, using default");
            default
        }
    }
}

static DEFAULT_EVALUATOR: OnceLock<Evaluator> = OnceLock::new();

/// Process-wide evaluator with the default configuration
pub fn default_evaluator() -> &'static Evaluator {
    DEFAULT_EVALUATOR.get_or_init(|| {
        Evaluator::new(EngineConfig::default()).unwrap_or_else(|e| {
            warn!(error = %e, "default evaluator unavailable, using naive backend");
            Evaluator::with_backend(EngineConfig::default(), Box::new(NaiveBackend))
        })
    })
}

/// Score an answer with the default configuration
pub fn compute_metrics(candidate: &str, reference: &str) -> MetricsResult {
    default_evaluator().compute_metrics(candidate, reference)
}

/// Quality score in [0, 100] with the default weights
pub fn aggregate_quality(metrics: &MetricMap) -> f64 {
    QualityAggregator::default().aggregate(metrics)
}

#[cfg(test)]
mod tests;
