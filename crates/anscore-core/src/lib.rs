//! anscore core library
//!
//! Scores a free-text answer against an optional reference on several
//! independent axes and combines them into a 0-100 quality score.

pub mod backend;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod metrics;
pub mod records;
pub mod text;

pub use backend::{select_backend, LanguageBackend, NaiveBackend, RichBackend};
pub use config::{BackendPreference, EngineConfig};
pub use error::{AnscoreError, ExitCode, Result};
pub use metrics::{
    aggregate_quality, compute_metrics, Correctness, Evaluator, MetricMap, MetricsResult,
    QualityAggregator, QualityWeights,
};
pub use records::{metric_descriptions, EvaluationInput, EvaluationRecord};
