//! Evaluation records: one scored answer with its context, ready for persistence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::Result;
use crate::metrics::{Correctness, Evaluator, MetricsResult};

/// One answer to evaluate, as read from the command line or a JSON Lines batch
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EvaluationInput {
    #[serde(default)]
    pub question: String,
    pub answer: String,
    #[serde(default, alias = "reference", alias = "correct_answer")]
    pub reference_answer: String,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub is_correct: Option<Correctness>,
    #[serde(default, alias = "response_time")]
    pub response_time_seconds: Option<f64>,
}

impl EvaluationInput {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            ..Self::default()
        }
    }

    /// Response time, when given, must be a finite non-negative number
    pub fn validate(&self) -> Result<()> {
        if let Some(secs) = self.response_time_seconds {
            if !secs.is_finite() || secs < 0.0 {
                bail_invalid!("response time (expected seconds >= 0)", secs);
            }
        }
        Ok(())
    }
}

/// Flat record of one evaluated answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub timestamp: DateTime<Utc>,
    pub question: String,
    pub answer: String,
    pub feedback: String,
    pub reference_answer: String,
    pub is_correct: Option<f64>,
    pub response_time_seconds: Option<f64>,
    #[serde(flatten)]
    pub metrics: MetricsResult,
    pub efficiency_score: Option<f64>,
    pub quality_score: f64,
}

impl EvaluationRecord {
    /// Score `input` and assemble the record
    pub fn build(evaluator: &Evaluator, input: EvaluationInput, timestamp: DateTime<Utc>) -> Self {
        let metrics = evaluator.compute_metrics(&input.answer, &input.reference_answer);
        let is_correct = input.is_correct.map(Correctness::value);

        let mut metric_map = metrics.to_metric_map();
        metric_map.insert("is_correct".to_string(), is_correct);
        let quality_score = evaluator.aggregate_quality(&metric_map);

        Self {
            timestamp,
            question: input.question,
            answer: input.answer,
            feedback: input.feedback,
            reference_answer: input.reference_answer,
            is_correct,
            response_time_seconds: input.response_time_seconds,
            metrics,
            efficiency_score: efficiency(is_correct, input.response_time_seconds),
            quality_score,
        }
    }
}

/// Correctness per second of response time; absent unless both are known and time is positive
pub fn efficiency(is_correct: Option<f64>, response_time_seconds: Option<f64>) -> Option<f64> {
    match (is_correct, response_time_seconds) {
        (Some(correct), Some(secs)) if secs > 0.0 && secs.is_finite() => Some(correct / secs),
        _ => None,
    }
}

/// Name and meaning of a reported metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricDescription {
    pub name: &'static str,
    pub description: &'static str,
}

const DESCRIPTIONS: &[MetricDescription] = &[
    MetricDescription {
        name: "is_correct",
        description: "Human correctness judgment: 1.0 correct, 0.5 partially correct, 0.0 incorrect",
    },
    MetricDescription {
        name: "response_time",
        description: "Seconds between asking the question and receiving the answer",
    },
    MetricDescription {
        name: "bleu_score",
        description: "N-gram overlap between answer and reference (0-1, higher is closer)",
    },
    MetricDescription {
        name: "similarity_score",
        description: "Cosine similarity of TF-IDF vectors of answer and reference (0-1)",
    },
    MetricDescription {
        name: "word_count",
        description: "Number of word units in the answer",
    },
    MetricDescription {
        name: "relevance_score",
        description: "Share of reference words that also appear in the answer (0-1)",
    },
    MetricDescription {
        name: "efficiency_score",
        description: "Correctness divided by response time; fast correct answers score higher",
    },
    MetricDescription {
        name: "sentiment_score",
        description: "Emotional tone of the answer from 0 (negative) to 1 (positive)",
    },
    MetricDescription {
        name: "readability_score",
        description: "Closeness of the average sentence length to the ideal length (0-1)",
    },
    MetricDescription {
        name: "diversity_score",
        description: "Distinct word units divided by total word units (0-1)",
    },
    MetricDescription {
        name: "conciseness_score",
        description: "How well the answer length fits the preferred range (0-1)",
    },
];

/// Catalogue of every reported metric, in display order
pub fn metric_descriptions() -> &'static [MetricDescription] {
    DESCRIPTIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::NaiveBackend;
    use crate::config::EngineConfig;
    use chrono::TimeZone;

    fn evaluator() -> Evaluator {
        Evaluator::with_backend(EngineConfig::default(), Box::new(NaiveBackend))
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_build_with_judgment() {
        let input = EvaluationInput {
            question: "Where did the cat sit?".to_string(),
            answer: "The cat sat on the mat.".to_string(),
            reference_answer: "The cat sat on the mat.".to_string(),
            is_correct: Some(Correctness::Correct),
            response_time_seconds: Some(2.0),
            ..EvaluationInput::default()
        };
        let record = EvaluationRecord::build(&evaluator(), input, fixed_time());

        assert_eq!(record.is_correct, Some(1.0));
        assert_eq!(record.efficiency_score, Some(0.5));
        assert_eq!(record.metrics.relevance_score, 1.0);
        assert!(record.quality_score > 25.0 && record.quality_score <= 100.0);
    }

    #[test]
    fn test_build_without_judgment_skips_correctness_weight() {
        let ev = evaluator();
        let input = EvaluationInput::new("The cat sat on the mat.");
        let record = EvaluationRecord::build(&ev, input, fixed_time());

        assert_eq!(record.is_correct, None);
        assert_eq!(record.efficiency_score, None);
        let expected = ev.aggregate_quality(&record.metrics.to_metric_map());
        assert_eq!(record.quality_score, expected);
    }

    #[test]
    fn test_efficiency() {
        assert_eq!(efficiency(Some(0.5), Some(0.25)), Some(2.0));
        assert_eq!(efficiency(Some(1.0), Some(0.0)), None);
        assert_eq!(efficiency(None, Some(3.0)), None);
        assert_eq!(efficiency(Some(1.0), None), None);
    }

    #[test]
    fn test_input_aliases_and_defaults() {
        let input: EvaluationInput = serde_json::from_str(
            r#"{"answer": "yes", "reference": "no", "is_correct": "partial", "response_time": 1.5}"#,
        )
        .unwrap();
        assert_eq!(input.reference_answer, "no");
        assert_eq!(input.is_correct, Some(Correctness::Partial));
        assert_eq!(input.response_time_seconds, Some(1.5));
        assert_eq!(input.question, "");
    }

    #[test]
    fn test_input_requires_answer() {
        assert!(serde_json::from_str::<EvaluationInput>(r#"{"question": "q"}"#).is_err());
    }

    #[test]
    fn test_validate_response_time() {
        let mut input = EvaluationInput::new("a");
        assert!(input.validate().is_ok());
        input.response_time_seconds = Some(-1.0);
        assert!(input.validate().is_err());
        input.response_time_seconds = Some(f64::INFINITY);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = EvaluationRecord::build(&evaluator(), EvaluationInput::new("hi"), fixed_time());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["timestamp"], "2024-05-01T12:00:00Z");
        assert_eq!(json["word_count"], 1);
        assert_eq!(json["sentiment_score"], 0.5);
        assert!(json.get("metrics").is_none());
        assert!(json["is_correct"].is_null());
    }

    #[test]
    fn test_descriptions_cover_weighted_metrics() {
        let names: Vec<&str> = metric_descriptions().iter().map(|d| d.name).collect();
        for (name, _) in crate::metrics::QualityWeights::default().entries() {
            assert!(names.contains(&name), "missing description for {}", name);
        }
        assert!(names.contains(&"efficiency_score"));
        assert!(names.contains(&"response_time"));
        assert_eq!(names.len(), 11);
    }
}
