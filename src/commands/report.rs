//! Rendering of evaluation records shared by `score` and `batch`

use anscore_core::format::{escape_quotes, format_score};
use anscore_core::records::{metric_descriptions, EvaluationRecord};

/// Value of a described metric in a record; `None` when not known
pub fn metric_value(record: &EvaluationRecord, name: &str) -> Option<f64> {
    let m = &record.metrics;
    match name {
        "is_correct" => record.is_correct,
        "response_time" => record.response_time_seconds,
        "efficiency_score" => record.efficiency_score,
        "bleu_score" => Some(m.bleu_score),
        "similarity_score" => Some(m.similarity_score),
        "word_count" => Some(m.word_count as f64),
        "relevance_score" => Some(m.relevance_score),
        "sentiment_score" => Some(m.sentiment_score),
        "readability_score" => Some(m.readability_score),
        "diversity_score" => Some(m.diversity_score),
        "conciseness_score" => Some(m.conciseness_score),
        _ => None,
    }
}

/// Text form of a metric value; counts print without decimals
pub fn metric_text(name: &str, value: Option<f64>) -> String {
    match (name, value) {
        ("word_count", Some(v)) => format!("{}", v as usize),
        _ => format_score(value),
    }
}

/// Every described metric of a record as `name=value` pairs, in catalogue order
pub fn metric_pairs(record: &EvaluationRecord) -> Vec<String> {
    metric_descriptions()
        .iter()
        .map(|d| {
            format!(
                "{}={}",
                d.name,
                metric_text(d.name, metric_value(record, d.name))
            )
        })
        .collect()
}

/// Multi-line human summary of one record
pub fn human_lines(record: &EvaluationRecord, backend: &str, quiet: bool) -> Vec<String> {
    let mut lines = vec![format!(
        "Quality score: {:.2}/100 (backend: {})",
        record.quality_score, backend
    )];
    if quiet {
        return lines;
    }

    lines.push(String::new());
    for d in metric_descriptions() {
        lines.push(format!(
            "  {:<18} {}",
            d.name,
            metric_text(d.name, metric_value(record, d.name))
        ));
    }
    lines
}

/// One `R` line for a record in a batch
pub fn record_line(index: usize, record: &EvaluationRecord) -> String {
    format!(
        "R {} quality_score={} {} question=\"{}\"",
        index,
        format_score(Some(record.quality_score)),
        metric_pairs(record).join(" "),
        escape_quotes(&record.question)
    )
}
