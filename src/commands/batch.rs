//! `anscore batch` command - score a JSON Lines file of answers
//!
//! Each non-blank line is one evaluation input:
//! `{"question": "...", "answer": "...", "reference_answer": "...", "is_correct": "correct", "response_time": 1.2}`
//!
//! All lines are parsed before any is scored, so a malformed line fails the
//! run without partial output.

use std::time::Instant;

use chrono::Utc;
use tracing::debug;

use crate::cli::{BatchArgs, Cli};
use crate::commands::input::read_source;
use crate::commands::report::record_line;
use crate::output_by_format_result;
use anscore_core::error::{AnscoreError, Result};
use anscore_core::format::{format_score, records_header};
use anscore_core::metrics::Evaluator;
use anscore_core::records::{EvaluationInput, EvaluationRecord};

/// Execute the batch command
pub fn execute(cli: &Cli, evaluator: &Evaluator, args: &BatchArgs) -> Result<()> {
    let start = Instant::now();

    let content = read_source(args.input.as_deref())?;
    let inputs = parse_inputs(&content)?;
    let records: Vec<EvaluationRecord> = inputs
        .into_iter()
        .map(|input| EvaluationRecord::build(evaluator, input, Utc::now()))
        .collect();

    if cli.verbose {
        debug!(elapsed = ?start.elapsed(), count = records.len(), "batch");
    }

    output_by_format_result!(cli.format,
        json => {
            for record in &records {
                println!("{}", serde_json::to_string(record)?);
            }
            Ok::<(), AnscoreError>(())
        },
        human => {
            output_human(cli, &records);
        },
        records => {
            println!("{}", records_header("batch", Some(evaluator.backend_name())));
            for (i, record) in records.iter().enumerate() {
                println!("{}", record_line(i + 1, record));
            }
        }
    )
}

/// Parse JSON Lines input, skipping blank lines; errors name the 1-based line
pub fn parse_inputs(content: &str) -> Result<Vec<EvaluationInput>> {
    let mut inputs = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let invalid = |reason: String| AnscoreError::InvalidInput {
            line: idx + 1,
            reason,
        };
        let input: EvaluationInput =
            serde_json::from_str(line).map_err(|e| invalid(e.to_string()))?;
        input.validate().map_err(|e| invalid(e.to_string()))?;
        inputs.push(input);
    }
    Ok(inputs)
}

fn output_human(cli: &Cli, records: &[EvaluationRecord]) {
    if records.is_empty() {
        if !cli.quiet {
            println!("No answers to score");
        }
        return;
    }

    println!(
        "{:>4}  {:>7}  {:>6}  {:>6}  {:>6}  {:>6}  {:>6}  {:>6}  {:>6}  {:>5}",
        "#", "quality", "bleu", "sim", "rel", "sent", "read", "div", "conc", "words"
    );
    for (i, record) in records.iter().enumerate() {
        let m = &record.metrics;
        println!(
            "{:>4}  {:>7.2}  {:>6.3}  {:>6.3}  {:>6.3}  {:>6.3}  {:>6.3}  {:>6.3}  {:>6.3}  {:>5}",
            i + 1,
            record.quality_score,
            m.bleu_score,
            m.similarity_score,
            m.relevance_score,
            m.sentiment_score,
            m.readability_score,
            m.diversity_score,
            m.conciseness_score,
            m.word_count
        );
    }

    if !cli.quiet {
        let mean = records.iter().map(|r| r.quality_score).sum::<f64>() / records.len() as f64;
        println!();
        println!(
            "Scored {} answers, mean quality {}",
            records.len(),
            format_score(Some(mean))
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inputs_skips_blank_lines() {
        let content = "{\"answer\": \"one\"}\n\n   \n{\"answer\": \"two\", \"reference\": \"2\"}\n";
        let inputs = parse_inputs(content).unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[1].reference_answer, "2");
    }

    #[test]
    fn test_parse_inputs_names_bad_line() {
        let content = "{\"answer\": \"one\"}\n{\"question\": \"no answer\"}\n";
        let err = parse_inputs(content).unwrap_err();
        assert!(matches!(err, AnscoreError::InvalidInput { line: 2, .. }));
    }

    #[test]
    fn test_parse_inputs_rejects_negative_time() {
        let content = "{\"answer\": \"one\", \"response_time\": -3}";
        let err = parse_inputs(content).unwrap_err();
        assert!(matches!(err, AnscoreError::InvalidInput { line: 1, .. }));
        assert!(err.to_string().contains("response time"));
    }

    #[test]
    fn test_parse_inputs_empty() {
        assert!(parse_inputs("").unwrap().is_empty());
    }
}
