//! `anscore score` command - score one answer
//!
//! - answer from `--answer`, `--answer-file` or stdin
//! - optional reference, question, feedback, judgment and response time
//! - prints one evaluation record
//!
//! Example usage:
//! - `anscore score --answer "The cat sat." --reference "A cat sat on the mat."`
//! - `generate-answer | anscore --format json score --reference-file expected.txt`

use std::time::Instant;

use chrono::Utc;
use tracing::debug;

use crate::cli::{Cli, ScoreArgs};
use crate::commands::input::{read_stdin, read_text, trim_line_end};
use crate::commands::report::{human_lines, metric_pairs};
use crate::output_by_format_result;
use anscore_core::error::{AnscoreError, Result};
use anscore_core::format::{format_score, records_header};
use anscore_core::metrics::Evaluator;
use anscore_core::records::{EvaluationInput, EvaluationRecord};

/// Execute the score command
pub fn execute(cli: &Cli, evaluator: &Evaluator, args: &ScoreArgs) -> Result<()> {
    let start = Instant::now();

    let input = build_input(args)?;
    input.validate()?;

    if cli.verbose {
        debug!(
            answer_len = input.answer.len(),
            reference_len = input.reference_answer.len(),
            "score_input"
        );
    }

    let record = EvaluationRecord::build(evaluator, input, Utc::now());

    if cli.verbose {
        debug!(elapsed = ?start.elapsed(), quality = record.quality_score, "score");
    }

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok::<(), AnscoreError>(())
        },
        human => {
            for line in human_lines(&record, evaluator.backend_name(), cli.quiet) {
                println!("{}", line);
            }
        },
        records => {
            println!("{}", records_header("score", Some(evaluator.backend_name())));
            println!("M quality_score={}", format_score(Some(record.quality_score)));
            for pair in metric_pairs(&record) {
                println!("M {}", pair);
            }
        }
    )
}

/// Collect the answer and its context from flags, files and stdin
fn build_input(args: &ScoreArgs) -> Result<EvaluationInput> {
    let answer = match read_text(args.answer.as_deref(), args.answer_file.as_deref())? {
        Some(answer) => answer,
        None => trim_line_end(read_stdin()?),
    };
    let reference = read_text(args.reference.as_deref(), args.reference_file.as_deref())?;

    Ok(EvaluationInput {
        question: args.question.clone().unwrap_or_default(),
        answer,
        reference_answer: reference.unwrap_or_default(),
        feedback: args.feedback.clone().unwrap_or_default(),
        is_correct: args.is_correct,
        response_time_seconds: args.response_time,
    })
}
