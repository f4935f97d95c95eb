//! `anscore quality` command - aggregate a metric map
//!
//! Reads a JSON object of metric name to number (or null) and prints the
//! weighted 0-100 quality score. Unknown names are ignored and not counted
//! in `metrics_used`.

use crate::cli::{Cli, QualityArgs};
use crate::commands::input::read_source;
use crate::output_by_format_result;
use anscore_core::error::{AnscoreError, Result};
use anscore_core::format::{format_score, records_header};
use anscore_core::metrics::{Evaluator, MetricMap};

/// Execute the quality command
pub fn execute(cli: &Cli, evaluator: &Evaluator, args: &QualityArgs) -> Result<()> {
    let content = read_source(args.input.as_deref())?;
    let metrics = parse_metric_map(&content)?;
    let score = evaluator.aggregate_quality(&metrics);

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "quality_score": score,
                "metrics_used": evaluator.contributing_metrics(&metrics),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), AnscoreError>(())
        },
        human => {
            if cli.quiet {
                println!("{:.2}", score);
            } else {
                println!("Quality score: {:.2}/100", score);
            }
        },
        records => {
            println!("{}", records_header("quality", Some(evaluator.backend_name())));
            println!("M quality_score={}", format_score(Some(score)));
        }
    )
}

/// Parse a JSON metric map; malformed JSON is a data error at its line
pub fn parse_metric_map(content: &str) -> Result<MetricMap> {
    serde_json::from_str(content).map_err(|e| AnscoreError::InvalidInput {
        line: e.line(),
        reason: e.to_string(),
    })
}
