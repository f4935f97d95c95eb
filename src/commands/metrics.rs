//! `anscore metrics` command - describe every reported metric

use crate::cli::Cli;
use crate::output_by_format_result;
use anscore_core::error::{AnscoreError, Result};
use anscore_core::format::{escape_quotes, records_header};
use anscore_core::metrics::QualityWeights;
use anscore_core::records::metric_descriptions;

use super::dispatch::resolve_config;

/// Execute the metrics command
pub fn execute(cli: &Cli) -> Result<()> {
    let weights = resolve_config(cli)?.weights;
    let weight_of = |name: &str| weight(&weights, name);

    output_by_format_result!(cli.format,
        json => {
            let output: Vec<_> = metric_descriptions()
                .iter()
                .map(|d| {
                    serde_json::json!({
                        "name": d.name,
                        "description": d.description,
                        "weight": weight_of(d.name),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), AnscoreError>(())
        },
        human => {
            for d in metric_descriptions() {
                match weight_of(d.name) {
                    Some(w) if !cli.quiet => println!("{:<18} {}  (weight {:.2})", d.name, d.description, w),
                    _ => println!("{:<18} {}", d.name, d.description),
                }
            }
        },
        records => {
            println!("{}", records_header("metrics", None));
            for d in metric_descriptions() {
                let w = weight_of(d.name).map(|w| format!("{}", w)).unwrap_or_else(|| "-".to_string());
                println!("D {} weight={} \"{}\"", d.name, w, escape_quotes(d.description));
            }
        }
    )
}

/// Quality weight of a metric; `None` for metrics outside the aggregate
fn weight(weights: &QualityWeights, name: &str) -> Option<f64> {
    weights
        .entries()
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, w)| *w)
}
