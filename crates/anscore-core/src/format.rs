//! Output format handling for anscore
//!
//! - human: readable, concise output for terminal use
//! - json: stable, machine-readable JSON
//! - records: line-oriented `H`/`M`/`R` lines for scripts and LLM context

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnscoreError;

/// Version of the records line format
pub const RECORDS_VERSION: u32 = 1;

/// Output format for anscore commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Records output for line-oriented consumers
    Records,
}

impl FromStr for OutputFormat {
    type Err = AnscoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(AnscoreError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Escape a value for a quoted records field: backslashes, double quotes and line breaks
pub fn escape_quotes(s: &str) -> String {
    s.replace('\\', r"\\")
        .replace('"', r#"\""#)
        .replace('\n', r"\n")
        .replace('\r', r"\r")
}

/// Records header line, e.g. `H anscore=1 records=1 mode=score backend=rich`
pub fn records_header(mode: &str, backend: Option<&str>) -> String {
    let mut header = format!(
        "H anscore={} records={} mode={}",
        RECORDS_VERSION, RECORDS_VERSION, mode
    );
    if let Some(backend) = backend {
        header.push_str(&format!(" backend={}", backend));
    }
    header
}

/// Render a score with fixed precision; absent values print as `-`
pub fn format_score(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.4}", v),
        _ => "-".to_string(),
    }
}
