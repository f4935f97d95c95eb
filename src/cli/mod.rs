//! CLI argument parsing for anscore
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config, --backend

pub mod args;
pub mod format;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use anscore_core::config::BackendPreference;
pub use anscore_core::format::OutputFormat;
pub use args::{BatchArgs, QualityArgs, ScoreArgs};
use parse::{parse_backend, parse_format};

/// anscore - multi-metric scoring of free-text answers
#[derive(Parser, Debug)]
#[command(name = "anscore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `anscore_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Engine configuration file (TOML)
    #[arg(long, global = true, env = "ANSCORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Language backend: auto, rich, or naive (overrides the config file)
    #[arg(long, global = true, value_parser = parse_backend)]
    pub backend: Option<BackendPreference>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one answer against an optional reference
    Score(ScoreArgs),

    /// Aggregate a JSON metric map into a quality score
    Quality(QualityArgs),

    /// Score a JSON Lines file of answers
    Batch(BatchArgs),

    /// Describe every reported metric
    Metrics,
}
