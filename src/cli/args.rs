//! Command argument structures

use std::path::PathBuf;

use clap::Args;

use crate::cli::parse::{parse_correctness, parse_seconds};
use anscore_core::metrics::Correctness;

/// Arguments for the score command.
#[derive(Args, Debug, Default)]
pub struct ScoreArgs {
    /// Answer text (read from stdin when neither --answer nor --answer-file is given)
    #[arg(long, short, conflicts_with = "answer_file")]
    pub answer: Option<String>,

    /// Read the answer from a file
    #[arg(long)]
    pub answer_file: Option<PathBuf>,

    /// Reference (expected) answer
    #[arg(long, short, conflicts_with = "reference_file")]
    pub reference: Option<String>,

    /// Read the reference answer from a file
    #[arg(long)]
    pub reference_file: Option<PathBuf>,

    /// Question the answer responds to
    #[arg(long)]
    pub question: Option<String>,

    /// Free-text feedback on the answer
    #[arg(long)]
    pub feedback: Option<String>,

    /// Human judgment: correct, partial, or incorrect
    #[arg(long, value_parser = parse_correctness)]
    pub is_correct: Option<Correctness>,

    /// Seconds taken to produce the answer
    #[arg(long, value_parser = parse_seconds)]
    pub response_time: Option<f64>,
}

/// Arguments for the quality command.
#[derive(Args, Debug, Default)]
pub struct QualityArgs {
    /// JSON file with a metric-name to value map (stdin when omitted)
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

/// Arguments for the batch command.
#[derive(Args, Debug, Default)]
pub struct BatchArgs {
    /// JSON Lines file of answers (stdin when omitted)
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}
