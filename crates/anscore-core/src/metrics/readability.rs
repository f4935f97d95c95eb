//! Sentence-length readability heuristic

use crate::config::ReadabilityConfig;
use crate::text::{char_len, sentences};

/// Triangular score of the average sentence length around the configured ideal.
///
/// Average length is the full text length (in characters) divided by the number of
/// non-empty sentences. Text without sentences scores 0.0.
pub fn readability(text: &str, config: &ReadabilityConfig) -> f64 {
    let count = sentences(text).len();
    if count == 0 {
        return 0.0;
    }

    let avg_len = char_len(text) as f64 / count as f64;
    let score = 1.0 - (avg_len - config.ideal_sentence_chars).abs() / config.tolerance_chars;
    score.clamp(0.0, 1.0)
}
