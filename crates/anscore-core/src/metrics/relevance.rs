//! Word-set relevance against the reference

use crate::text::word_set;

/// Fraction of the reference's distinct words that appear in the candidate.
///
/// Words are lower-cased `\w+` runs. An empty reference word set scores 0.0.
pub fn relevance(candidate: &str, reference: &str) -> f64 {
    let reference_words = word_set(reference);
    if reference_words.is_empty() {
        return 0.0;
    }
    let candidate_words = word_set(candidate);
    let common = candidate_words.intersection(&reference_words).count();
    common as f64 / reference_words.len() as f64
}
