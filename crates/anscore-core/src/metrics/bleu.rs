//! Lexical overlap: sentence BLEU and its set-overlap substitute

use std::collections::{HashMap, HashSet};

/// Highest n-gram order; each order carries weight `1 / MAX_ORDER`
pub const MAX_ORDER: usize = 4;

/// Sentence BLEU-4 against a single reference.
///
/// Modified (clipped) n-gram precision for n = 1..=4 combined by geometric mean with
/// equal weights, times the brevity penalty. Without smoothing, any order with no
/// matching n-gram (including candidates shorter than four tokens) scores 0.0.
pub fn sentence_bleu(candidate: &[String], reference: &[String]) -> f64 {
    if candidate.is_empty() || reference.is_empty() {
        return 0.0;
    }

    let weight = 1.0 / MAX_ORDER as f64;
    let mut log_precision = 0.0;
    for n in 1..=MAX_ORDER {
        let (clipped, total) = modified_precision(candidate, reference, n);
        if clipped == 0 || total == 0 {
            return 0.0;
        }
        log_precision += weight * (clipped as f64 / total as f64).ln();
    }

    let score = brevity_penalty(candidate.len(), reference.len()) * log_precision.exp();
    score.clamp(0.0, 1.0)
}

/// Unordered overlap F1 over unique tokens.
///
/// Used where n-gram BLEU is unavailable; it is not numerically equivalent to BLEU.
pub fn overlap_f1(candidate: &[String], reference: &[String]) -> f64 {
    let candidate_set: HashSet<&str> = candidate.iter().map(String::as_str).collect();
    let reference_set: HashSet<&str> = reference.iter().map(String::as_str).collect();
    let common = candidate_set.intersection(&reference_set).count() as f64;

    let precision = if candidate_set.is_empty() {
        0.0
    } else {
        common / candidate_set.len() as f64
    };
    let recall = if reference_set.is_empty() {
        0.0
    } else {
        common / reference_set.len() as f64
    };

    if precision + recall == 0.0 {
        return 0.0;
    }
    2.0 * precision * recall / (precision + recall)
}

/// Clipped n-gram matches and total candidate n-grams
fn modified_precision(candidate: &[String], reference: &[String], n: usize) -> (usize, usize) {
    let candidate_counts = ngram_counts(candidate, n);
    let reference_counts = ngram_counts(reference, n);
    let total = candidate_counts.values().sum();

    let clipped = candidate_counts
        .iter()
        .map(|(ngram, &count)| count.min(reference_counts.get(ngram).copied().unwrap_or(0)))
        .sum();

    (clipped, total)
}

fn ngram_counts(tokens: &[String], n: usize) -> HashMap<&[String], usize> {
    let mut counts = HashMap::new();
    if tokens.len() >= n {
        for window in tokens.windows(n) {
            *counts.entry(window).or_insert(0) += 1;
        }
    }
    counts
}

/// `1` when the candidate is longer than the reference, `exp(1 - r/c)` otherwise
fn brevity_penalty(candidate_len: usize, reference_len: usize) -> f64 {
    if candidate_len > reference_len {
        1.0
    } else if candidate_len == 0 {
        0.0
    } else {
        (1.0 - reference_len as f64 / candidate_len as f64).exp()
    }
}
