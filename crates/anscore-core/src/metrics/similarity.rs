//! TF-IDF cosine similarity over the two-document corpus {candidate, reference}

use std::collections::HashMap;

use crate::error::{AnscoreError, Result};
use crate::text::tfidf_terms;

/// Cosine similarity of the TF-IDF vectors of `candidate` and `reference`.
///
/// IDF is fitted on just these two documents, so scores are not comparable
/// across calls. Blank input scores 0.0; an empty joint vocabulary is an error.
pub fn tfidf_similarity(candidate: &str, reference: &str, stem: bool) -> Result<f64> {
    if candidate.trim().is_empty() || reference.trim().is_empty() {
        return Ok(0.0);
    }

    let docs = [
        term_frequencies(&tfidf_terms(candidate, stem)),
        term_frequencies(&tfidf_terms(reference, stem)),
    ];
    if docs.iter().all(HashMap::is_empty) {
        return Err(AnscoreError::computation(
            "similarity",
            "empty vocabulary; documents contain only stop characters",
        ));
    }

    let doc_freq = document_frequencies(&docs);
    let vec_a = tfidf_vector(&docs[0], &doc_freq, docs.len());
    let vec_b = tfidf_vector(&docs[1], &doc_freq, docs.len());

    Ok(cosine_similarity(&vec_a, &vec_b).clamp(0.0, 1.0))
}

fn term_frequencies(terms: &[String]) -> HashMap<String, f64> {
    let mut freqs = HashMap::new();
    for term in terms {
        *freqs.entry(term.clone()).or_insert(0.0) += 1.0;
    }
    freqs
}

fn document_frequencies(docs: &[HashMap<String, f64>]) -> HashMap<&str, usize> {
    let mut df = HashMap::new();
    for doc in docs {
        for term in doc.keys() {
            *df.entry(term.as_str()).or_insert(0) += 1;
        }
    }
    df
}

/// Smoothed IDF: `ln((N + 1) / (df + 1)) + 1`
fn tfidf_vector(
    term_freqs: &HashMap<String, f64>,
    doc_freq: &HashMap<&str, usize>,
    total_docs: usize,
) -> HashMap<String, f64> {
    let total_docs = total_docs as f64;
    term_freqs
        .iter()
        .map(|(term, &tf)| {
            let df = *doc_freq.get(term.as_str()).unwrap_or(&1) as f64;
            let idf = ((total_docs + 1.0) / (df + 1.0)).ln() + 1.0;
            (term.clone(), tf * idf)
        })
        .collect()
}

pub fn cosine_similarity(vec_a: &HashMap<String, f64>, vec_b: &HashMap<String, f64>) -> f64 {
    let mut dot_product = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (term, weight) in vec_a {
        norm_a += weight * weight;
        if let Some(weight_b) = vec_b.get(term) {
            dot_product += weight * weight_b;
        }
    }

    for weight in vec_b.values() {
        norm_b += weight * weight;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a.sqrt() * norm_b.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_documents() {
        let text = "the cat sat on the mat.";
        let score = tfidf_similarity(text, text, false).unwrap();
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_overlap_matches_smoothed_idf() {
        let score = tfidf_similarity("apple banana cherry", "apple banana date", false).unwrap();
        // shared terms idf = 1, unique terms idf = ln(3/2) + 1
        let unique = (1.5f64).ln() + 1.0;
        let expected = 2.0 / (2.0 + unique * unique);
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_documents() {
        let score = tfidf_similarity("apple banana", "cherry date", false).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_blank_input_scores_zero() {
        assert_eq!(tfidf_similarity("", "apple", false).unwrap(), 0.0);
        assert_eq!(tfidf_similarity("apple", "   ", false).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_vocabulary_is_error() {
        let err = tfidf_similarity("a ! ?", "b , .", false).unwrap_err();
        assert!(matches!(err, AnscoreError::Computation { .. }));
    }

    #[test]
    fn test_one_sided_vocabulary_scores_zero() {
        assert_eq!(tfidf_similarity("a b c", "apple banana", false).unwrap(), 0.0);
    }

    #[test]
    fn test_case_insensitive() {
        let score = tfidf_similarity("Apple Banana", "apple banana", false).unwrap();
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_stemming_links_inflections() {
        let plain = tfidf_similarity("graphs connect", "graph connecting", false).unwrap();
        let stemmed = tfidf_similarity("graphs connect", "graph connecting", true).unwrap();
        assert_eq!(plain, 0.0);
        assert!((stemmed - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_zero_vector() {
        let empty = HashMap::new();
        let mut other = HashMap::new();
        other.insert("x".to_string(), 1.0);
        assert_eq!(cosine_similarity(&empty, &other), 0.0);
    }
}
